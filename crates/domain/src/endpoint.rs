use crate::resource::ResourceKind;
use url::Url;

/// Builds fully-qualified request URLs, which double as cache keys.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/{kind}/{reference}`
    pub fn detail(&self, kind: ResourceKind, reference: &str) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kind.as_str()).push(reference);
        }
        url.into()
    }

    /// `{base}/{kind}?offset={offset}&limit={limit}`
    pub fn page(&self, kind: ResourceKind, offset: usize, limit: usize) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kind.as_str());
        }
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        url.into()
    }
}
