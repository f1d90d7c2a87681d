use serde::{Deserialize, Serialize};

/// Reference to another named resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// Reference to an unnamed resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ApiResource {
    pub url: String,
}

/// One page of a collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct NamedApiResourceList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedApiResource>,
}

impl NamedApiResourceList {
    /// Names in page order, used as fan-out references.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|r| r.name.clone()).collect()
    }
}
