use crate::errors::DomainError;
use std::num::NonZeroUsize;

pub const MISSING_RESOURCE: &str = "one of id or name must be provided";
pub const MULTIPLE_RESOURCES: &str = "id and name cannot both be provided";
pub const ZERO_PAGE_SIZE: &str = "page size must be greater than zero";

/// Identifies a single resource by numeric id or by name, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRequest {
    pub id: Option<u32>,
    pub name: Option<String>,
}

impl GetRequest {
    pub fn by_id(id: u32) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Path reference for the detail endpoint.
    ///
    /// An id of zero or an empty name counts as absent.
    pub fn resource(&self) -> Result<String, DomainError> {
        let id = self.id.filter(|id| *id != 0);
        let name = self.name.as_deref().filter(|n| !n.is_empty());

        match (id, name) {
            (None, None) => Err(DomainError::InvalidArgument(MISSING_RESOURCE.into())),
            (Some(_), Some(_)) => Err(DomainError::InvalidArgument(MULTIPLE_RESOURCES.into())),
            (Some(id), None) => Ok(id.to_string()),
            (None, Some(name)) => Ok(name.to_string()),
        }
    }
}

/// Requests a paginated walk over a collection.
///
/// Each page resolves every item concurrently, so `page_size` is also the
/// number of simultaneous upstream requests issued per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub page_size: u32,
}

impl ListRequest {
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> Result<NonZeroUsize, DomainError> {
        NonZeroUsize::new(self.page_size as usize)
            .ok_or_else(|| DomainError::InvalidArgument(ZERO_PAGE_SIZE.into()))
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}
