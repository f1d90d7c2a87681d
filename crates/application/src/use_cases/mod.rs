pub mod get_resource;
pub mod list_resources;

pub use get_resource::GetResourceUseCase;
pub use list_resources::ListResourcesUseCase;
