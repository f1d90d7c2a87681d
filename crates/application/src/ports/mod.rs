pub mod decoder;
pub mod fetcher;
pub mod reference_resolver;
pub mod response_store;

pub use decoder::Decoder;
pub use fetcher::Fetcher;
pub use reference_resolver::ReferenceResolver;
pub use response_store::ResponseStore;
