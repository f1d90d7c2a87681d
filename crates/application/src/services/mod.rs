pub mod cached_loader;
pub mod fan_out;

pub use cached_loader::CachedLoader;
pub use fan_out::FanOutResolver;
