pub mod json;

pub use json::JsonDecoder;
