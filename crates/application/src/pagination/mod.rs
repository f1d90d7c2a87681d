pub mod paginator;

pub use paginator::{PageFuture, PageWindow, Paginator};
