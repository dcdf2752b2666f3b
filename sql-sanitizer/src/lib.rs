#![doc = include_str!("../README.md")]

mod cache;
mod scan;
mod scratch;
mod types;

pub use cache::{capacity, get, set_capacity, DEFAULT_CAPACITY};
pub use scan::sanitize;
pub use types::StatementInfo;

/// Crate version, exposed for pipelines that record it alongside the
/// statements they sanitize.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
