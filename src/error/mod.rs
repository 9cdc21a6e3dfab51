//! Error types for the embedding adapter.

mod categories;
mod response;
mod types;

pub use categories::*;
pub use types::*;
