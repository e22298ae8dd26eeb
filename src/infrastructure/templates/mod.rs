//! Template repository implementations

pub mod embedded_repository;
pub mod errors;
pub mod filesystem_repository;
pub mod manifest;
pub mod traits;
pub mod types;

pub use embedded_repository::*;
pub use errors::*;
pub use filesystem_repository::*;
pub use manifest::parse_manifest_yaml;
pub use traits::*;
pub use types::*;
