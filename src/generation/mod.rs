//! Generation domain module
//!
//! Descriptors, the rules they are validated against, and the generator that
//! turns them into rendered artifacts through a [`TemplateRenderer`].

pub mod context;
pub mod descriptor;
pub mod docker;
pub mod errors;
pub mod generator;
pub mod inspect;
pub mod rules;
pub mod traits;
pub mod types;

pub use context::*;
pub use descriptor::*;
pub use docker::*;
pub use errors::*;
pub use generator::*;
pub use inspect::parse_build_script;
pub use traits::*;
pub use types::*;
