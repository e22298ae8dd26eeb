//! gradlegen - Gradle build descriptors for Spring Boot projects
//!
//! Renders `build.gradle.kts`, `settings.gradle.kts` and a container
//! `Dockerfile` from small typed descriptors, using Tera templates embedded
//! in the binary.
//!
//! ```
//! use gradlegen::{BuildDescriptor, Dependency};
//!
//! let descriptor = BuildDescriptor::new(21)
//!     .with_framework_version("3.2.0")
//!     .with_dependency(Dependency::compile("web"))
//!     .with_dependency(Dependency::test("test"));
//!
//! let script = gradlegen::render(&descriptor).unwrap();
//! assert!(script.contains("sourceCompatibility = JavaVersion.VERSION_21"));
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod error;
pub mod generation;
pub mod infrastructure;

use std::sync::Arc;

pub use crate::generation::{
    BuildDescriptor, BuildGenerator, BuildTool, Dependency, DependencyScope, DockerDescriptor,
    GenerationError, JavaVersion, Repository, TestPlatform, parse_build_script,
};
use crate::infrastructure::TeraTemplateRenderer;

/// Generator backed by the embedded templates
pub fn embedded_generator() -> BuildGenerator {
    BuildGenerator::new(Arc::new(TeraTemplateRenderer::embedded()))
}

/// Render `build.gradle.kts` text for `descriptor`
pub fn render(descriptor: &BuildDescriptor) -> Result<String, GenerationError> {
    embedded_generator().render_build_script(descriptor)
}

/// Render a `Dockerfile` for `descriptor`
pub fn render_dockerfile(descriptor: &DockerDescriptor) -> Result<String, GenerationError> {
    embedded_generator().render_dockerfile(descriptor)
}
