//! Core types for the generation domain

use std::fmt;
use std::path::PathBuf;

/// Template directory holding the Gradle Kotlin DSL files
pub const GRADLE_TEMPLATE: &str = "gradle/kotlin";
/// Template directory holding the container build
pub const DOCKER_TEMPLATE: &str = "docker/java";

/// One renderable template file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    BuildScript,
    Settings,
    Dockerfile,
}

impl TemplateKind {
    /// Template directory, relative to the template root
    pub fn template_path(&self) -> &'static str {
        match self {
            TemplateKind::BuildScript | TemplateKind::Settings => GRADLE_TEMPLATE,
            TemplateKind::Dockerfile => DOCKER_TEMPLATE,
        }
    }

    /// Template file name inside [`Self::template_path`]
    pub fn source(&self) -> &'static str {
        match self {
            TemplateKind::BuildScript => "build.gradle.kts.tera",
            TemplateKind::Settings => "settings.gradle.kts.tera",
            TemplateKind::Dockerfile => "Dockerfile.tera",
        }
    }

    /// Destination used when the manifest doesn't list the source
    pub fn default_destination(&self) -> &'static str {
        self.source().trim_end_matches(".tera")
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.template_path(), self.source())
    }
}

/// Generated artifact, path relative to the output directory until written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
