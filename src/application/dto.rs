//! Data Transfer Objects for application layer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::{BuildDescriptor, BuildTool, DEFAULT_PORT, DockerDescriptor, rules};

/// Container options for a scaffold run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerOptions {
    /// Defaults to the build's language version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_version: Option<i64>,
    #[serde(default)]
    pub build_tool: BuildTool,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DockerOptions {
    fn default() -> Self {
        Self {
            java_version: None,
            build_tool: BuildTool::default(),
            port: DEFAULT_PORT,
        }
    }
}

impl DockerOptions {
    pub fn descriptor_for(&self, build: &BuildDescriptor) -> DockerDescriptor {
        DockerDescriptor::new(self.java_version.unwrap_or(build.language_version))
            .with_build_tool(self.build_tool)
            .with_port(self.port)
    }
}

/// Request to scaffold a project's build files
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub output_dir: PathBuf,
    pub build: BuildDescriptor,
    pub docker: Option<DockerOptions>,
    /// Overwrite files that already exist
    pub force: bool,
}

impl ScaffoldRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }

        rules::validate_project_name(&self.project_name)
            .map_err(|e| ValidationError::InvalidProjectName(e.to_string()))?;

        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingField("output_dir".to_string()));
        }

        Ok(())
    }
}

/// Response from a scaffold run
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldResponse {
    pub output_path: PathBuf,
    pub files: Vec<PathBuf>,
}
