//! Container build descriptor

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::generation::{GenerationError, JavaVersion};

pub const DEFAULT_PORT: u16 = 8080;

/// Build tool the container image invokes in its builder stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    #[default]
    Gradle,
    Maven,
}

impl BuildTool {
    pub fn build_command(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "./gradlew bootJar -x test",
            BuildTool::Maven => "./mvnw package -DskipTests",
        }
    }

    /// Where the packaged jar lands, relative to the project root
    pub fn artifact_glob(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "build/libs/*.jar",
            BuildTool::Maven => "target/*.jar",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTool::Gradle => write!(f, "gradle"),
            BuildTool::Maven => write!(f, "maven"),
        }
    }
}

impl FromStr for BuildTool {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gradle" => Ok(BuildTool::Gradle),
            "maven" | "mvn" => Ok(BuildTool::Maven),
            _ => Err(GenerationError::unsupported_option("build_tool", s)),
        }
    }
}

/// Everything needed to render a `Dockerfile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerDescriptor {
    pub java_version: i64,
    #[serde(default)]
    pub build_tool: BuildTool,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl DockerDescriptor {
    pub fn new(java_version: i64) -> Self {
        Self {
            java_version,
            build_tool: BuildTool::default(),
            port: DEFAULT_PORT,
        }
    }

    pub fn with_build_tool(mut self, build_tool: BuildTool) -> Self {
        self.build_tool = build_tool;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn validate(&self) -> Result<JavaVersion, GenerationError> {
        let java_version = JavaVersion::try_from(self.java_version)?;
        if self.port == 0 {
            return Err(GenerationError::unsupported_option("port", self.port));
        }
        Ok(java_version)
    }
}
