//! Render contexts built from descriptors

use serde_json::{Value as JsonValue, json};
use std::collections::HashMap;

use crate::generation::{BuildDescriptor, DockerDescriptor, GenerationError, rules};

/// Variables handed to a template
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub variables: HashMap<String, JsonValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a build descriptor and flatten it into template variables
    pub fn for_build(descriptor: &BuildDescriptor) -> Result<Self, GenerationError> {
        let java_version = descriptor.validate()?;

        let dependencies = descriptor
            .dependencies
            .iter()
            .map(|dependency| -> Result<JsonValue, GenerationError> {
                let coordinate = dependency.resolved_coordinate()?;
                Ok(json!({
                    "configuration": dependency.scope.configuration(),
                    "coordinate": coordinate,
                }))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let repositories: Vec<&str> = descriptor
            .repositories
            .iter()
            .map(|repository| repository.function())
            .collect();

        let mut context = Self::new();
        context.add_variable("java_version_constant", json!(java_version.gradle_constant()));
        context.add_variable("framework_version", json!(descriptor.framework_version));
        context.add_variable(
            "dependency_management_version",
            json!(descriptor.dependency_management_version),
        );
        context.add_variable("repositories", json!(repositories));
        context.add_variable("dependencies", JsonValue::Array(dependencies));
        context.add_variable("test_directive", json!(descriptor.test_platform.directive()));
        Ok(context)
    }

    pub fn for_settings(project_name: &str) -> Result<Self, GenerationError> {
        rules::validate_project_name(project_name)?;

        let mut context = Self::new();
        context.add_variable("project_name", json!(project_name));
        Ok(context)
    }

    pub fn for_docker(descriptor: &DockerDescriptor) -> Result<Self, GenerationError> {
        let java_version = descriptor.validate()?;

        let mut context = Self::new();
        context.add_variable("java_version", json!(java_version.release()));
        context.add_variable("build_command", json!(descriptor.build_tool.build_command()));
        context.add_variable("artifact_glob", json!(descriptor.build_tool.artifact_glob()));
        context.add_variable("port", json!(descriptor.port));
        Ok(context)
    }

    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    pub fn has_variable(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key, value);
        }
        context
    }
}
