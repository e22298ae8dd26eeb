//! Build generator - turns descriptors into rendered artifacts

use std::sync::Arc;

use crate::generation::{
    Artifact, BuildDescriptor, DockerDescriptor, GenerationError, RenderContext, TemplateKind,
    TemplateRenderer,
};

/// Renders build scripts, settings files and Dockerfiles through a
/// [`TemplateRenderer`]. Stateless; every call is independent.
#[derive(Clone)]
pub struct BuildGenerator {
    renderer: Arc<dyn TemplateRenderer>,
}

impl BuildGenerator {
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Render `build.gradle.kts` text for `descriptor`
    pub fn render_build_script(&self, descriptor: &BuildDescriptor) -> Result<String, GenerationError> {
        Ok(self.build_script(descriptor)?.content)
    }

    pub fn render_dockerfile(&self, descriptor: &DockerDescriptor) -> Result<String, GenerationError> {
        Ok(self.dockerfile(descriptor)?.content)
    }

    pub fn build_script(&self, descriptor: &BuildDescriptor) -> Result<Artifact, GenerationError> {
        let context = RenderContext::for_build(descriptor)?;
        tracing::debug!(
            java_version = descriptor.language_version,
            dependencies = descriptor.dependencies.len(),
            "Rendering build script"
        );
        self.renderer.render(TemplateKind::BuildScript, &context)
    }

    pub fn settings(&self, project_name: &str) -> Result<Artifact, GenerationError> {
        let context = RenderContext::for_settings(project_name)?;
        self.renderer.render(TemplateKind::Settings, &context)
    }

    pub fn dockerfile(&self, descriptor: &DockerDescriptor) -> Result<Artifact, GenerationError> {
        let context = RenderContext::for_docker(descriptor)?;
        tracing::debug!(
            java_version = descriptor.java_version,
            build_tool = %descriptor.build_tool,
            "Rendering Dockerfile"
        );
        self.renderer.render(TemplateKind::Dockerfile, &context)
    }
}
