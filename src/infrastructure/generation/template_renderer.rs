//! Tera-based template renderer implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tera::Tera;
use tracing::debug;

use crate::generation::{Artifact, GenerationError, RenderContext, TemplateKind, TemplateRenderer};
use crate::infrastructure::templates::{
    EmbeddedTemplateRepository, FileSystemTemplateRepository, TemplateError, TemplateRepository,
};

/// Renders templates with Tera, looking them up in an ordered list of
/// repositories. The first repository holding the requested file wins.
pub struct TeraTemplateRenderer {
    repositories: Vec<Arc<dyn TemplateRepository>>,
}

impl TeraTemplateRenderer {
    pub fn new(repositories: Vec<Arc<dyn TemplateRepository>>) -> Self {
        Self { repositories }
    }

    /// Renderer backed only by the templates compiled into the binary
    pub fn embedded() -> Self {
        Self::new(vec![Arc::new(EmbeddedTemplateRepository::new())])
    }

    /// Renderer preferring files under `template_dir`, falling back to the
    /// embedded templates for anything the directory doesn't provide
    pub fn with_template_dir(template_dir: &Path) -> Result<Self, TemplateError> {
        let overlay = FileSystemTemplateRepository::new(template_dir)?;
        Ok(Self::new(vec![
            Arc::new(overlay),
            Arc::new(EmbeddedTemplateRepository::new()),
        ]))
    }

    /// Locate the template source and its destination path
    fn resolve(&self, kind: TemplateKind) -> Result<(String, PathBuf), GenerationError> {
        for repository in &self.repositories {
            let Some(source) = repository.get_file(kind.template_path(), kind.source())? else {
                continue;
            };

            let destination = repository
                .get_manifest(kind.template_path())?
                .and_then(|manifest| manifest.destination_for(kind.source()).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(kind.default_destination()));

            return Ok((source, destination));
        }

        Err(TemplateError::not_found(kind.to_string()).into())
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::embedded()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(
        &self,
        kind: TemplateKind,
        context: &RenderContext,
    ) -> Result<Artifact, GenerationError> {
        let (source, destination) = self.resolve(kind)?;
        let template_name = kind.to_string();

        let mut tera = Tera::default();
        // Build files are not markup; quotes must survive verbatim
        tera.autoescape_on(vec![]);
        tera.add_raw_template(&template_name, &source)
            .map_err(|e| GenerationError::Render(format!("Failed to add template: {e}")))?;

        let content = tera
            .render(&template_name, &context.to_tera_context())
            .map_err(|e| {
                GenerationError::Render(format!(
                    "Failed to render template '{template_name}': {e}"
                ))
            })?;

        debug!(template = %template_name, destination = %destination.display(), "Rendered template");

        Ok(Artifact {
            path: destination,
            content,
        })
    }
}
