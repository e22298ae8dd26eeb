//! Template management use cases

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;
use crate::infrastructure::{TemplateError, TemplateRepository};

/// Use case for listing all available templates
pub struct ListTemplatesUseCase<R: TemplateRepository> {
    repository: R,
}

impl<R: TemplateRepository> ListTemplatesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> String {
        let mut output = String::from("Available embedded templates:\n");

        for manifest in self.repository.list_manifests() {
            output.push_str(&format!("\n  {} ({})\n", manifest.path, manifest.name));
            if let Some(desc) = &manifest.description {
                output.push_str(&format!("    {desc}\n"));
            }
            for file in &manifest.files {
                output.push_str(&format!("    - {} -> {}\n", file.source, file.destination));
            }
        }

        output
    }
}

/// Use case for exporting templates so they can be customised and passed
/// back through `--template-dir`
pub struct ExportTemplatesUseCase<R: TemplateRepository> {
    repository: R,
    output_service: Arc<dyn OutputService>,
}

impl<R: TemplateRepository> ExportTemplatesUseCase<R> {
    pub fn new(repository: R, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            repository,
            output_service,
        }
    }

    /// Export every template under `output_dir`, returning how many were exported
    pub async fn execute(&self, output_dir: &Path) -> Result<usize, ApplicationError> {
        let manifests = self.repository.list_manifests();
        let mut artifacts = Vec::new();

        for manifest in &manifests {
            for file in self.repository.get_template_files(&manifest.path) {
                let path = output_dir.join(&manifest.path).join(&file.relative_path);
                let content = String::from_utf8(file.contents)
                    .map_err(|_| TemplateError::InvalidEncoding(path.display().to_string()))?;
                artifacts.push(Artifact { path, content });
            }
        }

        self.output_service.ensure_directory(output_dir).await?;
        self.output_service.write_artifacts(&artifacts).await?;

        info!(
            output_dir = %output_dir.display(),
            templates = manifests.len(),
            files = artifacts.len(),
            "Exported templates"
        );
        Ok(manifests.len())
    }
}
