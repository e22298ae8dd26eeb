//! Template repository traits for the infrastructure layer

use crate::infrastructure::templates::{RawTemplateFile, TemplateError, TemplateManifest};

/// Read access to a tree of template directories
pub trait TemplateRepository: Send + Sync {
    /// All template manifests, sorted by path
    fn list_manifests(&self) -> Vec<TemplateManifest>;

    /// Manifest of the template directory at `template_path`
    fn get_manifest(&self, template_path: &str) -> Result<Option<TemplateManifest>, TemplateError>;

    /// Contents of `file` inside the template directory at `template_path`
    fn get_file(&self, template_path: &str, file: &str) -> Result<Option<String>, TemplateError>;

    /// Every file of a template directory, manifest included
    fn get_template_files(&self, template_path: &str) -> Vec<RawTemplateFile>;
}
