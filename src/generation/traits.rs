//! Port interfaces for the generation domain

use crate::generation::{Artifact, GenerationError, RenderContext, TemplateKind};

/// Renders one template file into an artifact
pub trait TemplateRenderer: Send + Sync {
    /// Render `kind` with `context`. The artifact path is relative to the
    /// output directory.
    fn render(
        &self,
        kind: TemplateKind,
        context: &RenderContext,
    ) -> Result<Artifact, GenerationError>;
}
