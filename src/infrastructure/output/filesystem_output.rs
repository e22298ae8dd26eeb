//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

/// Map an IO failure on `path` into an output error naming the failed step
fn io_failure(step: &'static str, path: &Path) -> impl FnOnce(io::Error) -> ApplicationError {
    let path = path.display().to_string();
    move |e| ApplicationError::OutputError(format!("Failed to {step} {path}: {e}"))
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
        for artifact in artifacts {
            if let Some(parent) = artifact.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                self.ensure_directory(parent).await?;
            }

            fs::write(&artifact.path, &artifact.content)
                .await
                .map_err(io_failure("write", &artifact.path))?;

            debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote artifact");
        }

        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::create_dir_all(path)
            .await
            .map_err(io_failure("create directory", path))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
