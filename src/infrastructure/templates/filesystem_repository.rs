//! Filesystem-based template repository
//!
//! Reads templates from a directory laid out like the embedded tree
//! (`<root>/gradle/kotlin/...`), typically one produced by
//! `gradlegen templates export` and passed back through `--template-dir`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{
    MANIFEST_FILE, RawTemplateFile, TemplateError, TemplateManifest, TemplateRepository,
    parse_manifest_yaml,
};

/// Template repository rooted at a directory on disk
pub struct FileSystemTemplateRepository {
    root: PathBuf,
}

impl FileSystemTemplateRepository {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, TemplateError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TemplateError::not_found(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_optional(path: &Path) -> Result<Option<String>, TemplateError> {
        match fs::read(path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| TemplateError::InvalidEncoding(path.display().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TemplateError::IoError(e)),
        }
    }

    fn subdirectories(dir: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect()
    }
}

impl TemplateRepository for FileSystemTemplateRepository {
    fn list_manifests(&self) -> Vec<TemplateManifest> {
        let mut manifests = Vec::new();

        for family in Self::subdirectories(&self.root) {
            for variant in Self::subdirectories(&self.root.join(&family)) {
                let template_path = format!("{family}/{variant}");
                match self.get_manifest(&template_path) {
                    Ok(Some(manifest)) => manifests.push(manifest),
                    Ok(None) => {}
                    Err(e) => debug!(path = %template_path, error = %e, "Skipping template"),
                }
            }
        }

        manifests.sort_by(|a, b| a.path.cmp(&b.path));
        manifests
    }

    fn get_manifest(&self, template_path: &str) -> Result<Option<TemplateManifest>, TemplateError> {
        match self.get_file(template_path, MANIFEST_FILE)? {
            Some(content) => parse_manifest_yaml(&content, template_path).map(Some),
            None => Ok(None),
        }
    }

    fn get_file(&self, template_path: &str, file: &str) -> Result<Option<String>, TemplateError> {
        let path = self.root.join(template_path).join(file);
        let content = Self::read_optional(&path)?;
        if content.is_some() {
            debug!(path = %path.display(), "Loaded template file from disk");
        }
        Ok(content)
    }

    fn get_template_files(&self, template_path: &str) -> Vec<RawTemplateFile> {
        let Ok(entries) = fs::read_dir(self.root.join(template_path)) else {
            return Vec::new();
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.file_name().to_str()?.to_string();
                let contents = fs::read(entry.path()).ok()?;
                Some(RawTemplateFile {
                    relative_path,
                    contents,
                })
            })
            .collect()
    }
}
