//! Embedded template repository implementation

use rust_embed::RustEmbed;
use tracing::debug;

use super::{
    MANIFEST_FILE, RawTemplateFile, TemplateError, TemplateManifest, TemplateRepository,
    parse_manifest_yaml,
};

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template repository backed by embedded templates
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRepository for EmbeddedTemplateRepository {
    fn list_manifests(&self) -> Vec<TemplateManifest> {
        let suffix = format!("/{MANIFEST_FILE}");
        let mut manifests = Vec::new();

        for manifest_path in EmbeddedTemplates::iter().filter(|p| p.ends_with(&suffix)) {
            let template_path = &manifest_path[..manifest_path.len() - suffix.len()];
            match self.get_manifest(template_path) {
                Ok(Some(manifest)) => manifests.push(manifest),
                Ok(None) => {}
                Err(e) => debug!(path = %template_path, error = %e, "Skipping embedded template"),
            }
        }

        // Sort by path for consistent ordering
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
        let path = format!("{template_path}/{file}");
        let Some(embedded) = EmbeddedTemplates::get(&path) else {
            return Ok(None);
        };

        debug!(path = %path, "Loaded embedded template file");
        String::from_utf8(embedded.data.into_owned())
            .map(Some)
            .map_err(|_| TemplateError::InvalidEncoding(path))
    }

    fn get_template_files(&self, template_path: &str) -> Vec<RawTemplateFile> {
        let prefix = format!("{template_path}/");

        EmbeddedTemplates::iter()
            .filter(|path| path.starts_with(&prefix))
            .filter_map(|path| {
                EmbeddedTemplates::get(&path).map(|file| RawTemplateFile {
                    relative_path: path[prefix.len()..].to_string(),
                    contents: file.data.into_owned(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{DOCKER_TEMPLATE, GRADLE_TEMPLATE};

    #[test]
    fn test_embedded_manifests_are_listed() {
        let repo = EmbeddedTemplateRepository::new();
        let paths: Vec<String> = repo.list_manifests().into_iter().map(|m| m.path).collect();

        assert_eq!(paths, vec![DOCKER_TEMPLATE.to_string(), GRADLE_TEMPLATE.to_string()]);
    }

    #[test]
    fn test_embedded_gradle_manifest_destinations() {
        let repo = EmbeddedTemplateRepository::new();
        let manifest = repo.get_manifest(GRADLE_TEMPLATE).unwrap().unwrap();

        assert_eq!(
            manifest.destination_for("build.gradle.kts.tera"),
            Some("build.gradle.kts")
        );
        assert_eq!(
            manifest.destination_for("settings.gradle.kts.tera"),
            Some("settings.gradle.kts")
        );
    }

    #[test]
    fn test_embedded_missing_file() {
        let repo = EmbeddedTemplateRepository::new();
        assert!(repo.get_file(GRADLE_TEMPLATE, "pom.xml.tera").unwrap().is_none());
        assert!(repo.get_manifest("maven/xml").unwrap().is_none());
    }

    #[test]
    fn test_embedded_template_files() {
        let repo = EmbeddedTemplateRepository::new();
        let mut files: Vec<String> = repo
            .get_template_files(DOCKER_TEMPLATE)
            .into_iter()
            .map(|f| f.relative_path)
            .collect();
        files.sort();

        assert_eq!(files, vec!["Dockerfile.tera", "manifest.yml"]);
    }
}
