//! Manifest parsing shared by all template sources

use std::path::{Component, Path};

use crate::infrastructure::templates::{TemplateError, TemplateManifest};

/// Parse a `manifest.yml` belonging to the template directory `template_path`
pub fn parse_manifest_yaml(
    content: &str,
    template_path: &str,
) -> Result<TemplateManifest, TemplateError> {
    let mut manifest: TemplateManifest = serde_yaml::from_str(content).map_err(|e| {
        TemplateError::invalid_manifest(format!("{template_path}/manifest.yml: {e}"))
    })?;

    if manifest.files.is_empty() {
        return Err(TemplateError::invalid_manifest(format!(
            "{template_path}/manifest.yml lists no files"
        )));
    }

    for file in &manifest.files {
        if !is_contained(&file.destination) {
            return Err(TemplateError::invalid_manifest(format!(
                "{template_path}/manifest.yml: destination '{}' must be a relative path inside the project",
                file.destination
            )));
        }
    }

    manifest.path = template_path.to_string();
    Ok(manifest)
}

/// Destinations are joined onto the output directory and must stay below it
fn is_contained(destination: &str) -> bool {
    !destination.is_empty()
        && Path::new(destination)
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest_yaml() {
        let manifest = parse_manifest_yaml(
            r#"
name: gradle-kotlin
description: Gradle build
files:
  - source: build.gradle.kts.tera
    destination: build.gradle.kts
"#,
            "gradle/kotlin",
        )
        .unwrap();

        assert_eq!(manifest.name, "gradle-kotlin");
        assert_eq!(manifest.version, "0.1.0");
        assert_eq!(manifest.path, "gradle/kotlin");
        assert_eq!(
            manifest.destination_for("build.gradle.kts.tera"),
            Some("build.gradle.kts")
        );
        assert_eq!(manifest.destination_for("missing.tera"), None);
    }

    #[test]
    fn test_parse_manifest_without_files() {
        let error = parse_manifest_yaml("name: empty\nfiles: []\n", "empty/template").unwrap_err();
        assert!(matches!(error, TemplateError::InvalidManifest(_)));
    }

    #[test]
    fn test_parse_manifest_rejects_escaping_destinations() {
        for destination in ["../../escaped.kts", "nested/../../up.kts", "/tmp/absolute.kts", ""] {
            let content = format!(
                "name: custom\nfiles:\n  - source: build.gradle.kts.tera\n    destination: \"{destination}\"\n"
            );
            let error = parse_manifest_yaml(&content, "gradle/kotlin").unwrap_err();
            assert!(
                matches!(error, TemplateError::InvalidManifest(_)),
                "accepted {destination:?}"
            );
        }
    }

    #[test]
    fn test_parse_manifest_accepts_nested_destination() {
        let manifest = parse_manifest_yaml(
            "name: custom\nfiles:\n  - source: Dockerfile.tera\n    destination: ./docker/Dockerfile\n",
            "docker/java",
        )
        .unwrap();
        assert_eq!(
            manifest.destination_for("Dockerfile.tera"),
            Some("./docker/Dockerfile")
        );
    }

    #[test]
    fn test_parse_manifest_invalid_yaml() {
        let error = parse_manifest_yaml("name: [unclosed", "broken").unwrap_err();
        assert!(error.to_string().contains("broken/manifest.yml"));
    }
}
