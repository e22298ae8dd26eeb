//! Core template types for the infrastructure layer
//!
//! These types are storage-agnostic and shared by the embedded and
//! filesystem repositories.

use serde::{Deserialize, Serialize};

/// File name of the manifest inside every template directory
pub const MANIFEST_FILE: &str = "manifest.yml";

/// Parsed `manifest.yml` of one template directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    pub files: Vec<ManifestFile>,
    /// Template directory relative to the template root, e.g. `gradle/kotlin`
    #[serde(skip)]
    pub path: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Maps a template source file to its generated destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    pub source: String,
    pub destination: String,
}

impl TemplateManifest {
    /// Destination for `source`, if the manifest lists it
    pub fn destination_for(&self, source: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.source == source)
            .map(|file| file.destination.as_str())
    }
}

/// A template file as stored, before any rendering
#[derive(Debug, Clone)]
pub struct RawTemplateFile {
    /// Path relative to the template directory
    pub relative_path: String,
    pub contents: Vec<u8>,
}
