//! Business rules for the generation domain

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::GenerationError;

/// Group of the Spring Boot starters
pub const SPRING_BOOT_GROUP: &str = "org.springframework.boot";
/// Artifact prefix shared by every Spring Boot starter
pub const STARTER_PREFIX: &str = "spring-boot-starter-";

static RELEASE_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:-(?:M\d+|RC\d+|SNAPSHOT))?$").expect("valid release regex")
});

static STARTER_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid shorthand regex"));

static FULL_COORDINATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+:[A-Za-z0-9_.-]+(?::[A-Za-z0-9_.+-]+)?$")
        .expect("valid coordinate regex")
});

/// Validates a plugin version such as `3.2.0`, `3.3.0-M1` or `3.4.0-SNAPSHOT`
pub fn validate_release_version(option: &'static str, version: &str) -> Result<(), GenerationError> {
    if RELEASE_VERSION.is_match(version) {
        Ok(())
    } else {
        Err(GenerationError::unsupported_version(option, version))
    }
}

/// Expands a starter shorthand into its full coordinate.
///
/// Full `group:artifact[:version]` coordinates are returned unchanged.
pub fn resolve_coordinate(coordinate: &str) -> Result<String, GenerationError> {
    if coordinate.contains(':') {
        if FULL_COORDINATE.is_match(coordinate) {
            return Ok(coordinate.to_string());
        }
    } else if STARTER_SHORTHAND.is_match(coordinate) {
        return Ok(format!("{SPRING_BOOT_GROUP}:{STARTER_PREFIX}{coordinate}"));
    }

    Err(GenerationError::unsupported_option("dependency", coordinate))
}

/// Folds a versionless starter coordinate back into its shorthand
pub fn shorten_coordinate(coordinate: &str) -> String {
    coordinate
        .strip_prefix(SPRING_BOOT_GROUP)
        .and_then(|rest| rest.strip_prefix(':'))
        .and_then(|artifact| artifact.strip_prefix(STARTER_PREFIX))
        .filter(|starter| STARTER_SHORTHAND.is_match(starter))
        .map(str::to_string)
        .unwrap_or_else(|| coordinate.to_string())
}

/// Validates project name format
pub fn validate_project_name(name: &str) -> Result<(), GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::Validation(
            "Project name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(GenerationError::Validation(
            "Project name must contain only alphanumeric characters, dots, dashes, and underscores"
                .to_string(),
        ));
    }

    if name.starts_with(['-', '_', '.']) {
        return Err(GenerationError::Validation(
            "Project name cannot start with a dot, dash or underscore".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_release_version() {
        assert!(validate_release_version("framework_version", "3.2.0").is_ok());
        assert!(validate_release_version("framework_version", "3.3.0-M1").is_ok());
        assert!(validate_release_version("framework_version", "3.3.0-RC2").is_ok());
        assert!(validate_release_version("framework_version", "3.4.0-SNAPSHOT").is_ok());

        assert!(validate_release_version("framework_version", "").is_err());
        assert!(validate_release_version("framework_version", "3.2").is_err());
        assert!(validate_release_version("framework_version", "v3.2.0").is_err());
        assert!(validate_release_version("framework_version", "3.2.0\"").is_err());
    }

    #[test]
    fn test_resolve_coordinate() {
        assert_eq!(
            resolve_coordinate("web").unwrap(),
            "org.springframework.boot:spring-boot-starter-web"
        );
        assert_eq!(
            resolve_coordinate("data-jpa").unwrap(),
            "org.springframework.boot:spring-boot-starter-data-jpa"
        );
        assert_eq!(
            resolve_coordinate("com.h2database:h2:2.2.224").unwrap(),
            "com.h2database:h2:2.2.224"
        );

        assert!(resolve_coordinate("").is_err());
        assert!(resolve_coordinate("Web").is_err());
        assert!(resolve_coordinate("a:b:c:d").is_err());
        assert!(resolve_coordinate("group:\"artifact\"").is_err());
    }

    #[test]
    fn test_shorten_coordinate() {
        assert_eq!(
            shorten_coordinate("org.springframework.boot:spring-boot-starter-test"),
            "test"
        );
        assert_eq!(
            shorten_coordinate("org.springframework.boot:spring-boot-starter-web:3.2.0"),
            "org.springframework.boot:spring-boot-starter-web:3.2.0"
        );
        assert_eq!(shorten_coordinate("com.h2database:h2"), "com.h2database:h2");
    }

    #[test]
    fn test_validate_project_name() {
        assert!(validate_project_name("my-project").is_ok());
        assert!(validate_project_name("my_project").is_ok());
        assert!(validate_project_name("demo.app").is_ok());

        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("-project").is_err());
        assert!(validate_project_name(".project").is_err());
        assert!(validate_project_name("my project").is_err());
        assert!(validate_project_name("my\"project").is_err());
    }
}
