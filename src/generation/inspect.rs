//! Reads a rendered `build.gradle.kts` back into a [`BuildDescriptor`]
//!
//! Only the constructs the renderer emits are recognised. Anything else in
//! the script is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::{
    BuildDescriptor, Dependency, DependencyScope, GenerationError, JavaVersion, Repository,
    TestPlatform, rules,
};

static SOURCE_COMPATIBILITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"sourceCompatibility\s*=\s*JavaVersion\.(VERSION_[0-9_]+)")
        .expect("valid compatibility regex")
});

static SPRING_BOOT_PLUGIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"id\("org\.springframework\.boot"\)\s+version\s+"([^"]+)""#)
        .expect("valid plugin regex")
});

static DEPENDENCY_MANAGEMENT_PLUGIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"id\("io\.spring\.dependency-management"\)\s+version\s+"([^"]+)""#)
        .expect("valid plugin regex")
});

static REPOSITORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(mavenCentral|gradlePluginPortal|google)\(\)\s*$")
        .expect("valid repository regex")
});

static DEPENDENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*(implementation|testImplementation)\("([^"]+)"\)\s*$"#)
        .expect("valid dependency regex")
});

static TEST_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(useJUnitPlatform|useJUnit|useTestNG)\(\)").expect("valid directive regex")
});

/// Parse a build script in the format produced by the renderer
pub fn parse_build_script(script: &str) -> Result<BuildDescriptor, GenerationError> {
    let constant = SOURCE_COMPATIBILITY
        .captures(script)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| GenerationError::Parse("missing sourceCompatibility".to_string()))?;
    let java_version = JavaVersion::from_gradle_constant(&constant)
        .ok_or_else(|| GenerationError::unsupported_version("language_version", &constant))?;

    let mut descriptor = BuildDescriptor::new(i64::from(java_version.release()));

    descriptor.framework_version = SPRING_BOOT_PLUGIN
        .captures(script)
        .map(|caps| caps[1].to_string());
    descriptor.dependency_management_version = DEPENDENCY_MANAGEMENT_PLUGIN
        .captures(script)
        .map(|caps| caps[1].to_string());

    descriptor.repositories = REPOSITORY
        .captures_iter(script)
        .filter_map(|caps| Repository::from_function(&caps[1]))
        .collect();

    descriptor.dependencies = DEPENDENCY
        .captures_iter(script)
        .filter_map(|caps| {
            let scope = DependencyScope::from_configuration(&caps[1])?;
            Some(Dependency::new(rules::shorten_coordinate(&caps[2]), scope))
        })
        .collect();

    let directive = TEST_DIRECTIVE
        .captures(script)
        .map(|caps| format!("{}()", &caps[1]))
        .ok_or_else(|| GenerationError::Parse("missing test platform directive".to_string()))?;
    descriptor.test_platform = TestPlatform::from_directive(&directive)
        .ok_or_else(|| GenerationError::unsupported_option("test_platform", &directive))?;

    Ok(descriptor)
}
