//! Build descriptor model
//!
//! A [`BuildDescriptor`] is the caller-facing record a build script is
//! rendered from. Enumerated options are validated when the descriptor is
//! rendered, not when it is constructed, so a descriptor loaded from a
//! configuration file can carry an unsupported value until that point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::generation::{GenerationError, rules};

/// Java feature releases the renderer knows a compatibility constant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JavaVersion {
    Java8,
    Java11,
    Java17,
    Java21,
    Java25,
}

impl JavaVersion {
    /// Every supported release, oldest first
    pub const SUPPORTED: [JavaVersion; 5] = [
        JavaVersion::Java8,
        JavaVersion::Java11,
        JavaVersion::Java17,
        JavaVersion::Java21,
        JavaVersion::Java25,
    ];

    /// Feature release number (8, 11, 17, ...)
    pub fn release(&self) -> u32 {
        match self {
            JavaVersion::Java8 => 8,
            JavaVersion::Java11 => 11,
            JavaVersion::Java17 => 17,
            JavaVersion::Java21 => 21,
            JavaVersion::Java25 => 25,
        }
    }

    /// Name of the matching `org.gradle.api.JavaVersion` constant
    pub fn gradle_constant(&self) -> &'static str {
        match self {
            JavaVersion::Java8 => "VERSION_1_8",
            JavaVersion::Java11 => "VERSION_11",
            JavaVersion::Java17 => "VERSION_17",
            JavaVersion::Java21 => "VERSION_21",
            JavaVersion::Java25 => "VERSION_25",
        }
    }

    pub fn from_gradle_constant(constant: &str) -> Option<Self> {
        Self::SUPPORTED
            .into_iter()
            .find(|version| version.gradle_constant() == constant)
    }
}

impl TryFrom<i64> for JavaVersion {
    type Error = GenerationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::SUPPORTED
            .into_iter()
            .find(|version| i64::from(version.release()) == value)
            .ok_or_else(|| GenerationError::unsupported_version("language_version", value))
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release())
    }
}

/// When a dependency is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Compile,
    Test,
}

impl DependencyScope {
    /// Gradle configuration the dependency is declared in
    pub fn configuration(&self) -> &'static str {
        match self {
            DependencyScope::Compile => "implementation",
            DependencyScope::Test => "testImplementation",
        }
    }

    pub fn from_configuration(configuration: &str) -> Option<Self> {
        match configuration {
            "implementation" => Some(DependencyScope::Compile),
            "testImplementation" => Some(DependencyScope::Test),
            _ => None,
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyScope::Compile => write!(f, "compile"),
            DependencyScope::Test => write!(f, "test"),
        }
    }
}

impl FromStr for DependencyScope {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compile" | "implementation" => Ok(DependencyScope::Compile),
            "test" | "testimplementation" => Ok(DependencyScope::Test),
            _ => Err(GenerationError::unsupported_option("dependency scope", s)),
        }
    }
}

/// A single dependency declaration
///
/// `coordinate` is either a Spring Boot starter shorthand (`web`) or a full
/// `group:artifact[:version]` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub coordinate: String,
    pub scope: DependencyScope,
}

impl Dependency {
    pub fn new(coordinate: impl Into<String>, scope: DependencyScope) -> Self {
        Self {
            coordinate: coordinate.into(),
            scope,
        }
    }

    pub fn compile(coordinate: impl Into<String>) -> Self {
        Self::new(coordinate, DependencyScope::Compile)
    }

    pub fn test(coordinate: impl Into<String>) -> Self {
        Self::new(coordinate, DependencyScope::Test)
    }

    /// Full coordinate as written into the build script
    pub fn resolved_coordinate(&self) -> Result<String, GenerationError> {
        rules::resolve_coordinate(&self.coordinate)
    }
}

/// Test runner selected in the `tasks.test` block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestPlatform {
    #[default]
    JUnit,
    JUnit4,
    TestNg,
}

impl TestPlatform {
    pub fn directive(&self) -> &'static str {
        match self {
            TestPlatform::JUnit => "useJUnitPlatform()",
            TestPlatform::JUnit4 => "useJUnit()",
            TestPlatform::TestNg => "useTestNG()",
        }
    }

    pub fn from_directive(directive: &str) -> Option<Self> {
        [TestPlatform::JUnit, TestPlatform::JUnit4, TestPlatform::TestNg]
            .into_iter()
            .find(|platform| platform.directive() == directive)
    }
}

impl fmt::Display for TestPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestPlatform::JUnit => write!(f, "junit"),
            TestPlatform::JUnit4 => write!(f, "junit4"),
            TestPlatform::TestNg => write!(f, "testng"),
        }
    }
}

impl FromStr for TestPlatform {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "junit" | "junit5" | "junit-platform" => Ok(TestPlatform::JUnit),
            "junit4" => Ok(TestPlatform::JUnit4),
            "testng" => Ok(TestPlatform::TestNg),
            _ => Err(GenerationError::unsupported_option("test_platform", s)),
        }
    }
}

/// Artifact repository declared in the `repositories` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Repository {
    MavenCentral,
    GradlePluginPortal,
    Google,
}

impl Repository {
    /// Kotlin DSL function name, without the call parentheses
    pub fn function(&self) -> &'static str {
        match self {
            Repository::MavenCentral => "mavenCentral",
            Repository::GradlePluginPortal => "gradlePluginPortal",
            Repository::Google => "google",
        }
    }

    pub fn from_function(function: &str) -> Option<Self> {
        [
            Repository::MavenCentral,
            Repository::GradlePluginPortal,
            Repository::Google,
        ]
        .into_iter()
        .find(|repository| repository.function() == function)
    }
}

impl FromStr for Repository {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maven-central" | "mavencentral" => Ok(Repository::MavenCentral),
            "gradle-plugin-portal" | "gradlepluginportal" => Ok(Repository::GradlePluginPortal),
            "google" => Ok(Repository::Google),
            _ => Err(GenerationError::unsupported_option("repository", s)),
        }
    }
}

/// Everything needed to render a `build.gradle.kts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub language_version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_management_version: Option<String>,
    #[serde(default)]
    pub test_platform: TestPlatform,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl BuildDescriptor {
    pub fn new(language_version: i64) -> Self {
        Self {
            language_version,
            framework_version: None,
            dependency_management_version: None,
            test_platform: TestPlatform::default(),
            repositories: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_framework_version(mut self, version: impl Into<String>) -> Self {
        self.framework_version = Some(version.into());
        self
    }

    pub fn with_dependency_management_version(mut self, version: impl Into<String>) -> Self {
        self.dependency_management_version = Some(version.into());
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn with_test_platform(mut self, platform: TestPlatform) -> Self {
        self.test_platform = platform;
        self
    }

    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repositories.push(repository);
        self
    }

    /// Check every option and the cross-field invariant.
    ///
    /// Returns the resolved Java version so callers don't have to map it twice.
    pub fn validate(&self) -> Result<JavaVersion, GenerationError> {
        let java_version = JavaVersion::try_from(self.language_version)?;

        if let Some(version) = &self.framework_version {
            rules::validate_release_version("framework_version", version)?;
        }
        if let Some(version) = &self.dependency_management_version {
            rules::validate_release_version("dependency_management_version", version)?;
        }

        if !self.dependencies.is_empty() && self.framework_version.is_none() {
            return Err(GenerationError::InvalidDescriptor(
                "dependencies require a framework_version".to_string(),
            ));
        }

        for dependency in &self.dependencies {
            dependency.resolved_coordinate()?;
        }

        Ok(java_version)
    }
}
