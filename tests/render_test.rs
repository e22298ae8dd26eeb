//! Rendering scenarios against the embedded templates

use gradlegen::{
    BuildDescriptor, BuildTool, Dependency, DockerDescriptor, GenerationError, JavaVersion,
    Repository, TestPlatform, parse_build_script, render, render_dockerfile,
};
use pretty_assertions::assert_eq;

const REFERENCE_BUILD_SCRIPT: &str = include_str!("fixtures/build.gradle.kts");
const REFERENCE_DOCKERFILE: &str = include_str!("fixtures/Dockerfile");

fn spring_web_descriptor() -> BuildDescriptor {
    BuildDescriptor::new(21)
        .with_framework_version("3.2.0")
        .with_dependency(Dependency::compile("web"))
        .with_dependency(Dependency::test("test"))
        .with_test_platform(TestPlatform::JUnit)
}

#[test]
fn test_reference_descriptor_renders_reference_script() {
    let script = render(&spring_web_descriptor()).unwrap();
    assert_eq!(script.trim_end(), REFERENCE_BUILD_SCRIPT.trim_end());
}

#[test]
fn test_render_is_deterministic() {
    let descriptor = spring_web_descriptor()
        .with_dependency_management_version("1.1.4")
        .with_repository(Repository::MavenCentral)
        .with_dependency(Dependency::compile("com.h2database:h2:2.2.224"));

    let first = render(&descriptor).unwrap();
    let second = render(&descriptor.clone()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_supported_version_declares_its_compatibility() {
    for version in JavaVersion::SUPPORTED {
        let descriptor = BuildDescriptor::new(i64::from(version.release()));
        let script = render(&descriptor).unwrap();
        let expected = format!(
            "sourceCompatibility = JavaVersion.{}",
            version.gradle_constant()
        );
        assert!(script.contains(&expected), "missing {expected} in:\n{script}");
    }
}

#[test]
fn test_unsupported_versions_fail_without_output() {
    for version in [-21, -1, 0, 1, 9, 16, 22, 99] {
        let result = render(&BuildDescriptor::new(version));
        match result {
            Err(GenerationError::UnsupportedVersion { option, value }) => {
                assert_eq!(option, "language_version");
                assert_eq!(value, version.to_string());
            }
            other => panic!("expected UnsupportedVersion for {version}, got {other:?}"),
        }
    }
}

#[test]
fn test_plain_java_project_omits_framework_and_dependencies() {
    let script = render(&BuildDescriptor::new(17).with_test_platform(TestPlatform::TestNg)).unwrap();

    let expected = r#"plugins {
    java
}

java {
    sourceCompatibility = JavaVersion.VERSION_17
}

tasks.test {
    useTestNG()
}"#;
    assert_eq!(script.trim_end(), expected);
}

#[test]
fn test_full_descriptor_layout() {
    let descriptor = BuildDescriptor::new(8)
        .with_framework_version("2.7.18")
        .with_dependency_management_version("1.1.4")
        .with_repository(Repository::MavenCentral)
        .with_repository(Repository::Google)
        .with_dependency(Dependency::compile("data-jpa"))
        .with_dependency(Dependency::compile("com.h2database:h2:2.2.224"))
        .with_dependency(Dependency::test("test"))
        .with_test_platform(TestPlatform::JUnit4);

    let expected = r#"plugins {
    java
    id("org.springframework.boot") version "2.7.18"
    id("io.spring.dependency-management") version "1.1.4"
}

java {
    sourceCompatibility = JavaVersion.VERSION_1_8
}

repositories {
    mavenCentral()
    google()
}

dependencies {
    implementation("org.springframework.boot:spring-boot-starter-data-jpa")
    implementation("com.h2database:h2:2.2.224")
    testImplementation("org.springframework.boot:spring-boot-starter-test")
}

tasks.test {
    useJUnit()
}"#;
    assert_eq!(render(&descriptor).unwrap().trim_end(), expected);
}

#[test]
fn test_dependencies_without_framework_are_rejected() {
    let descriptor = BuildDescriptor::new(21).with_dependency(Dependency::compile("web"));
    assert!(matches!(
        render(&descriptor).unwrap_err(),
        GenerationError::InvalidDescriptor(_)
    ));
}

#[test]
fn test_bad_coordinate_names_the_option() {
    let descriptor = spring_web_descriptor().with_dependency(Dependency::compile("not a coordinate"));
    let error = render(&descriptor).unwrap_err();
    assert_eq!(error.option(), Some("dependency"));
}

#[test]
fn test_parse_recovers_rendered_descriptor() {
    let descriptors = [
        spring_web_descriptor(),
        BuildDescriptor::new(11).with_test_platform(TestPlatform::JUnit4),
        BuildDescriptor::new(25)
            .with_framework_version("3.4.0-SNAPSHOT")
            .with_dependency_management_version("1.1.7")
            .with_repository(Repository::GradlePluginPortal)
            .with_dependency(Dependency::compile("actuator"))
            .with_dependency(Dependency::test("org.testcontainers:junit-jupiter:1.19.3"))
            .with_test_platform(TestPlatform::TestNg),
    ];

    for descriptor in descriptors {
        let script = render(&descriptor).unwrap();
        assert_eq!(parse_build_script(&script).unwrap(), descriptor);
    }
}

#[test]
fn test_maven_dockerfile_matches_reference() {
    let descriptor = DockerDescriptor::new(21).with_build_tool(BuildTool::Maven);
    let dockerfile = render_dockerfile(&descriptor).unwrap();
    assert_eq!(dockerfile.trim_end(), REFERENCE_DOCKERFILE.trim_end());
}

#[test]
fn test_gradle_dockerfile() {
    let descriptor = DockerDescriptor::new(17).with_port(9000);
    let dockerfile = render_dockerfile(&descriptor).unwrap();

    assert!(dockerfile.starts_with("FROM eclipse-temurin:17-jdk AS builder\n"));
    assert!(dockerfile.contains("RUN ./gradlew bootJar -x test\n"));
    assert!(dockerfile.contains("FROM eclipse-temurin:17-jre\n"));
    assert!(dockerfile.contains("COPY --from=builder /app/build/libs/*.jar app.jar\n"));
    assert!(dockerfile.contains("EXPOSE 9000\n"));
}

#[test]
fn test_dockerfile_rejects_unsupported_version() {
    assert!(matches!(
        render_dockerfile(&DockerDescriptor::new(0)).unwrap_err(),
        GenerationError::UnsupportedVersion { .. }
    ));
}
