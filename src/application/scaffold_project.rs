//! Use case for scaffolding a project's build files

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{ApplicationError, OutputService, ScaffoldRequest, ScaffoldResponse};
use crate::generation::BuildGenerator;

/// Renders every artifact of a project and writes them under its output directory
pub struct ScaffoldProjectUseCase {
    generator: BuildGenerator,
    output_service: Arc<dyn OutputService>,
}

impl ScaffoldProjectUseCase {
    pub fn new(generator: BuildGenerator, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            generator,
            output_service,
        }
    }

    pub async fn execute(
        &self,
        request: ScaffoldRequest,
    ) -> Result<ScaffoldResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        // 2. Render everything before touching the filesystem
        let mut artifacts = vec![
            self.generator.build_script(&request.build)?,
            self.generator.settings(&request.project_name)?,
        ];
        if let Some(docker) = &request.docker {
            artifacts.push(self.generator.dockerfile(&docker.descriptor_for(&request.build))?);
        }

        // 3. Place artifacts under the output directory
        for artifact in &mut artifacts {
            artifact.path = request.output_dir.join(&artifact.path);
        }

        // 4. Refuse to clobber existing files unless forced
        if !request.force {
            for artifact in &artifacts {
                if self.output_service.exists(&artifact.path).await {
                    return Err(ApplicationError::OutputExists(artifact.path.clone()));
                }
            }
        }

        // 5. Write
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;
        self.output_service.write_artifacts(&artifacts).await?;

        let files: Vec<_> = artifacts.into_iter().map(|artifact| artifact.path).collect();
        debug!(files = ?files, "Scaffold artifacts written");
        info!(
            project = %request.project_name,
            output_path = %request.output_dir.display(),
            count = files.len(),
            "Scaffolded project"
        );

        Ok(ScaffoldResponse {
            output_path: request.output_dir,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{DockerOptions, ValidationError};
    use crate::generation::{
        Artifact, BuildDescriptor, Dependency, GenerationError, TemplateRenderer,
    };
    use crate::infrastructure::TeraTemplateRenderer;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Keeps written artifacts in memory
    #[derive(Default)]
    struct MemoryOutputService {
        existing: HashSet<PathBuf>,
        written: Mutex<Vec<Artifact>>,
    }

    #[async_trait]
    impl OutputService for MemoryOutputService {
        async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
            self.written.lock().unwrap().extend_from_slice(artifacts);
            Ok(())
        }

        async fn ensure_directory(&self, _path: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn exists(&self, path: &Path) -> bool {
            self.existing.contains(path)
        }
    }

    fn generator() -> BuildGenerator {
        let renderer: Arc<dyn TemplateRenderer> = Arc::new(TeraTemplateRenderer::embedded());
        BuildGenerator::new(renderer)
    }

    fn request() -> ScaffoldRequest {
        ScaffoldRequest {
            project_name: "demo".to_string(),
            output_dir: PathBuf::from("/work/demo"),
            build: BuildDescriptor::new(21)
                .with_framework_version("3.2.0")
                .with_dependency(Dependency::compile("web"))
                .with_dependency(Dependency::test("test")),
            docker: None,
            force: false,
        }
    }

    #[tokio::test]
    async fn test_scaffold_writes_gradle_files() {
        let output = Arc::new(MemoryOutputService::default());
        let use_case = ScaffoldProjectUseCase::new(generator(), output.clone());

        let response = use_case.execute(request()).await.unwrap();

        assert_eq!(
            response.files,
            vec![
                PathBuf::from("/work/demo/build.gradle.kts"),
                PathBuf::from("/work/demo/settings.gradle.kts"),
            ]
        );
        let written = output.written.lock().unwrap();
        assert!(written[0].content.contains("JavaVersion.VERSION_21"));
        assert!(written[1].content.contains(r#"rootProject.name = "demo""#));
    }

    #[tokio::test]
    async fn test_scaffold_with_docker() {
        let output = Arc::new(MemoryOutputService::default());
        let use_case = ScaffoldProjectUseCase::new(generator(), output.clone());

        let mut request = request();
        request.docker = Some(DockerOptions::default());
        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.files.len(), 3);
        let written = output.written.lock().unwrap();
        assert_eq!(written[2].path, PathBuf::from("/work/demo/Dockerfile"));
        assert!(written[2].content.contains("RUN ./gradlew bootJar -x test"));
    }

    #[tokio::test]
    async fn test_scaffold_refuses_to_overwrite() {
        let output = Arc::new(MemoryOutputService {
            existing: HashSet::from([PathBuf::from("/work/demo/settings.gradle.kts")]),
            ..Default::default()
        });
        let use_case = ScaffoldProjectUseCase::new(generator(), output.clone());

        let error = use_case.execute(request()).await.unwrap_err();

        assert!(matches!(error, ApplicationError::OutputExists(_)));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scaffold_force_overwrites() {
        let output = Arc::new(MemoryOutputService {
            existing: HashSet::from([PathBuf::from("/work/demo/build.gradle.kts")]),
            ..Default::default()
        });
        let use_case = ScaffoldProjectUseCase::new(generator(), output.clone());

        let mut request = request();
        request.force = true;

        assert!(use_case.execute(request).await.is_ok());
        assert_eq!(output.written.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_scaffold_unsupported_version_writes_nothing() {
        let output = Arc::new(MemoryOutputService::default());
        let use_case = ScaffoldProjectUseCase::new(generator(), output.clone());

        let mut request = request();
        request.build.language_version = 0;

        let error = use_case.execute(request).await.unwrap_err();
        assert!(matches!(
            error,
            ApplicationError::GenerationError(GenerationError::UnsupportedVersion { .. })
        ));
        assert!(output.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scaffold_rejects_invalid_project_name() {
        let output = Arc::new(MemoryOutputService::default());
        let use_case = ScaffoldProjectUseCase::new(generator(), output);

        let mut request = request();
        request.project_name = "bad name".to_string();

        assert!(matches!(
            use_case.execute(request).await.unwrap_err(),
            ApplicationError::ValidationError(ValidationError::InvalidProjectName(_))
        ));
    }
}
