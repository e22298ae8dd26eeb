//! gradlegen CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use gradlegen::application::{
    DockerOptions, ExportTemplatesUseCase, ListTemplatesUseCase, ScaffoldProjectUseCase,
    ScaffoldRequest,
};
use gradlegen::config::{ConfigFormat, ProjectConfig};
use gradlegen::generation::{
    BuildDescriptor, BuildGenerator, Dependency, DependencyScope, Repository, TestPlatform,
};
use gradlegen::infrastructure::{
    EmbeddedTemplateRepository, FileSystemOutputService, TeraTemplateRenderer,
};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Java release used when neither a flag nor a config file names one
const DEFAULT_JAVA_VERSION: i64 = 21;
const DEFAULT_PROJECT_NAME: &str = "app";

#[derive(Parser)]
#[command(name = "gradlegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write build.gradle.kts, settings.gradle.kts and optionally a Dockerfile
    Scaffold {
        #[command(flatten)]
        descriptor: DescriptorArgs,
        #[command(flatten)]
        docker_args: DockerArgs,
        /// Root project name written to settings.gradle.kts
        #[arg(long)]
        project_name: Option<String>,
        /// Output directory for generated files
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Also generate a Dockerfile
        #[arg(long)]
        docker: bool,
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },
    /// Print a rendered build file to stdout
    Render {
        #[command(flatten)]
        descriptor: DescriptorArgs,
        #[command(flatten)]
        docker_args: DockerArgs,
        /// Render the Dockerfile instead of build.gradle.kts
        #[arg(long)]
        dockerfile: bool,
    },
    /// Read a generated build.gradle.kts back into a descriptor
    Inspect {
        /// Path to the build script
        path: PathBuf,
        /// Output format: json, yaml or toml
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Manage the embedded templates
    Templates {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum TemplateCommands {
    /// List embedded templates
    List,
    /// Export embedded templates for customisation with --template-dir
    Export {
        /// Directory to export into
        path: PathBuf,
    },
}

/// Options describing the build script
#[derive(clap::Args, Debug, Default)]
pub struct DescriptorArgs {
    /// Project configuration file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Java release for sourceCompatibility (8, 11, 17, 21, 25)
    #[arg(long, allow_negative_numbers = true)]
    java_version: Option<i64>,
    /// Spring Boot plugin version
    #[arg(long)]
    spring_boot_version: Option<String>,
    /// io.spring.dependency-management plugin version
    #[arg(long)]
    dependency_management_version: Option<String>,
    /// Compile dependency: starter shorthand (web) or group:artifact[:version]
    #[arg(long = "dependency")]
    dependencies: Vec<String>,
    /// Test dependency: starter shorthand (test) or group:artifact[:version]
    #[arg(long = "test-dependency")]
    test_dependencies: Vec<String>,
    /// Test platform: junit, junit4 or testng
    #[arg(long)]
    test_platform: Option<String>,
    /// Repository: maven-central, gradle-plugin-portal or google
    #[arg(long = "repository")]
    repositories: Vec<String>,
    /// Custom template directory, overriding embedded templates
    #[arg(long)]
    template_dir: Option<PathBuf>,
}

/// Options tuning the Dockerfile; they never enable it on their own
#[derive(clap::Args, Debug, Default)]
pub struct DockerArgs {
    /// Build tool invoked in the builder stage: gradle or maven
    #[arg(long)]
    build_tool: Option<String>,
    /// Port exposed by the container
    #[arg(long)]
    port: Option<u16>,
    /// Java release of the container images (defaults to --java-version)
    #[arg(long, allow_negative_numbers = true)]
    docker_java_version: Option<i64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so rendered output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Scaffold {
            descriptor,
            docker_args,
            project_name,
            output_dir,
            docker,
            force,
        } => {
            scaffold(ScaffoldParams {
                descriptor,
                docker_args,
                project_name,
                output_dir,
                docker,
                force,
            })
            .await
        }
        Commands::Render {
            descriptor,
            docker_args,
            dockerfile,
        } => render(descriptor, docker_args, dockerfile),
        Commands::Inspect { path, format } => inspect(&path, &format).await,
        Commands::Templates { action } => match action {
            TemplateCommands::List => {
                print!("{}", ListTemplatesUseCase::new(EmbeddedTemplateRepository::new()).execute());
                Ok(())
            }
            TemplateCommands::Export { path } => export_templates(&path).await,
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Configuration file merged with command-line overrides
struct ResolvedConfig {
    config: ProjectConfig,
    /// Dockerfile options with command-line overrides applied
    docker: DockerOptions,
    generator: BuildGenerator,
}

fn resolve(args: DescriptorArgs, docker_args: DockerArgs) -> anyhow::Result<ResolvedConfig> {
    let mut config = match &args.config {
        Some(path) => ProjectConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ProjectConfig {
            project_name: None,
            output_dir: None,
            build: BuildDescriptor::new(DEFAULT_JAVA_VERSION),
            docker: None,
        },
    };

    let build = &mut config.build;
    if let Some(version) = args.java_version {
        build.language_version = version;
    }
    if let Some(version) = args.spring_boot_version {
        build.framework_version = Some(version);
    }
    if let Some(version) = args.dependency_management_version {
        build.dependency_management_version = Some(version);
    }
    if !args.dependencies.is_empty() || !args.test_dependencies.is_empty() {
        build.dependencies = args
            .dependencies
            .into_iter()
            .map(|coordinate| Dependency::new(coordinate, DependencyScope::Compile))
            .chain(
                args.test_dependencies
                    .into_iter()
                    .map(|coordinate| Dependency::new(coordinate, DependencyScope::Test)),
            )
            .collect();
    }
    if let Some(platform) = args.test_platform {
        build.test_platform = platform.parse::<TestPlatform>()?;
    }
    if !args.repositories.is_empty() {
        build.repositories = args
            .repositories
            .iter()
            .map(|repository| repository.parse::<Repository>())
            .collect::<Result<Vec<_>, _>>()?;
    }

    let mut docker = config.docker.clone().unwrap_or_default();
    if let Some(build_tool) = docker_args.build_tool {
        docker.build_tool = build_tool.parse()?;
    }
    if let Some(port) = docker_args.port {
        docker.port = port;
    }
    if let Some(version) = docker_args.docker_java_version {
        docker.java_version = Some(version);
    }

    let renderer = match &args.template_dir {
        Some(dir) => TeraTemplateRenderer::with_template_dir(dir)
            .with_context(|| format!("Failed to open template directory {}", dir.display()))?,
        None => TeraTemplateRenderer::embedded(),
    };

    Ok(ResolvedConfig {
        config,
        docker,
        generator: BuildGenerator::new(Arc::new(renderer)),
    })
}

/// Parameters for the scaffold command
struct ScaffoldParams {
    descriptor: DescriptorArgs,
    docker_args: DockerArgs,
    project_name: Option<String>,
    output_dir: Option<PathBuf>,
    docker: bool,
    force: bool,
}

async fn scaffold(params: ScaffoldParams) -> anyhow::Result<()> {
    let ResolvedConfig {
        config,
        docker,
        generator,
    } = resolve(params.descriptor, params.docker_args)?;

    let project_name = params
        .project_name
        .or(config.project_name)
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    let output_dir = params
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from(&project_name));
    // A docker section in the config file opts in just like --docker
    let docker = (params.docker || config.docker.is_some()).then_some(docker);

    info!(
        project = %project_name,
        java_version = config.build.language_version,
        "Scaffolding Gradle project"
    );

    let use_case = ScaffoldProjectUseCase::new(generator, Arc::new(FileSystemOutputService::new()));
    let response = use_case
        .execute(ScaffoldRequest {
            project_name,
            output_dir,
            build: config.build,
            docker,
            force: params.force,
        })
        .await
        .context("Failed to scaffold project")?;

    for file in &response.files {
        println!("  created {}", file.display());
    }
    println!(
        "\n✅ Scaffolded {} file(s) in {}",
        response.files.len(),
        response.output_path.display()
    );
    Ok(())
}

fn render(args: DescriptorArgs, docker_args: DockerArgs, dockerfile: bool) -> anyhow::Result<()> {
    let ResolvedConfig {
        config,
        docker,
        generator,
    } = resolve(args, docker_args)?;

    let text = if dockerfile {
        generator.render_dockerfile(&docker.descriptor_for(&config.build))?
    } else {
        generator.render_build_script(&config.build)?
    };

    print!("{text}");
    Ok(())
}

async fn inspect(path: &Path, format: &str) -> anyhow::Result<()> {
    let format: ConfigFormat = format.parse()?;
    let script = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let descriptor = gradlegen::parse_build_script(&script)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let text = format.to_string_pretty(&descriptor)?;
    println!("{}", text.trim_end());
    Ok(())
}

async fn export_templates(path: &Path) -> anyhow::Result<()> {
    let use_case = ExportTemplatesUseCase::new(
        EmbeddedTemplateRepository::new(),
        Arc::new(FileSystemOutputService::new()),
    );
    let count = use_case
        .execute(path)
        .await
        .context("Failed to export templates")?;

    println!("Exported {count} templates to {}", path.display());
    Ok(())
}
