mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use oc2oscal::prelude::*;
use oc2oscal::shared::error::ExitCode;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_OUTPUT_DIR: &str = "oscal";
const DEFAULT_REPOSITORY: &str = ".";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let repository = args
        .repository
        .clone()
        .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string());

    let config = load_config(&args, &repository)?;

    // CLI flags take precedence over the config file
    let output_directory = args
        .output
        .clone()
        .or(config.output_dir.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    let plan_id_policy = match args.plan_id {
        Some(policy) => policy,
        None => config.plan_id_policy()?.unwrap_or_default(),
    };

    // Create adapters (Dependency Injection)
    let use_case = ConvertWorkspaceUseCase::new(
        OpenControlReader::new(),
        FileSystemWriter::new(OscalXmlFormatter::new()),
        StderrProgressReporter::new(),
    );

    let request = ConvertRequest::new(repository, PathBuf::from(output_directory))
        .with_plan_id_policy(plan_id_policy);

    use_case.execute(request)?;

    Ok(())
}

/// Explicit `--config` wins; otherwise look next to a local workspace
fn load_config(args: &Args, repository: &str) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(Path::new(path));
    }

    let workspace_dir = Path::new(repository.strip_prefix("file://").unwrap_or(repository));
    if workspace_dir.is_dir() {
        if let Some(config) = config::discover_config(workspace_dir)? {
            return Ok(config);
        }
    }

    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_discovers_workspace_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(config::CONFIG_FILENAME),
            "output_dir: build/oscal\n",
        )
        .unwrap();
        let repository = temp_dir.path().to_str().unwrap();
        let args = Args::try_parse_from(["oc2oscal", "-r", repository]).unwrap();

        let config = load_config(&args, repository).unwrap();
        assert_eq!(config.output_dir.as_deref(), Some("build/oscal"));
    }

    #[test]
    fn test_load_config_without_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let repository = temp_dir.path().to_str().unwrap();
        let args = Args::try_parse_from(["oc2oscal", "-r", repository]).unwrap();

        let config = load_config(&args, repository).unwrap();
        assert!(config.output_dir.is_none());
        assert!(config.plan_id.is_none());
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let args =
            Args::try_parse_from(["oc2oscal", "-c", "/nonexistent/oc2oscal.config.yml"]).unwrap();

        let err = load_config(&args, ".").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
