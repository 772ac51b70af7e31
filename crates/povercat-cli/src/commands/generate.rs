use std::path::PathBuf;

use miette::Result;

use chrono::Datelike;
use povercat_core::config::{ProjectConfig, CONFIG_FILE_NAME};
use povercat_ops::ops_generate::{generate, GenerateOptions, SkipReason};
use povercat_util::errors::PovercatError;
use povercat_util::fs::find_ancestor_with;

pub fn exec(
    catalogs: Vec<PathBuf>,
    package: Option<String>,
    output_dir: Option<PathBuf>,
    project_version: Option<String>,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(PovercatError::Io)?;
    let project_root = find_ancestor_with(&cwd, CONFIG_FILE_NAME).unwrap_or_else(|| cwd.clone());
    tracing::debug!("Project root: {}", project_root.display());
    let config = ProjectConfig::load(&project_root.join(CONFIG_FILE_NAME))?
        .generator
        .rooted_at(&project_root);

    let opts = GenerateOptions {
        package: package.unwrap_or(config.package),
        catalogs: if catalogs.is_empty() {
            config.catalogs
        } else {
            catalogs.into_iter().map(|c| cwd.join(c)).collect()
        },
        output_dir: output_dir
            .map(|dir| cwd.join(dir))
            .unwrap_or(config.output_dir),
        version: project_version.unwrap_or(config.version),
        copyright_year: config
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year()),
    };

    let report = generate(&opts)?;

    for path in &report.written {
        println!("Generated {}", path.display());
    }
    for (path, reason) in &report.skipped {
        let why = match reason {
            SkipReason::NotToml => "not a .toml file",
            SkipReason::NothingToEmit => "nothing to generate",
        };
        println!("Skipped {} ({why})", path.display());
    }
    for (path, message) in &report.failed {
        eprintln!("Failed {}: {message}", path.display());
    }
    println!(
        "{} catalog class(es) generated in package {}",
        report.written.len(),
        opts.package
    );

    if report.has_failures() {
        return Err(PovercatError::Generic {
            message: format!("{} catalog(s) could not be generated", report.failed.len()),
        }
        .into());
    }
    Ok(())
}
