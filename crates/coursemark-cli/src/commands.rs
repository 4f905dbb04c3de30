use anyhow::{Context, Result};
use coursemark_config::Config;
use coursemark_engine::{Module, format_time, render_module};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Reads the whole file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Numeric arguments are formatted as seconds; anything else goes through
/// the text path, so `1:05` is echoed and `abc` becomes `0:00`.
pub fn format_time_arg(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(seconds) => format_time(seconds),
        Err(_) => format_time(value),
    }
}

pub fn render_module_file(path: &Path) -> Result<String> {
    let module = Module::load(path)?;
    Ok(render_module(&module))
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Renders each module file into `output_path`. A module that fails to load
/// is reported and skipped; the others are still written.
pub fn build(config: &Config) -> Result<BuildReport> {
    let files = config.module_files()?;
    if files.is_empty() {
        log::warn!("No module files found in {}", config.modules_path.display());
    }

    fs::create_dir_all(&config.output_path).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_path.display()
        )
    })?;

    let mut report = BuildReport::default();
    for module_file in files {
        let html = match render_module_file(&module_file) {
            Ok(html) => html,
            Err(e) => {
                log::error!("{e}");
                report.failed.push((module_file, e.to_string()));
                continue;
            }
        };

        let output_file = config.output_file_for(&module_file);
        fs::write(&output_file, html)
            .with_context(|| format!("Failed to write {}", output_file.display()))?;
        log::info!("{} -> {}", module_file.display(), output_file.display());
        report.written.push(output_file);
    }

    Ok(report)
}
