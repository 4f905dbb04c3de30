use anyhow::Result;
use clap::{Parser, Subcommand};
use coursemark_config::Config;
use std::{path::PathBuf, process};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "coursemark")]
#[command(about = "Render course content blocks to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a markdown file (or stdin) to an HTML fragment
    Render {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Clean diagram source for the diagram engine
    Diagram {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Format a timestamp: seconds, or an existing M:SS label
    Time {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },
    /// Render a module file to a standalone HTML page
    Module {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Render every module in the configured modules directory
    Build {
        /// Config file to use instead of the default location
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render { file } => {
            let source = commands::read_input(file.as_deref())?;
            println!("{}", coursemark_engine::render_markdown(&source));
        }
        Command::Diagram { file } => {
            let source = commands::read_input(file.as_deref())?;
            println!("{}", coursemark_engine::sanitize_diagram_source(&source));
        }
        Command::Time { value } => {
            println!("{}", commands::format_time_arg(&value));
        }
        Command::Module { file } => {
            print!("{}", commands::render_module_file(&file)?);
        }
        Command::Build { config } => {
            let loaded = match &config {
                Some(path) => Config::load_from_path(path),
                None => Config::load(),
            };
            let config_path = config.unwrap_or_else(Config::config_path);
            log::info!("Config path: {}", config_path.display());

            let config = match loaded {
                Ok(Some(config)) => config,
                Ok(None) => {
                    eprintln!("Error: No config file found");
                    eprintln!(
                        "Create a config file at {} with modules_path and output_path",
                        config_path.display()
                    );
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: Failed to load config file: {e}");
                    process::exit(1);
                }
            };

            let report = commands::build(&config)?;
            eprintln!(
                "Rendered {} of {} modules into {}",
                report.written.len(),
                report.written.len() + report.failed.len(),
                config.output_path.display()
            );
            if !report.failed.is_empty() {
                process::exit(1);
            }
        }
    }

    Ok(())
}
