use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const MODULE_EXTENSION: &str = "toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid module search pattern for {modules_path}: {source}")]
    ModulePatternError {
        modules_path: PathBuf,
        source: glob::PatternError,
    },

    #[error("Failed to list modules under {modules_path}: {source}")]
    ModuleListError {
        modules_path: PathBuf,
        source: glob::GlobError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding module files (`*.toml`).
    pub modules_path: PathBuf,
    /// Directory the rendered pages are written to.
    pub output_path: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.modules_path =
            Self::expand_path(&config.modules_path).unwrap_or(config.modules_path);
        config.output_path = Self::expand_path(&config.output_path).unwrap_or(config.output_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/coursemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Module files directly under `modules_path`, sorted by path.
    pub fn module_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let pattern = self
            .modules_path
            .join(format!("*.{MODULE_EXTENSION}"))
            .to_string_lossy()
            .into_owned();

        let entries = glob::glob(&pattern).map_err(|source| ConfigError::ModulePatternError {
            modules_path: self.modules_path.clone(),
            source,
        })?;

        let mut files = entries
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(Ok(path)),
                Ok(_) => None,
                Err(source) => Some(Err(ConfigError::ModuleListError {
                    modules_path: self.modules_path.clone(),
                    source,
                })),
            })
            .collect::<Result<Vec<_>, _>>()?;
        files.sort();
        Ok(files)
    }

    /// Where the rendered page for `module_file` goes: `<output_path>/<stem>.html`.
    pub fn output_file_for(&self, module_file: &Path) -> PathBuf {
        let stem = module_file
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_else(|| "module".into());
        self.output_path.join(format!("{stem}.html"))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
