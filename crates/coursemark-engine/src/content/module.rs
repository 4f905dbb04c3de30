use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ContentBlock;

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Failed to read module file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse module file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to parse module: {0}")]
    ParseStr(#[from] toml::de::Error),
}

/// A course module: an ordered list of content blocks under a title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl Module {
    pub fn from_toml_str(source: &str) -> Result<Self, ModuleError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModuleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ModuleError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentType, TextBlock};
    use tempfile::TempDir;

    const SAMPLE: &str = r##"
title = "Ownership"

[[blocks]]
content_type = "text"
md_content = "# Moves"

[[blocks]]
content_type = "mermaid"
title = "Flow"
mermaid_code = "graph TD\n  A --> B"
"##;

    #[test]
    fn parses_blocks_in_order() {
        let module = Module::from_toml_str(SAMPLE).unwrap();
        assert_eq!(module.title, "Ownership");
        let types: Vec<ContentType> = module.blocks.iter().map(|b| b.content_type()).collect();
        assert_eq!(types, vec![ContentType::Text, ContentType::Mermaid]);
        assert_eq!(
            module.blocks[0],
            ContentBlock::Text(TextBlock {
                md_content: Some("# Moves".to_string()),
                ai_generated: false,
            })
        );
    }

    #[test]
    fn unknown_block_type_is_an_error() {
        let err = Module::from_toml_str(
            r#"
title = "x"
[[blocks]]
content_type = "podcast"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ModuleError::ParseStr(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Module::load(&path).unwrap_err();
        assert!(matches!(err, ModuleError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ownership.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let module = Module::load(&path).unwrap();
        assert_eq!(module.blocks.len(), 2);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "title = ").unwrap();

        let err = Module::load(&path).unwrap_err();
        assert!(matches!(err, ModuleError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
