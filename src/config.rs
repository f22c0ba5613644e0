use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional config file supplying defaults for values the user did not pass
/// on the command line. CLI flags always win.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub before_context: Option<i64>,
    pub after_context: Option<i64>,
    pub context: Option<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub numbered: Option<bool>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path()?;
        if let Some(path) = config_path {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&content).with_context(|| "Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    fn find_config_path() -> Result<Option<PathBuf>> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("linesift/config.toml");
            if xdg_path.exists() {
                return Ok(Some(xdg_path));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".linesift.toml");
            if home_path.exists() {
                return Ok(Some(home_path));
            }
        }

        let current_path = Path::new(".linesift.toml");
        if current_path.exists() {
            return Ok(Some(current_path.to_path_buf()));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.search.before_context.is_none());
        assert!(config.display.numbered.is_none());
    }

    #[test]
    fn partial_sections_parse() {
        let config: Config = toml::from_str(
            r#"
            [search]
            context = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.search.context, Some(2));
        assert!(config.search.before_context.is_none());
    }
}
