use serde::Deserialize;
use validator::{ValidationError, Validate};
use validator_derive::Validate;

use std::path::{Path, PathBuf};

use crate::tracker::MAX_INPUT_CHARS;

#[derive(Debug, Deserialize, Validate, Clone)]
pub struct Config {
    #[serde(default = "default_model_name")]
    #[validate(custom = "ensure_model_files")]
    pub model_name: String,

    #[serde(default = "default_max_input_chars")]
    #[validate(range(min = 1, max = 4096))]
    pub max_input_chars: usize,

    #[serde(default = "default_show_diary")]
    pub show_diary: bool,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            max_input_chars: default_max_input_chars(),
            show_diary: default_show_diary(),
            asset_dir: default_asset_dir(),
            debug: default_debug(),
        }
    }
}

impl Config {
    /// Reads the config at `path`, or the defaults when there is no file.
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let config = if path.exists() {
            toml::from_str(&std::fs::read_to_string(path)?)?
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_model_name() -> String {
    "default".to_string()
}

fn default_max_input_chars() -> usize {
    MAX_INPUT_CHARS
}

fn default_show_diary() -> bool {
    true
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_debug() -> bool {
    false
}

fn ensure_model_files(model_name: &str) -> Result<(), ValidationError> {
    if model_name == "default" {
        Ok(())
    }
    else if ! PathBuf::from(format!("./{}.model/model.ot", model_name)).exists() {
        Err(ValidationError::new("Rust model missing"))
    }
    else if ! PathBuf::from(format!("./{}.model/config.json", model_name)).exists() {
        Err(ValidationError::new("Config model missing"))
    }
    else if ! PathBuf::from(format!("./{}.model/vocab.json", model_name)).exists() {
        Err(ValidationError::new("Vocab model missing"))
    }
    else if ! PathBuf::from(format!("./{}.model/merges.txt", model_name)).exists() {
        Err(ValidationError::new("Merges model missing"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() -> anyhow::Result<()> {
        let config: Config = toml::from_str("")?;
        config.validate()?;
        assert_eq!(config.model_name, "default");
        assert_eq!(config.max_input_chars, 512);
        assert!(config.show_diary);
        assert_eq!(config.asset_dir, PathBuf::from("."));
        assert!(!config.debug);
        Ok(())
    }

    #[test]
    fn reads_overrides() -> anyhow::Result<()> {
        let config: Config = toml::from_str(
            r#"
            max_input_chars = 128
            show_diary = false
            asset_dir = "assets"
            debug = true
            "#,
        )?;
        config.validate()?;
        assert_eq!(config.max_input_chars, 128);
        assert!(!config.show_diary);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn missing_model_files_fail_validation() -> anyhow::Result<()> {
        let config: Config = toml::from_str(r#"model_name = "no-such-roberta""#)?;
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn zero_input_limit_fails_validation() -> anyhow::Result<()> {
        let config: Config = toml::from_str("max_input_chars = 0")?;
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let config = Config::load(Path::new("./definitely-not-here.toml"))?;
        assert_eq!(config.model_name, "default");
        Ok(())
    }
}
