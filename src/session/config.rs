// Session settings.
//
// Settings are read from a JSON file whose path comes from
// `BITMAP_EDITOR_CONFIG`. Every field is optional; missing ones fall back to
// the defaults below.

use std::path::Path;

use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::Color;

pub const CONFIG_ENV: &str = "BITMAP_EDITOR_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Printed before each input line.
    pub prompt: String,
    /// Colour used by `I` and `C`.
    pub default_color: Color,
    /// Print the command summary after every failed command.
    pub help_on_error: bool,
    /// Upper bound on `width * height` accepted by `I`.
    pub max_cells: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            default_color: Color::WHITE,
            help_on_error: true,
            max_cells: 1 << 24,
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: SessionConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Loads the file named by `BITMAP_EDITOR_CONFIG`, or the defaults when
    /// the variable is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                info!("loading config from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = SessionConfig::from_json(r#"{"default_color": "B", "help_on_error": false}"#).unwrap();
        assert_eq!(cfg.default_color.as_char(), 'B');
        assert!(!cfg.help_on_error);
        assert_eq!(cfg.prompt, "> ");
    }

    #[test]
    fn invalid_default_color_is_rejected() {
        assert!(SessionConfig::from_json(r#"{"default_color": "b"}"#).is_err());
        assert!(SessionConfig::from_json(r#"{"default_color": "OO"}"#).is_err());
    }

    #[test]
    fn load_reports_path() {
        let err = SessionConfig::load(Path::new("/nonexistent/bitmap-editor.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bitmap-editor.json"));
    }
}
