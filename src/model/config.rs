use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Optional user configuration. Only UI color overrides for now.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Color overrides as hex strings, keyed by slot name
    /// (e.g. `highlight = "#EC4899"`, `work = "#16A34A"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Resolve the config file path: `$HARU_CONFIG` wins, otherwise
/// `~/.config/haru/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("HARU_CONFIG") {
        return Some(PathBuf::from(p));
    }
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("haru")
            .join("config.toml"),
    )
}

/// Load the user config. A missing or unparsable file falls back to the
/// defaults; config is cosmetic, never fatal.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let Ok(text) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&text).unwrap_or_default()
}
