use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::{Theme, UiSession};

// ---------------------------------------------------------------------------
// On-disk config
// ---------------------------------------------------------------------------

/// User-facing defaults. Missing fields take their default; unknown fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `from` of every composed record.
    pub sender_address: String,
    /// Subject given to drafts saved without one.
    pub draft_placeholder_subject: String,
    pub theme: Theme,
    pub sidebar_open: bool,
    /// Start new sessions with the demo mailbox instead of an empty one.
    pub seed_demo_mailbox: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender_address: "me@gmail.com".into(),
            draft_placeholder_subject: "(no subject)".into(),
            theme: Theme::Light,
            sidebar_open: true,
            seed_demo_mailbox: true,
        }
    }
}

// ---------------------------------------------------------------------------
// File paths
// ---------------------------------------------------------------------------

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailpane")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ---------------------------------------------------------------------------
// Load / save / resolve
// ---------------------------------------------------------------------------

impl Config {
    /// Read a config file. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = serde_json::from_str(&data)?;
        Ok(Some(config))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let data = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, data).map_err(ConfigError::Write)
    }

    /// Defaults, then the config file, then environment variables.
    /// A broken file is logged and skipped.
    pub fn resolve() -> Self {
        Self::resolve_from(&config_path())
    }

    pub fn resolve_from(path: &Path) -> Self {
        let mut config = match Self::load_from(path) {
            Ok(Some(config)) => {
                log::info!("Config loaded from {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        };
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overlay `MAILPANE_*` values from `lookup`. Unparseable values are
    /// ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(sender) = lookup("MAILPANE_SENDER").filter(|s| !s.trim().is_empty()) {
            self.sender_address = sender.trim().to_string();
        }
        match lookup("MAILPANE_THEME").as_deref() {
            Some("dark") => self.theme = Theme::Dark,
            Some("light") => self.theme = Theme::Light,
            Some(other) => log::warn!("Unknown MAILPANE_THEME '{}'", other),
            None => {}
        }
        if let Some(seed) = lookup("MAILPANE_SEED_DEMO") {
            self.seed_demo_mailbox = seed == "true" || seed == "1";
        }
    }

    /// Initial UI session for these settings.
    pub fn session(&self) -> UiSession {
        UiSession {
            sidebar_open: self.sidebar_open,
            theme: self.theme,
            ..UiSession::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            sender_address: "alice@example.com".into(),
            theme: Theme::Dark,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "dark", "future_field": 3}"#).unwrap();
        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.sender_address, "me@gmail.com");
        assert!(config.seed_demo_mailbox);
    }

    #[test]
    fn broken_file_is_an_error_but_resolves_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));

        let mut expected = Config::default();
        expected.apply_env();
        assert_eq!(Config::resolve_from(&path), expected);
    }

    #[test]
    fn overrides_win() {
        let env: HashMap<&str, &str> = [
            ("MAILPANE_SENDER", " bob@example.com "),
            ("MAILPANE_THEME", "dark"),
            ("MAILPANE_SEED_DEMO", "0"),
        ]
        .into_iter()
        .collect();
        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.sender_address, "bob@example.com");
        assert_eq!(config.theme, Theme::Dark);
        assert!(!config.seed_demo_mailbox);
    }

    #[test]
    fn bad_theme_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "MAILPANE_THEME").then(|| "neon".to_string()));
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn session_from_config() {
        let config = Config {
            sidebar_open: false,
            theme: Theme::Dark,
            ..Config::default()
        };
        let s = config.session();
        assert!(!s.sidebar_open);
        assert_eq!(s.theme, Theme::Dark);
        assert!(!s.compose_open);
    }
}
