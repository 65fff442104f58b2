use crate::error::ConfigError;
use crate::model::Collection;
use crate::state::navigation::DEFAULT_HISTORY_LIMIT;
use crate::style::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub chat: ChatConfig,
    /// Collections served when no backend is connected
    pub collections: Vec<Collection>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NavigationConfig {
    /// Location opened at launch when none is given on the command line
    pub start_path: String,
    /// Number of locations kept for back/forward
    pub history_limit: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ChatConfig {
    /// Passages retrieved per question
    pub top_k: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 720.0,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            start_path: "/".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            window: WindowConfig::default(),
            navigation: NavigationConfig::default(),
            chat: ChatConfig::default(),
            collections: vec![
                Collection::new("1", "Product manuals")
                    .with_description("User guides and installation notes")
                    .with_document_count(12),
                Collection::new("2", "Research papers")
                    .with_description("Internal and published papers")
                    .with_document_count(4),
            ],
        }
    }
}

impl ThemeConfig {
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.mode)
    }
}

impl Config {
    /// Get the path to the default config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "docuchat")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.drop_unlinkable_collections();
        Ok(config)
    }

    /// Collections whose id cannot be written into `/chat/{id}` would open a
    /// chat that no link or address can reach again, so they are skipped.
    fn drop_unlinkable_collections(&mut self) {
        self.collections.retain(|collection| {
            let keep = collection.id.is_path_segment();
            if !keep {
                warn!(id = ?collection.id.as_str(), "Skipping collection with an id that is not a path segment");
            }
            keep
        });
    }

    /// Load configuration from `path` (or the default location), falling back
    /// to defaults when the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::config_path) else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(error = %err, "Using default configuration");
                Config::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            info!(path = %path.display(), "Wrote default configuration");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.theme.theme(), Theme::Dark);
        assert_eq!(config.navigation.start_path, "/");
        assert_eq!(config.navigation.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.chat.top_k, 3);
        assert_eq!(config.collections.len(), 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.collections, deserialized.collections);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [navigation]
            start_path = "/chat/abc123"

            [[collections]]
            id = "abc123"
            name = "Contracts"
            "#,
        )
        .expect("Failed to parse");

        assert_eq!(config.navigation.start_path, "/chat/abc123");
        assert_eq!(config.navigation.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.collections.len(), 1);
        assert_eq!(config.collections[0].document_count, 0);
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.mode = "light".to_string();
        config.chat.top_k = 5;
        config.save_to(&path).expect("Failed to save");

        let loaded = Config::load_from(&path).expect("Failed to load");
        assert_eq!(loaded.theme.theme(), Theme::Light);
        assert_eq!(loaded.chat.top_k, 5);

        let loaded = Config::load(Some(&path));
        assert_eq!(loaded.chat.top_k, 5);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [not toml").expect("Failed to write");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(Config::load(Some(&path)).chat.top_k, 3);
    }

    #[test]
    fn test_collections_with_unlinkable_ids_are_skipped() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [[collections]]
            id = "a/b"
            name = "Slashed"

            [[collections]]
            id = ""
            name = "Empty"

            [[collections]]
            id = "ok"
            name = "Fine"
            "#,
        )
        .expect("Failed to write");

        let config = Config::load_from(&path).expect("Failed to load");
        assert_eq!(config.collections.len(), 1);
        assert_eq!(config.collections[0].id.as_str(), "ok");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Read { .. })
        ));
        assert_eq!(Config::load(Some(&path)).navigation.start_path, "/");
    }
}
