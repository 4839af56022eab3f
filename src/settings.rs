//! Settings persistence using TOML
//!
//! Stored in ~/.config/tetrs-reserve/settings.toml (or platform equivalent).
//! Queue and reserve sizes are constants, not settings.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keybindings
    pub keys: KeyBindings,
    /// Session settings
    pub session: SessionSettings,
}

/// Key bindings (stored as strings for easy editing)
/// Each action can have one or more keys bound to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub play: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub reserve: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub use_reserved: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub swap_one: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub swap_many: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub quit: Vec<String>,
}

/// Deserialize keys as either a single string or array of strings
fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct KeysVisitor;

    impl<'de> Visitor<'de> for KeysVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or array of strings")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut keys = Vec::new();
            while let Some(key) = seq.next_element::<String>()? {
                keys.push(key);
            }
            Ok(keys)
        }
    }

    deserializer.deserialize_any(KeysVisitor)
}

/// Serialize keys: single key as string, multiple as array
fn serialize_keys<S>(keys: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    if let [key] = keys.as_slice() {
        serializer.serialize_str(key)
    } else {
        let mut seq = serializer.serialize_seq(Some(keys.len()))?;
        for key in keys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

/// Per-session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Fixed seed for a reproducible piece sequence; random when unset
    pub seed: Option<u64>,
    /// tracing-subscriber filter directive for the log file
    pub log_filter: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            play: vec!["1".to_string()],
            reserve: vec!["2".to_string()],
            use_reserved: vec!["3".to_string()],
            swap_one: vec!["4".to_string()],
            swap_many: vec!["5".to_string()],
            quit: vec!["0".to_string(), "q".to_string(), "Esc".to_string()],
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "tetrs_reserve=debug".to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tetrs", "tetrs-reserve")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Whether a settings file is present on disk
    pub fn exists() -> bool {
        Self::settings_path().is_some_and(|path| path.exists())
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(_) => Self::default(),
        }
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_toml(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_key_or_list() {
        let settings = Settings::from_toml(
            r#"
            [keys]
            play = "p"
            reserve = ["r", "2"]
            "#,
        );
        assert_eq!(settings.keys.play, vec!["p"]);
        assert_eq!(settings.keys.reserve, vec!["r", "2"]);
        // Unlisted bindings keep their defaults
        assert_eq!(settings.keys.swap_many, vec!["5"]);
    }

    #[test]
    fn test_session_section() {
        let settings = Settings::from_toml(
            r#"
            [session]
            seed = 1234
            "#,
        );
        assert_eq!(settings.session.seed, Some(1234));
        assert_eq!(settings.session.log_filter, "tetrs_reserve=debug");
    }

    #[test]
    fn test_malformed_falls_back_to_default() {
        let settings = Settings::from_toml("keys = 7");
        assert_eq!(settings.keys.play, vec!["1"]);
        assert_eq!(settings.session.seed, None);
    }

    #[test]
    fn test_save_format_round_trips() {
        let mut settings = Settings::default();
        settings.session.seed = Some(99);
        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("play = \"1\""));
        let parsed = Settings::from_toml(&text);
        assert_eq!(parsed.session.seed, Some(99));
        assert_eq!(parsed.keys.quit, settings.keys.quit);
    }
}
