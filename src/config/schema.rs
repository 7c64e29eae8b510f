use serde::Deserialize;

use crate::validate::{FileValidator, UrlValidator};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playdeck/config.toml` or
/// `~/.config/playdeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub validation: ValidationSettings,
    pub player: PlayerSettings,
    pub downloads: DownloadSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            validation: ValidationSettings::default(),
            player: PlayerSettings::default(),
            downloads: DownloadSettings::default(),
        }
    }
}

/// Policy for the add-track form validators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// MIME types the file validator accepts. An empty list disables the check.
    pub allowed_types: Vec<String>,

    /// Upload size limit in bytes. 0 disables the check.
    pub size_limit_bytes: u64,

    /// URL protocols the URL validator accepts. An empty list disables the check.
    pub allowed_protocols: Vec<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            allowed_types: vec![
                "audio/mpeg".into(),
                "audio/ogg".into(),
                "audio/wav".into(),
                "audio/flac".into(),
            ],
            size_limit_bytes: 100 * 1024 * 1024,
            allowed_protocols: vec!["http".into(), "https".into()],
        }
    }
}

impl ValidationSettings {
    /// Build a file validator configured with this policy.
    pub fn file_validator(&self) -> FileValidator {
        FileValidator {
            size_limit: (self.size_limit_bytes > 0).then_some(self.size_limit_bytes),
            allowed_types: (!self.allowed_types.is_empty()).then(|| self.allowed_types.clone()),
        }
    }

    /// Build a URL validator configured with this policy.
    pub fn url_validator(&self) -> UrlValidator {
        UrlValidator {
            allowed_protocols: (!self.allowed_protocols.is_empty())
                .then(|| self.allowed_protocols.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Interval between time-update events while playing (milliseconds).
    pub tick_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self { tick_ms: 500 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// Directory the filesystem download trigger saves into.
    pub dir: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            dir: "Downloads".to_string(),
        }
    }
}
