use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/fdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Directory completed downloads land in when the caller does not pick
    /// one per task.
    #[serde(default)]
    pub download_dir: Option<String>,
    /// Verify a committed file against its expected MD5 when one is known.
    #[serde(default = "default_verify_checksum")]
    pub verify_checksum: bool,
}

fn default_verify_checksum() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            verify_checksum: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CoreConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CoreConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CoreConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CoreConfig::default();
        assert!(cfg.download_dir.is_none());
        assert!(cfg.verify_checksum);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CoreConfig {
            download_dir: Some("/var/lib/fdl/downloads".to_string()),
            verify_checksum: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CoreConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.download_dir, cfg.download_dir);
        assert_eq!(parsed.verify_checksum, cfg.verify_checksum);
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: CoreConfig = toml::from_str("").unwrap();
        assert!(cfg.download_dir.is_none());
        assert!(cfg.verify_checksum);

        let cfg: CoreConfig = toml::from_str("download_dir = \"/srv/firmware\"").unwrap();
        assert_eq!(cfg.download_dir.as_deref(), Some("/srv/firmware"));
        assert!(cfg.verify_checksum);
    }
}
