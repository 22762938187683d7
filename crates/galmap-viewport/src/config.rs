//! Asset location configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Environment variable overriding the default asset directory.
pub const ASSET_DIR_ENV: &str = "GALMAP_ASSET_DIR";

/// Where the pre-rendered Milky Way rasters live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Directory containing the fixed-name image assets.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
        }
    }
}

impl AssetConfig {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    /// Build from the environment, falling back to the default path.
    pub fn from_env() -> Self {
        match std::env::var(ASSET_DIR_ENV) {
            Ok(dir) => Self::new(dir),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_assets() {
        assert_eq!(AssetConfig::default().asset_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_deserializes_with_default() {
        let cfg: AssetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.asset_dir, PathBuf::from("assets"));

        let cfg: AssetConfig = serde_json::from_str(r#"{"asset_dir": "/data/mw"}"#).unwrap();
        assert_eq!(cfg.asset_dir, PathBuf::from("/data/mw"));
    }
}
