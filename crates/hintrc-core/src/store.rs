//! Reading and writing `.hintrc` documents on disk
//!
//! The store is fully stateless between invocations: the on-disk file is the
//! only shared resource. Each mutation operation loads its own snapshot and
//! rewrites the whole document, so two concurrent operations on the same
//! path race and the last save wins.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::HintrcError;
use crate::result::Result;
use crate::user_config::UserConfig;

/// File name convention for the linting engine's user configuration.
pub const HINTRC_FILENAME: &str = ".hintrc";

/// Compose the config path for a project root or a global storage directory.
pub fn hintrc_path(directory: &Path) -> PathBuf {
    directory.join(HINTRC_FILENAME)
}

/// Stateless accessor for `.hintrc` documents.
pub struct ConfigStore;

impl ConfigStore {
    /// Load the configuration at `path`, creating a default
    /// `{"extends": ["development"]}` document first when no file exists
    /// there.
    ///
    /// Fails with [`HintrcError::ParseError`] when the file exists but is
    /// not valid JSON, with [`HintrcError::UnsupportedShapeError`] when its
    /// `hints` collection is not a mapping, and with
    /// [`HintrcError::IoError`] for any filesystem failure. Failures
    /// propagate to the caller unchanged; there is no retry.
    pub async fn load(path: &Path) -> Result<UserConfig> {
        let exists = fs::try_exists(path)
            .await
            .map_err(|source| HintrcError::io_error(path, source))?;
        if !exists {
            Self::save(path, &UserConfig::default()).await?;
            tracing::debug!("created default config at {}", path.display());
        }

        let raw = fs::read_to_string(path)
            .await
            .map_err(|source| HintrcError::io_error(path, source))?;
        let config: UserConfig =
            serde_json::from_str(&raw).map_err(|source| HintrcError::parse_error(path, source))?;
        config.ensure_supported()?;

        Ok(config)
    }

    /// Serialize `config` and overwrite the file at `path`.
    ///
    /// The write is not atomic (no temp-file-then-rename): a crash mid-write
    /// can leave a truncated file behind. Parent directories are not
    /// created; a missing parent surfaces as [`HintrcError::IoError`].
    pub async fn save(path: &Path, config: &UserConfig) -> Result<()> {
        let serialized = serde_json::to_string_pretty(config)
            .map_err(|source| HintrcError::parse_error(path, source))?;
        fs::write(path, serialized)
            .await
            .map_err(|source| HintrcError::io_error(path, source))?;
        tracing::debug!("saved config to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_hintrc_path_join() {
        let path = hintrc_path(Path::new("/workspace/project"));
        assert_eq!(path, PathBuf::from("/workspace/project/.hintrc"));
    }

    #[tokio::test]
    async fn test_load_creates_default_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = hintrc_path(temp_dir.path());

        let config = ConfigStore::load(&path).await.unwrap();

        assert_eq!(config.extends, Some(vec!["development".to_owned()]));
        assert!(config.hints.is_none());

        // The default document was persisted, not just returned.
        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, json!({ "extends": ["development"] }));
    }

    #[tokio::test]
    async fn test_load_existing_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = hintrc_path(temp_dir.path());
        std::fs::write(&path, r#"{ "hints": { "no-inline-styles": "off" } }"#).unwrap();

        let config = ConfigStore::load(&path).await.unwrap();

        assert!(config.extends.is_none());
        assert_eq!(
            config.hints().unwrap().get("no-inline-styles"),
            Some(&json!("off"))
        );
    }

    #[tokio::test]
    async fn test_load_invalid_json_fails_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let path = hintrc_path(temp_dir.path());
        std::fs::write(&path, "{ not json").unwrap();

        let err = ConfigStore::load(&path).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_load_rejects_array_hints() {
        let temp_dir = TempDir::new().unwrap();
        let path = hintrc_path(temp_dir.path());
        std::fs::write(&path, r#"{ "hints": ["compat-api/css"] }"#).unwrap();

        let err = ConfigStore::load(&path).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedShape);
    }

    #[tokio::test]
    async fn test_save_into_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join(HINTRC_FILENAME);

        let err = ConfigStore::save(&path, &UserConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = hintrc_path(temp_dir.path());

        let mut config = UserConfig::default();
        config
            .hints_mut()
            .unwrap()
            .insert("compat-api/css".to_owned(), json!(["default", {}]));

        ConfigStore::save(&path, &config).await.unwrap();
        let loaded = ConfigStore::load(&path).await.unwrap();
        assert_eq!(loaded, config);
    }
}
