// Asset loading functionality

use super::AssetError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Loads data files relative to a base directory
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Full path for an asset name. Absolute names are used as-is.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).is_file()
    }

    /// Load the raw bytes of an asset
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(name);
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }
        Ok(std::fs::read(&path)?)
    }

    /// Load and deserialize a JSON asset
    pub fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, AssetError> {
        let bytes = self.load_bytes(name)?;
        serde_json::from_slice(&bytes).map_err(|source| AssetError::Parse {
            name: name.to_string(),
            source,
        })
    }
}
