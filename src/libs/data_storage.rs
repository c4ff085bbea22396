use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves paths inside the user's home directory.
///
/// The database lives directly in the home directory under a fixed filename;
/// that location is part of the persisted-state contract.
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("USERPROFILE").unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()),
        };

        Self {
            base_path: Path::new(&base_path).to_path_buf(),
        }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
