use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, info};

use crate::common::error::HoundgenError;
use crate::common::result::{HoundgenResult, ResultExt};
use crate::domain::entities::generator_settings::BACKUP_SUFFIX;
use crate::domain::entities::index_config::IndexConfig;

const TEMP_SUFFIX: &str = ".tmp";

/// Result of writing a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Where the config was written
    pub path: PathBuf,

    /// Where the previous config was moved, if rotation happened
    pub backup_path: Option<PathBuf>,
}

/// Reads and writes the indexer config file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Target config path
    path: PathBuf,

    /// Whether to move an existing file to `<path>.OLD` before writing
    rotate: bool,
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rotate: true,
        }
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        with_suffix(&self.path, BACKUP_SUFFIX)
    }

    /// Serialize the config and replace the file at the target path
    ///
    /// The document is rendered and written to a sibling temporary file
    /// before anything at the target path changes. Only then is the old
    /// config rotated and the temporary file renamed into place.
    pub async fn write(&self, config: &IndexConfig) -> HoundgenResult<WriteOutcome> {
        let document = config.to_pretty_json()?;

        self.ensure_parent_dir().await?;

        let temp_path = with_suffix(&self.path, TEMP_SUFFIX);
        async_fs::write(&temp_path, document.as_bytes())
            .await
            .with_filesystem_error("Failed to write temporary config", Some(temp_path.clone()))?;

        let backup_path = if self.rotate {
            match self.rotate_existing().await {
                Ok(backup_path) => backup_path,
                Err(e) => {
                    let _ = async_fs::remove_file(&temp_path).await;
                    return Err(e);
                }
            }
        } else {
            None
        };

        if let Err(e) = async_fs::rename(&temp_path, &self.path).await {
            let _ = async_fs::remove_file(&temp_path).await;
            return Err(HoundgenError::filesystem_error_with_source(
                "Failed to move config into place",
                Some(self.path.clone()),
                e,
            ));
        }

        info!(
            path = %self.path.display(),
            bytes = document.len(),
            repos = config.repos.len(),
            "Wrote indexer config"
        );

        Ok(WriteOutcome {
            path: self.path.clone(),
            backup_path,
        })
    }

    /// Rename an existing config to `<path>.OLD`, replacing any prior backup
    pub async fn rotate_existing(&self) -> HoundgenResult<Option<PathBuf>> {
        let is_file = match async_fs::metadata(&self.path).await {
            Ok(metadata) => metadata.is_file(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                return Err(HoundgenError::filesystem_error_with_source(
                    "Failed to inspect existing config",
                    Some(self.path.clone()),
                    e,
                ))
            }
        };

        if !is_file {
            debug!(path = %self.path.display(), "No existing config to rotate");
            return Ok(None);
        }

        let backup_path = self.backup_path();
        async_fs::rename(&self.path, &backup_path)
            .await
            .with_filesystem_error("Failed to rotate existing config", Some(backup_path.clone()))?;

        info!(
            from = %self.path.display(),
            to = %backup_path.display(),
            "Rotated previous config"
        );
        Ok(Some(backup_path))
    }

    async fn ensure_parent_dir(&self) -> HoundgenResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                async_fs::create_dir_all(parent).await.with_filesystem_error(
                    "Failed to create config directory",
                    Some(parent.to_path_buf()),
                )
            }
            _ => Ok(()),
        }
    }
}
