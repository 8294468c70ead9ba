//! JSON file document adapter.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::document::{Document, StoredValue};
use crate::error::Result;
use crate::persistence::DocumentAdapter;

/// Persists the document as pretty-printed JSON at `path`.
///
/// Writes go to a sibling `.tmp` file that is then renamed over the target,
/// so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<V: StoredValue> DocumentAdapter<V> for JsonFileAdapter {
    async fn read(&self) -> Result<Option<Document<V>>> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No document on disk yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn write(&self, document: &Document<V>) -> Result<()> {
        let data = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        let written = match fs::write(&temp, data).await {
            Ok(()) => fs::rename(&temp, &self.path).await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            // The write error wins over a failed cleanup.
            if let Err(cleanup) = fs::remove_file(&temp).await {
                debug!(path = %temp.display(), error = %cleanup, "Temp file not removed");
            }
            return Err(err.into());
        }

        debug!(path = %self.path.display(), "Document written");
        Ok(())
    }
}
