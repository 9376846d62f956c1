use std::path::{Path, PathBuf};

/// File name of the single artifact slot
const ARTIFACT_FILE_NAME: &str = "speech.mp3";

/// Fixed-slot store for the most recent synthesis output
///
/// One path, overwritten on every successful call. Concurrent writers race
/// on the slot; last writer wins.
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    /// Create the store, creating the directory if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new(dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;

        Ok(Self {
            path: dir.join(ARTIFACT_FILE_NAME),
        })
    }

    /// Overwrite the slot with the latest audio
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn persist(&self, audio: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(&self.path, audio).await
    }

    /// Path of the artifact slot
    pub fn path(&self) -> &Path {
        &self.path
    }
}
