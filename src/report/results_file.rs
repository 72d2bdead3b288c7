use crate::core::types::BenchmarkRecord;
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::{
    fs::{self, OpenOptions},
    io::AsyncWriteExt,
};

static LOG_TARGET: &str = "student_bench::results_file";

#[derive(Error, Debug)]
pub enum ResultsFileError {
    #[error("Results file does not exist at {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to serialize benchmark results")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize benchmark results: {message}")]
    DeserializationError { message: String },

    #[error("IO operation failed on {path:?}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create temporary file for atomic write")]
    AtomicWriteError {
        #[source]
        source: std::io::Error,
    },
}

/// Reads and writes benchmark records as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct ResultsFile {
    file_path: PathBuf,
}

impl ResultsFile {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn _ensure_parent_exists(&self) -> Result<(), ResultsFileError> {
        match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ResultsFileError::IoError {
                        path: parent.to_path_buf(),
                        source: e,
                    })
            }
            _ => Ok(()),
        }
    }

    /// Write `record` via a temporary file and rename, so a failed write never
    /// leaves a truncated results file behind.
    pub async fn save(&self, record: &BenchmarkRecord) -> Result<(), ResultsFileError> {
        self._ensure_parent_exists().await?;

        debug!(target: LOG_TARGET, "Writing results file to {:?}", self.file_path);

        let mut contents = serde_json::to_vec_pretty(record)?;
        contents.push(b'\n');

        let temp_path = self.file_path.with_extension("tmp");

        {
            let mut temp_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .await
                .map_err(|e| ResultsFileError::AtomicWriteError { source: e })?;

            temp_file
                .write_all(&contents)
                .await
                .map_err(|e| ResultsFileError::AtomicWriteError { source: e })?;

            temp_file
                .flush()
                .await
                .map_err(|e| ResultsFileError::AtomicWriteError { source: e })?;
        }

        fs::rename(&temp_path, &self.file_path)
            .await
            .map_err(|e| ResultsFileError::AtomicWriteError { source: e })?;

        info!(target: LOG_TARGET, "💾 Results saved to {}", self.file_path.display());
        Ok(())
    }

    pub async fn load(&self) -> Result<BenchmarkRecord, ResultsFileError> {
        debug!(target: LOG_TARGET, "Loading results file from {:?}", self.file_path);

        if !self.file_path.exists() {
            return Err(ResultsFileError::FileNotFound {
                path: self.file_path.clone(),
            });
        }

        let contents =
            fs::read_to_string(&self.file_path)
                .await
                .map_err(|e| ResultsFileError::IoError {
                    path: self.file_path.clone(),
                    source: e,
                })?;

        serde_json::from_str(&contents).map_err(|e| ResultsFileError::DeserializationError {
            message: e.to_string(),
        })
    }
}
