use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("content directory not found: {}", .0.display())]
    ContentDirMissing(PathBuf),

    #[error("content document not found: {}", .0.display())]
    DocumentMissing(PathBuf),

    #[error("skill category {index} is out of range (1-{count})")]
    CategoryOutOfRange { index: usize, count: usize },

    #[error("backup snapshot already exists: {}", .0.display())]
    SnapshotExists(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
