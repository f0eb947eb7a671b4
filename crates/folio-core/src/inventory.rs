use crate::error::{FolioError, Result};
use crate::paths;
use std::path::Path;

/// Name and size of one content document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub name: String,
    pub size_bytes: u64,
}

impl DocumentInfo {
    /// Size in kibibytes, the unit the view-data listing prints.
    pub fn size_kib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// List every JSON document in the content directory, sorted by name.
/// Read-only; never mutates anything.
pub fn list_documents(content_dir: &Path) -> Result<Vec<DocumentInfo>> {
    if !content_dir.is_dir() {
        return Err(FolioError::ContentDirMissing(content_dir.to_path_buf()));
    }
    let mut docs = Vec::new();
    for entry in std::fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(paths::JSON_EXT) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let meta = entry.metadata()?;
        docs.push(DocumentInfo {
            name: name.to_string(),
            size_bytes: meta.len(),
        });
    }
    docs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(docs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
