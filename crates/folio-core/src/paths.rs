use crate::error::{FolioError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Document constants
// ---------------------------------------------------------------------------

pub const PROFILE_FILE: &str = "profile.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const SKILLS_FILE: &str = "skills.json";

pub const JSON_EXT: &str = "json";

/// The documents the interactive session edits. Startup validation requires
/// all of them to exist; the tool never creates one from scratch.
pub const REQUIRED_DOCUMENTS: [&str; 4] =
    [PROFILE_FILE, PROJECTS_FILE, EXPERIENCE_FILE, SKILLS_FILE];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn profile_path(content_dir: &Path) -> PathBuf {
    content_dir.join(PROFILE_FILE)
}

pub fn projects_path(content_dir: &Path) -> PathBuf {
    content_dir.join(PROJECTS_FILE)
}

pub fn experience_path(content_dir: &Path) -> PathBuf {
    content_dir.join(EXPERIENCE_FILE)
}

pub fn skills_path(content_dir: &Path) -> PathBuf {
    content_dir.join(SKILLS_FILE)
}

/// Verify the content directory and every required document exist.
pub fn validate_content_dir(content_dir: &Path) -> Result<()> {
    if !content_dir.is_dir() {
        return Err(FolioError::ContentDirMissing(content_dir.to_path_buf()));
    }
    for name in REQUIRED_DOCUMENTS {
        let path = content_dir.join(name);
        if !path.is_file() {
            return Err(FolioError::DocumentMissing(path));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_helpers() {
        let dir = Path::new("/tmp/site/src/data");
        assert_eq!(
            profile_path(dir),
            PathBuf::from("/tmp/site/src/data/profile.json")
        );
        assert_eq!(
            skills_path(dir),
            PathBuf::from("/tmp/site/src/data/skills.json")
        );
    }

    #[test]
    fn validate_rejects_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            validate_content_dir(&missing),
            Err(FolioError::ContentDirMissing(_))
        ));
    }

    #[test]
    fn validate_rejects_missing_document() {
        let dir = TempDir::new().unwrap();
        for name in [PROFILE_FILE, PROJECTS_FILE, EXPERIENCE_FILE] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        // skills.json absent
        assert!(matches!(
            validate_content_dir(dir.path()),
            Err(FolioError::DocumentMissing(_))
        ));
    }

    #[test]
    fn validate_accepts_complete_dir() {
        let dir = TempDir::new().unwrap();
        for name in REQUIRED_DOCUMENTS {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }
        validate_content_dir(dir.path()).unwrap();
    }
}
