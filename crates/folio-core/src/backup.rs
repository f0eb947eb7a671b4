use crate::error::{FolioError, Result};
use crate::paths;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

/// Snapshot directory name for a given instant. Colons and periods in the
/// ISO-8601 timestamp are replaced so the name is safe on every filesystem.
pub fn snapshot_dir_name(at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("backup-{stamp}")
}

/// Copy every JSON document from `content_dir` into a new timestamped
/// subdirectory of `backup_root`. Returns the snapshot path.
///
/// The snapshot directory must not already exist; a name collision is a hard
/// error rather than a silent overwrite. The source directory is never
/// modified.
pub fn create_snapshot(content_dir: &Path, backup_root: &Path) -> Result<PathBuf> {
    create_snapshot_at(content_dir, backup_root, Utc::now())
}

pub fn create_snapshot_at(
    content_dir: &Path,
    backup_root: &Path,
    at: DateTime<Utc>,
) -> Result<PathBuf> {
    if !content_dir.is_dir() {
        return Err(FolioError::ContentDirMissing(content_dir.to_path_buf()));
    }
    std::fs::create_dir_all(backup_root)?;

    let snapshot = backup_root.join(snapshot_dir_name(at));
    if snapshot.exists() {
        return Err(FolioError::SnapshotExists(snapshot));
    }
    std::fs::create_dir(&snapshot)?;

    let mut copied = 0usize;
    for entry in std::fs::read_dir(content_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(paths::JSON_EXT) {
            continue;
        }
        if let Some(name) = path.file_name() {
            std::fs::copy(&path, snapshot.join(name))?;
            copied += 1;
        }
    }
    tracing::debug!(snapshot = %snapshot.display(), copied, "created backup snapshot");
    Ok(snapshot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn dir_name_has_no_colons_or_periods() {
        let name = snapshot_dir_name(fixed_instant());
        assert_eq!(name, "backup-2024-03-01T12-30-45-000Z");
        assert!(!name.contains(':'));
        assert!(!name.contains('.'));
    }

    #[test]
    fn snapshot_copies_json_documents_byte_identical() {
        let content = TempDir::new().unwrap();
        let backups = TempDir::new().unwrap();
        std::fs::write(content.path().join("profile.json"), r#"{"a": 1}"#).unwrap();
        std::fs::write(content.path().join("skills.json"), r#"{"b": 2}"#).unwrap();
        std::fs::write(content.path().join("README.md"), "not copied").unwrap();

        let snapshot = create_snapshot_at(content.path(), backups.path(), fixed_instant()).unwrap();

        assert_eq!(
            std::fs::read(snapshot.join("profile.json")).unwrap(),
            br#"{"a": 1}"#
        );
        assert_eq!(
            std::fs::read(snapshot.join("skills.json")).unwrap(),
            br#"{"b": 2}"#
        );
        assert!(!snapshot.join("README.md").exists());

        // Source untouched
        assert_eq!(
            std::fs::read_to_string(content.path().join("profile.json")).unwrap(),
            r#"{"a": 1}"#
        );
    }

    #[test]
    fn colliding_snapshot_name_is_an_error() {
        let content = TempDir::new().unwrap();
        let backups = TempDir::new().unwrap();
        std::fs::write(content.path().join("profile.json"), "{}").unwrap();

        create_snapshot_at(content.path(), backups.path(), fixed_instant()).unwrap();
        let err =
            create_snapshot_at(content.path(), backups.path(), fixed_instant()).unwrap_err();
        assert!(matches!(err, FolioError::SnapshotExists(_)));
    }

    #[test]
    fn missing_content_dir_is_an_error() {
        let backups = TempDir::new().unwrap();
        let missing = backups.path().join("gone");
        assert!(matches!(
            create_snapshot(&missing, backups.path()),
            Err(FolioError::ContentDirMissing(_))
        ));
    }
}
