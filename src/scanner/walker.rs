use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::models::EntryKind;

/// One classified, non-directory entry discovered under the scan root.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Lazy, depth-first enumerator for a directory subtree.
///
/// Symbolic links are never followed: a link to a directory is yielded as a
/// [`EntryKind::SymbolicLink`] entry and not descended into. Directories are
/// traversal structure only and are not yielded at all.
pub struct DirectoryWalker {
    root: PathBuf,
}

impl DirectoryWalker {
    pub fn new(root: &Path) -> Self {
        DirectoryWalker {
            root: root.to_path_buf(),
        }
    }

    /// Iterate over every non-directory entry under the root.
    ///
    /// An unlistable subdirectory produces one `Err` item; entries in
    /// sibling subtrees continue to be yielded afterwards.
    pub fn entries(&self) -> impl Iterator<Item = Result<ScanEntry, walkdir::Error>> {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|item| match item {
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => Some(Ok(classify(entry))),
                Err(err) => Some(Err(err)),
            })
    }
}

fn classify(entry: DirEntry) -> ScanEntry {
    let file_type = entry.file_type();
    let kind = if file_type.is_symlink() {
        EntryKind::SymbolicLink
    } else if file_type.is_file() {
        EntryKind::RegularFile
    } else {
        EntryKind::Other
    };

    ScanEntry {
        path: entry.into_path(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect_entries(root: &Path) -> Vec<ScanEntry> {
        DirectoryWalker::new(root)
            .entries()
            .map(|item| item.unwrap())
            .collect()
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(collect_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_regular_files_and_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("b.txt"), "b").unwrap();

        let entries = collect_entries(dir.path());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.kind == EntryKind::RegularFile));

        // The subdirectory itself is never yielded
        assert!(entries.iter().all(|e| e.path != sub));
        assert!(entries.iter().any(|e| e.path == sub.join("b.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_classified_not_followed() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a.txt");
        fs::write(&target, "hello").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let entries = collect_entries(dir.path());
        assert_eq!(entries.len(), 2);

        let link_entry = entries.iter().find(|e| e.path == link).unwrap();
        assert_eq!(link_entry.kind, EntryKind::SymbolicLink);

        let file_entry = entries.iter().find(|e| e.path == target).unwrap();
        assert_eq!(file_entry.kind, EntryKind::RegularFile);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_not_descended() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("inner.txt"), "x").unwrap();
        let link = dir.path().join("dirlink");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let entries = collect_entries(dir.path());

        // inner.txt appears once (through the real directory), the link
        // itself appears as a symlink entry, and nothing under the link path
        // is visited.
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .any(|e| e.path == real.join("inner.txt") && e.kind == EntryKind::RegularFile));
        assert!(entries
            .iter()
            .any(|e| e.path == link && e.kind == EntryKind::SymbolicLink));
        assert!(!entries.iter().any(|e| e.path.starts_with(&link) && e.path != link));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_surfaces_one_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("visible.txt"), "v").unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.txt"), "h").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged environments can list the directory anyway
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let items: Vec<_> = DirectoryWalker::new(dir.path()).entries().collect();
        let errors = items.iter().filter(|i| i.is_err()).count();
        let entries: Vec<_> = items.into_iter().filter_map(Result::ok).collect();

        assert_eq!(errors, 1);
        assert!(entries.iter().any(|e| e.path == dir.path().join("visible.txt")));
        assert!(!entries.iter().any(|e| e.path == locked.join("hidden.txt")));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
