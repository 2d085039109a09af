//! Path-type queries backed by a single filesystem metadata read.
//!
//! Both checks use lstat semantics (`symlink_metadata`), so a symlink is
//! reported as neither a regular file nor a directory. Any stat failure is
//! absorbed into a `false` answer; callers never see an error for a path
//! that merely does not exist or cannot be read.

use std::fs;

/// Returns true iff `path` exists and is a regular file.
pub fn is_a_file(path: &str) -> bool {
    match fs::symlink_metadata(path) {
        Ok(metadata) => metadata.file_type().is_file(),
        Err(e) => {
            log::warn!("isAFile: could not stat '{}': {}", path, e);
            false
        }
    }
}

/// Returns true iff `path` exists and is a directory.
pub fn is_directory(path: &str) -> bool {
    match fs::symlink_metadata(path) {
        Ok(metadata) => metadata.file_type().is_dir(),
        Err(e) => {
            log::warn!("isDirectory: could not stat '{}': {}", path, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn regular_file_is_a_file_and_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("book.epub");
        File::create(&file_path).unwrap();
        let file_path = file_path.to_string_lossy();

        assert!(is_a_file(&file_path));
        assert!(!is_directory(&file_path));
    }

    #[test]
    fn directory_is_a_directory_and_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_string_lossy();

        assert!(is_directory(&dir_path));
        assert!(!is_a_file(&dir_path));
    }

    #[test]
    fn nonexistent_path_is_neither() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist").to_string_lossy().into_owned();
        drop(dir);

        assert!(!is_a_file(&missing));
        assert!(!is_directory(&missing));
    }
}
