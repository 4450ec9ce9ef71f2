//! Recursive directory listing filtered by file-name suffix.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while walking a directory tree.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The root path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory in the tree could not be read.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => WalkError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => WalkError::PermissionDenied(path.to_path_buf()),
            _ => WalkError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// List every file under `root` whose name ends with `extension`.
///
/// The match is a case-sensitive suffix match on the file name, so
/// `".png"` matches `cat.png` but not `cat.PNG`. Directories are visited
/// top-down; within a directory, entries are sorted by name and files are
/// listed before the contents of subdirectories. A symlink is listed only
/// when it resolves to a regular file; symlinked directories are not
/// followed.
///
/// # Errors
///
/// Walking stops at the first directory that cannot be read.
pub fn list_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, WalkError> {
    let meta = fs::metadata(root).map_err(|e| WalkError::from_io(root, e))?;
    if !meta.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    walk_dir(root, extension.as_bytes(), &mut files)?;

    debug!(
        root = %root.display(),
        extension,
        count = files.len(),
        "Listed files"
    );
    Ok(files)
}

fn walk_dir(dir: &Path, suffix: &[u8], files: &mut Vec<PathBuf>) -> Result<(), WalkError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| WalkError::from_io(dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| WalkError::from_io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| WalkError::from_io(&path, e))?;

        if file_type.is_dir() {
            subdirs.push(path);
            continue;
        }
        if !entry.file_name().as_encoded_bytes().ends_with(suffix) {
            continue;
        }

        let is_file = if file_type.is_symlink() {
            // Dangling links resolve to nothing and are skipped
            fs::metadata(&path).is_ok_and(|meta| meta.is_file())
        } else {
            file_type.is_file()
        };
        if is_file {
            files.push(path);
        }
    }

    for subdir in subdirs {
        walk_dir(&subdir, suffix, files)?;
    }
    Ok(())
}
