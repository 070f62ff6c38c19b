//! Reading a whole document from disk.
//!
//! The tokenizer only ever sees a finished byte slice. This module is the
//! boundary that turns a path into those bytes, or into a [`FileError`]
//! saying why it couldn't.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a document could not be read.
#[derive(Debug, Error)]
pub enum FileError {
    /// Nothing exists at the given path.
    #[error("file not found in the given path: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The path exists but names a directory.
    #[error("given path points to a directory instead of a file: {}", path.display())]
    IsDirectory {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The file exists but the process lacks read permission.
    #[error("file does not have read permission: {}", path.display())]
    NotReadable {
        /// The path that was opened.
        path: PathBuf,
    },

    /// Any other failure while opening or reading.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// The path this error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::IsDirectory { path }
            | Self::NotReadable { path }
            | Self::Read { path, .. } => path,
        }
    }
}

/// Read the full contents of the regular file at `path`.
///
/// # Errors
///
/// Returns [`FileError::NotFound`] if nothing exists at `path`,
/// [`FileError::IsDirectory`] if it is a directory,
/// [`FileError::NotReadable`] if opening it is denied, and
/// [`FileError::Read`] for any other I/O failure.
pub fn fetch_file_contents(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    let mut file = open_file(path)?;

    let mut bytes = Vec::new();
    let _ = file.read_to_end(&mut bytes).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes)
}

fn open_file(path: &Path) -> Result<File, FileError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FileError::NotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => FileError::NotReadable {
            path: path.to_path_buf(),
        },
        _ => FileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if metadata.is_dir() {
        return Err(FileError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::PermissionDenied {
            FileError::NotReadable {
                path: path.to_path_buf(),
            }
        } else {
            FileError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
