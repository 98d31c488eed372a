//! Persists the generated text.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::WriteError;

/// Write `text` to `path`, replacing any existing file.
///
/// Missing parent directories are created. Returns the number of bytes
/// written. The write is not atomic: on failure the file may hold a prefix
/// of `text`.
pub fn write(path: &Path, text: &str) -> Result<usize, WriteError> {
    let create_err = |source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    };
    let write_err = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(create_err)?;
    }

    let file = File::create(path).map_err(create_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(
        path = %path.display(),
        bytes = text.len(),
        "Wrote generated file."
    );
    Ok(text.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sdk.go");

        let bytes = write(&path, "package main\n").unwrap();
        assert_eq!(bytes, 13);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package main\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sdk.go");
        fs::write(&path, "a much longer previous generation\n").unwrap();

        write(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_into_a_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = write(dir.path(), "x").unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
