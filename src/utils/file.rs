use std::fs;
use std::path::Path;

use crate::ini::{IniError, Result};

/// Read a whole file into a string
///
/// An empty path is rejected before touching the file system. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD instead of failing the read.
pub fn file_get(path: &Path) -> Result<String> {
    if path.as_os_str().is_empty() {
        return Err(IniError::EmptyPath);
    }

    let bytes = fs::read(path).map_err(|source| IniError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
