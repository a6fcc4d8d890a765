//! File input for the command line.

use super::CliError;
use std::{fs, path::Path};

/// Read a whole file as UTF-8 text.
///
/// A missing or unreadable file is an error for the caller to report; it is
/// never classified.
pub fn read_text(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes).map_err(|reason| CliError::InvalidUtf8 {
        path: path.to_path_buf(),
        reason,
    })
}

#[cfg(feature = "simd")]
fn decode(bytes: &[u8]) -> Result<String, String> {
    simdutf8::compat::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| e.to_string())
}

#[cfg(not(feature = "simd"))]
fn decode(bytes: &[u8]) -> Result<String, String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_utf8_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("es.txt");
        fs::write(&path, "Mañana será otro día.\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "Mañana será otro día.\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_text(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err, CliError::FileRead { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"ma\xf1ana").unwrap();
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, CliError::InvalidUtf8 { .. }));
        assert!(err.to_string().contains("latin1.txt"));
    }

    #[test]
    fn empty_file_is_empty_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::File::create(&path).unwrap();
        assert_eq!(read_text(&path).unwrap(), "");
    }
}
