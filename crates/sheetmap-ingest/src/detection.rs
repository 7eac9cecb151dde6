//! File-type detection guarding the decoder.
//!
//! Rejection happens here, before any workbook parsing is attempted, with a
//! single user-visible message for every non-matching input.

use std::path::Path;

use crate::error::{DecodeError, Result};

/// The only accepted container extension.
pub const XLSX_EXTENSION: &str = "xlsx";

/// XLSX containers are ZIP archives; this is the local-file-header magic.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4b, 0x03, 0x04];

/// Reject any path that does not carry the `.xlsx` extension
/// (case-insensitive).
pub fn check_file_type(path: &Path) -> Result<()> {
    let matches = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(XLSX_EXTENSION));
    if matches {
        Ok(())
    } else {
        Err(DecodeError::InvalidFileType)
    }
}

/// Reject byte buffers that cannot be an XLSX container at all.
pub fn check_signature(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(&ZIP_MAGIC) {
        Ok(())
    } else {
        Err(DecodeError::InvalidFileType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_xlsx_extension_case_insensitively() {
        assert!(check_file_type(Path::new("data.xlsx")).is_ok());
        assert!(check_file_type(Path::new("DATA.XLSX")).is_ok());
    }

    #[test]
    fn rejects_other_extensions_and_missing_extensions() {
        assert!(matches!(
            check_file_type(Path::new("data.csv")),
            Err(DecodeError::InvalidFileType)
        ));
        assert!(matches!(
            check_file_type(Path::new("data")),
            Err(DecodeError::InvalidFileType)
        ));
    }

    #[test]
    fn rejects_non_zip_bytes() {
        assert!(check_signature(b"PK\x03\x04rest-of-archive").is_ok());
        assert!(matches!(
            check_signature(b"<html></html>"),
            Err(DecodeError::InvalidFileType)
        ));
        assert!(matches!(
            check_signature(b""),
            Err(DecodeError::InvalidFileType)
        ));
    }
}
