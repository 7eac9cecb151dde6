use thiserror::Error;

/// Everything that can go wrong between a selected file and an installed
/// table. All variants are recoverable at the ingestion boundary: the caller
/// surfaces one message and keeps whatever table it already had.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Wrong extension or container signature; the bytes never reach the
    /// workbook parser.
    #[error("not a valid XLSX spreadsheet")]
    InvalidFileType,
    /// The container parsed but declared no sheets at all.
    #[error("workbook contains no sheets")]
    NoSheets,
    /// The first sheet has no rows, so there is no header to read.
    #[error("first sheet is empty")]
    EmptySheet,
    /// The container bytes could not be parsed as a workbook.
    #[error("could not read workbook: {0}")]
    Corrupt(#[from] calamine::XlsxError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
