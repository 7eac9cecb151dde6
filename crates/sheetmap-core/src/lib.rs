#![deny(unsafe_code)]

pub mod session;

pub use session::{DownloadSink, EXPORT_FILENAME, ExportPayload, Session};
