#![deny(unsafe_code)]

pub mod decoder;
pub mod detection;
pub mod error;

pub use decoder::{decode, decode_file};
pub use detection::{check_file_type, check_signature};
pub use error::{DecodeError, Result};
