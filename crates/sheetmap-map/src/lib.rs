#![deny(unsafe_code)]

pub mod projector;

pub use projector::{ProjectedRecord, project, project_to_json, to_json};
