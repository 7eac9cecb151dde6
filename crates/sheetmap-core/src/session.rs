//! A single user session over one decoded table.
//!
//! The session is the only owner of mutable state: the current [`Table`],
//! the [`ColumnMapping`] being edited, and the display-only [`SortState`].
//! Every transformation (decode, projection, sort) is a pure function the
//! session calls with that state; nothing else mutates it.

use std::path::Path;

use anyhow::Context as _;
use tracing::info;

use sheetmap_ingest::{DecodeError, check_file_type, check_signature, decode, decode_file};
use sheetmap_map::project_to_json;
use sheetmap_model::{ColumnMapping, SortState, Table};
use sheetmap_transform::sort_rows;

/// Fixed name for the exported JSON document.
pub const EXPORT_FILENAME: &str = "mapped_data.json";

/// The bytes to hand to the download collaborator, plus the suggested name.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// The download collaborator seam: something that can take a byte buffer and
/// a suggested filename off the session's hands.
pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> std::io::Result<()>;
}

#[derive(Debug, Default)]
pub struct Session {
    table: Option<Table>,
    mapping: ColumnMapping,
    sort: SortState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and install the result.
    ///
    /// Installation is atomic: decoding runs to completion first, so on any
    /// failure the previously installed table and its mapping are untouched
    /// and the error is returned for the caller to surface. Loading twice is
    /// deterministic, the later successful load wins.
    pub fn load_file(&mut self, path: &Path) -> Result<&Table, DecodeError> {
        let table = decode_file(path)?;
        Ok(self.install(table))
    }

    /// Decode an in-memory payload, using `name` for file-type detection.
    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<&Table, DecodeError> {
        check_file_type(Path::new(name))?;
        check_signature(bytes)?;
        let table = decode(bytes)?;
        Ok(self.install(table))
    }

    fn install(&mut self, table: Table) -> &Table {
        // A mapping is only meaningful against the header it was built for.
        self.mapping.clear();
        self.sort.reset();
        info!(
            rows = table.row_count(),
            columns = table.width(),
            "installed new table"
        );
        self.table.insert(table)
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Record one source -> target rename (insert or overwrite).
    pub fn map_column(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.mapping.set(source, target);
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// One header click on `field`; see [`SortState::request`].
    pub fn request_sort(&mut self, field: &str) {
        self.sort.request(field);
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Row indices in current display order. Natural order when no table is
    /// loaded, no sort was requested, or the sort field is gone.
    pub fn display_order(&self) -> Vec<usize> {
        self.table
            .as_ref()
            .map(|table| sort_rows(table, self.sort.key()))
            .unwrap_or_default()
    }

    /// Project the table through a snapshot of the current mapping and
    /// serialize it, always over canonical row order.
    pub fn export_json(&self) -> anyhow::Result<ExportPayload> {
        let table = self.table.as_ref().context("no table loaded")?;
        let mapping = self.mapping.snapshot();
        let json = project_to_json(table, &mapping).context("serialize mapped records")?;
        Ok(ExportPayload {
            filename: EXPORT_FILENAME,
            bytes: json.into_bytes(),
        })
    }

    /// Export and hand the payload to the download collaborator.
    pub fn export_to(&self, sink: &mut dyn DownloadSink) -> anyhow::Result<()> {
        let payload = self.export_json()?;
        sink.deliver(payload.filename, &payload.bytes)
            .with_context(|| format!("deliver {EXPORT_FILENAME}"))?;
        Ok(())
    }
}
