//! Projection of a table through a column mapping.
//!
//! For each record, every `(source, target)` mapping entry is applied in
//! insertion order: `result[target] = record[source]`. Table fields without a
//! mapping entry are dropped from the output on purpose; an absent source
//! field projects to an empty (JSON null) value.

use serde::ser::{Serialize, SerializeMap as _, Serializer};
use tracing::debug;

use sheetmap_model::{CellValue, ColumnMapping, Table};

/// One output record: target-name keys in mapping insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRecord {
    fields: Vec<(String, CellValue)>,
}

impl ProjectedRecord {
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields
            .iter()
            .map(|(target, value)| (target.as_str(), value))
    }

    pub fn get(&self, target: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == target)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ProjectedRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (target, value) in &self.fields {
            map.serialize_entry(target, value)?;
        }
        map.end()
    }
}

/// Apply `mapping` to every record of `table`, in canonical row order.
///
/// Two mapping entries may share a target; the later-inserted entry's value
/// wins while the key keeps the earlier entry's position. An empty mapping
/// yields one empty object per record, not an error.
pub fn project(table: &Table, mapping: &ColumnMapping) -> Vec<ProjectedRecord> {
    // Resolve source names once; per-record lookup would re-scan the header.
    let columns: Vec<(Option<usize>, &str)> = mapping
        .iter()
        .map(|(source, target)| (table.field_index(source), target))
        .collect();

    let records = table
        .rows()
        .iter()
        .map(|row| {
            let mut fields: Vec<(String, CellValue)> = Vec::with_capacity(columns.len());
            for (column, target) in &columns {
                let value = column
                    .and_then(|index| row.get(index))
                    .cloned()
                    .unwrap_or(CellValue::Empty);
                match fields.iter_mut().find(|(key, _)| key.as_str() == *target) {
                    Some(slot) => slot.1 = value,
                    None => fields.push(((*target).to_string(), value)),
                }
            }
            ProjectedRecord { fields }
        })
        .collect::<Vec<_>>();

    debug!(
        records = records.len(),
        mapped_fields = mapping.len(),
        "projected table through mapping"
    );
    records
}

/// Serialize projected records as a pretty-printed (two-space indented)
/// top-level JSON array.
pub fn to_json(records: &[ProjectedRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Projection straight to JSON text, the export path's one-call form.
pub fn project_to_json(table: &Table, mapping: &ColumnMapping) -> serde_json::Result<String> {
    to_json(&project(table, mapping))
}
