//! The canonical decoded table.

use crate::CellValue;

/// An ordered sequence of records sharing one header.
///
/// Rows are stored positionally against the header, so a record can never
/// carry a field the header does not declare. Row order is the canonical
/// order every export runs over; display sorting derives a separate
/// permutation and never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with [`CellValue::Empty`] and
    /// discarding values past the header width.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.truncate(self.header.len());
        row.resize(self.header.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Column index for a field name.
    ///
    /// Duplicate header names resolve to the last matching column, matching
    /// how building a keyed record from left to right would overwrite the
    /// earlier duplicate.
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.header.iter().rposition(|name| name == field)
    }

    /// Cell at (row, field), or None when the field is not in the header.
    pub fn value(&self, row: usize, field: &str) -> Option<&CellValue> {
        let column = self.field_index(field)?;
        self.rows.get(row).and_then(|cells| cells.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn push_row_pads_and_truncates_to_header_width() {
        let mut table = Table::new(header(&["A", "B", "C"]));
        table.push_row(vec![CellValue::from("x")]);
        table.push_row(vec![
            CellValue::from(1_i64),
            CellValue::from(2_i64),
            CellValue::from(3_i64),
            CellValue::from(4_i64),
        ]);

        assert_eq!(table.rows()[0].len(), 3);
        assert_eq!(table.rows()[0][1], CellValue::Empty);
        assert_eq!(table.rows()[0][2], CellValue::Empty);
        assert_eq!(table.rows()[1].len(), 3);
        assert_eq!(table.rows()[1][2], CellValue::from(3_i64));
    }

    #[test]
    fn duplicate_header_resolves_to_last_column() {
        let mut table = Table::new(header(&["Name", "Age", "Name"]));
        table.push_row(vec![
            CellValue::from("first"),
            CellValue::from(30_i64),
            CellValue::from("second"),
        ]);

        assert_eq!(table.value(0, "Name"), Some(&CellValue::from("second")));
        assert_eq!(table.value(0, "Age"), Some(&CellValue::from(30_i64)));
    }

    #[test]
    fn unknown_field_has_no_index() {
        let table = Table::new(header(&["A"]));
        assert_eq!(table.field_index("B"), None);
        assert_eq!(table.value(0, "B"), None);
    }
}
