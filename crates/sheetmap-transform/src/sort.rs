//! Pure display sorting over a decoded table.
//!
//! The sorter derives a permutation of row indices; the table itself is never
//! reordered. Canonical row order stays intact for the export path.

use std::cmp::Ordering;

use tracing::debug;

use sheetmap_model::{CellValue, SortDirection, SortKey, Table};

/// Display order for `table` under `key`.
///
/// No key, or a key naming a field absent from the header, yields natural
/// (canonical) order. The comparator ranks empty cells after every non-empty
/// cell in BOTH directions: the empty check runs before the direction is
/// applied. Two empty cells compare equal and keep their relative order (the
/// sort is stable).
pub fn sort_rows(table: &Table, key: Option<&SortKey>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..table.row_count()).collect();
    let Some(key) = key else {
        return order;
    };
    let Some(column) = table.field_index(&key.field) else {
        debug!(field = %key.field, "sort field not in header, keeping natural order");
        return order;
    };

    let rows = table.rows();
    order.sort_by(|&left, &right| compare_cells(&rows[left][column], &rows[right][column], key.direction));
    order
}

fn compare_cells(left: &CellValue, right: &CellValue, direction: SortDirection) -> Ordering {
    // Empties rank last regardless of direction.
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let ordered = compare_present(left, right);
    match direction {
        SortDirection::Ascending => ordered,
        SortDirection::Descending => ordered.reverse(),
    }
}

/// Text sorts lexicographically; numbers numerically. Comparing a number
/// against text has no meaningful order (the numeric comparison is NaN) and
/// falls back to Equal, leaving the stable sort's tie-break in charge.
fn compare_present(left: &CellValue, right: &CellValue) -> Ordering {
    match (left, right) {
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Text(a), CellValue::Number(_)) => a.cmp(&right.render()),
        (CellValue::Number(a), CellValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
