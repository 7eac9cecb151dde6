//! Terminal rendering of tables and mapping summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement};

use sheetmap_model::{CellValue, ColumnMapping, Table};

/// Render the table's header and rows, in the given display order.
pub fn render_table(table: &Table, order: &[usize]) -> comfy_table::Table {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(table.header().iter().map(|name| header_cell(name)));
    let rows = table.rows();
    for &index in order {
        out.add_row(rows[index].iter().map(CellValue::render));
    }
    out
}

/// Render the current mapping as a source -> target summary list.
pub fn render_mapping(mapping: &ColumnMapping) -> comfy_table::Table {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    out.set_header(vec![header_cell("Source"), header_cell("Target")]);
    for (source, target) in mapping.iter() {
        out.add_row(vec![source, target]);
    }
    out
}

fn header_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}
