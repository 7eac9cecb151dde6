use rust_xlsxwriter::Workbook;

use sheetmap_core::{DownloadSink, EXPORT_FILENAME, Session};
use sheetmap_model::CellValue;

fn workbook_bytes(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            sheet
                .write_string(row_index as u32, col_index as u16, *cell)
                .expect("write cell");
        }
    }
    workbook.save_to_buffer().expect("save workbook")
}

struct CapturingSink {
    delivered: Vec<(String, Vec<u8>)>,
}

impl DownloadSink for CapturingSink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
        self.delivered.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

#[test]
fn loading_a_new_table_clears_the_mapping() {
    let mut session = Session::new();
    session
        .load_bytes("first.xlsx", &workbook_bytes(&[&["Name"], &["Alice"]]))
        .expect("load first");
    session.map_column("Name", "id");
    assert_eq!(session.mapping().len(), 1);

    session
        .load_bytes("second.xlsx", &workbook_bytes(&[&["City"], &["Oslo"]]))
        .expect("load second");
    assert!(session.mapping().is_empty());
    assert_eq!(session.table().expect("table").header(), ["City"]);
}

#[test]
fn failed_load_leaves_previous_table_and_mapping_untouched() {
    let mut session = Session::new();
    session
        .load_bytes("first.xlsx", &workbook_bytes(&[&["Name"], &["Alice"]]))
        .expect("load first");
    session.map_column("Name", "id");

    let result = session.load_bytes("broken.xlsx", b"not a zip archive");
    assert!(result.is_err());
    assert_eq!(session.table().expect("table").header(), ["Name"]);
    assert_eq!(session.mapping().target_for("Name"), Some("id"));
}

#[test]
fn display_order_follows_sort_requests_without_touching_rows() {
    let mut session = Session::new();
    session
        .load_bytes(
            "data.xlsx",
            &workbook_bytes(&[&["Name"], &["Carol"], &["Alice"], &["Bob"]]),
        )
        .expect("load");

    assert_eq!(session.display_order(), vec![0, 1, 2]);
    session.request_sort("Name");
    assert_eq!(session.display_order(), vec![1, 2, 0]);
    session.request_sort("Name");
    assert_eq!(session.display_order(), vec![0, 2, 1]);

    // Canonical order is untouched.
    let table = session.table().expect("table");
    assert_eq!(table.value(0, "Name"), Some(&CellValue::from("Carol")));
}

#[test]
fn sort_state_resets_when_a_new_table_is_installed() {
    let mut session = Session::new();
    session
        .load_bytes("data.xlsx", &workbook_bytes(&[&["Name"], &["B"], &["A"]]))
        .expect("load");
    session.request_sort("Name");
    assert!(session.sort_state().key().is_some());

    session
        .load_bytes("other.xlsx", &workbook_bytes(&[&["Name"], &["X"]]))
        .expect("reload");
    assert!(session.sort_state().key().is_none());
}

#[test]
fn export_uses_canonical_order_and_the_fixed_filename() {
    let mut session = Session::new();
    session
        .load_bytes(
            "data.xlsx",
            &workbook_bytes(&[&["Name"], &["Carol"], &["Alice"]]),
        )
        .expect("load");
    session.map_column("Name", "id");
    // Display sorting must not leak into the export.
    session.request_sort("Name");

    let mut sink = CapturingSink { delivered: vec![] };
    session.export_to(&mut sink).expect("export");

    let (filename, bytes) = &sink.delivered[0];
    assert_eq!(filename, EXPORT_FILENAME);
    let parsed: serde_json::Value =
        serde_json::from_slice(bytes).expect("parse exported json");
    assert_eq!(
        parsed,
        serde_json::json!([{ "id": "Carol" }, { "id": "Alice" }])
    );
}

#[test]
fn export_without_a_table_is_an_error() {
    let session = Session::new();
    assert!(session.export_json().is_err());
}
