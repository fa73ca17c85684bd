//! CSV export: fixed column order, extras handling, completeness gate.

use medscrape::export::write_dataset;
use medscrape::record::{COLUMN_ORDER, Record};
use tempfile::TempDir;

fn complete(name: &str) -> Record {
    Record {
        address: "12 MG Rd, Pune".into(),
        name: name.into(),
        specialty: "Cardiologist".into(),
        region: "Aundh".into(),
        phone: "02045678901".into(),
        email: "a@b.com".into(),
        ..Record::default()
    }
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn header_follows_the_fixed_column_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    let written = write_dataset(&[complete("Dr. A")], &path).unwrap();
    assert_eq!(written, 1);

    let rows = read_rows(&path);
    assert_eq!(rows[0], COLUMN_ORDER.to_vec());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "12 MG Rd, Pune");
    assert_eq!(rows[1][1], "Dr. A");
}

#[test]
fn incomplete_records_never_reach_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    let records = vec![
        complete("Dr. A"),
        Record {
            phone: String::new(),
            ..complete("Dr. B")
        },
        complete("Dr. C"),
    ];
    let written = write_dataset(&records, &path).unwrap();
    assert_eq!(written, 2);

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], "Dr. A");
    assert_eq!(rows[2][1], "Dr. C");
}

#[test]
fn extra_fields_are_appended_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    let mut first = complete("Dr. A");
    first.extras.push(("languages".into(), "mr, hi".into()));
    let mut second = complete("Dr. B");
    second.extras.push(("awards".into(), "best 2024".into()));
    second.extras.push(("languages".into(), "en".into()));

    write_dataset(&[first, second], &path).unwrap();
    let rows = read_rows(&path);

    let base = COLUMN_ORDER.len();
    assert_eq!(rows[0][base], "languages");
    assert_eq!(rows[0][base + 1], "awards");
    assert_eq!(rows[1][base], "mr, hi");
    assert_eq!(rows[1][base + 1], "");
    assert_eq!(rows[2][base], "en");
    assert_eq!(rows[2][base + 1], "best 2024");
}
