//! Dataset export.
//!
//! Writes the completeness-filtered record set as CSV in the fixed column
//! order, followed by any extra fields in stable first-seen order across
//! the whole set. Missing extras render as empty cells.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::record::{COLUMN_ORDER, Record, filter_complete};

/// Extra-column keys in first-seen order across the record set.
fn extra_columns(records: &[Record]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for record in records {
        for (key, _) in &record.extras {
            if !keys.iter().any(|existing| existing == key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

/// Filter the record set and write the survivors to `path`.
///
/// Returns the number of rows written. Running the filter here is safe to
/// combine with pre-filtered input: filtering is idempotent.
pub fn write_dataset(records: &[Record], path: &Path) -> Result<usize> {
    let kept = filter_complete(records.to_vec());
    let extras = extra_columns(&kept);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let header: Vec<&str> = COLUMN_ORDER
        .iter()
        .copied()
        .chain(extras.iter().map(String::as_str))
        .collect();
    writer.write_record(&header).context("failed to write header")?;

    for record in &kept {
        let row: Vec<&str> = COLUMN_ORDER
            .iter()
            .map(|column| record.column(column).unwrap_or_default())
            .chain(extras.iter().map(|key| record.extra(key).unwrap_or_default()))
            .collect();
        writer.write_record(&row).context("failed to write record")?;
    }
    writer.flush().context("failed to flush dataset")?;

    info!(
        "exported {} of {} records to {}",
        kept.len(),
        records.len(),
        path.display()
    );
    Ok(kept.len())
}
