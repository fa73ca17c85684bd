//! Raw-content snapshots for auditability.
//!
//! Every processed listing's captured markup is written to a file named
//! deterministically from its specialty, locality and card index, so a
//! harvested record can always be traced back to the markup it came from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Lowercased, underscored, filesystem-safe form of one name component.
fn slug(component: &str) -> String {
    sanitize_filename::sanitize(component.to_lowercase().replace(' ', "_"))
}

/// Deterministic snapshot filename for one listing.
#[must_use]
pub fn snapshot_filename(specialty: &str, locality: &str, index: usize) -> String {
    format!("{}_{}_{}.html", slug(specialty), slug(locality), index)
}

/// Write one listing's captured markup under `<storage>/snapshots/`.
pub async fn save_card_snapshot(
    storage_dir: &Path,
    specialty: &str,
    locality: &str,
    index: usize,
    outer_html: &str,
) -> Result<PathBuf> {
    let dir = storage_dir.join("snapshots");
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(snapshot_filename(specialty, locality, index));
    tokio::fs::write(&path, outer_html)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    debug!("snapshot saved: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::snapshot_filename;

    #[test]
    fn filenames_are_lowercased_and_underscored() {
        assert_eq!(
            snapshot_filename("General Surgeon", "Baner", 3),
            "general_surgeon_baner_3.html"
        );
    }

    #[test]
    fn hostile_components_cannot_escape_the_snapshot_dir() {
        let name = snapshot_filename("a/b\\c", "Baner", 0);
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
    }
}
