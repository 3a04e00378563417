//! Roster loading
//!
//! The roster is optional: a missing or unreadable spreadsheet leaves
//! names uncorrected instead of failing the run.

mod excel;

pub use excel::read_roster;

use std::path::Path;
use ta_toolkit_common::Roster;
use tracing::info;

/// Load the roster from `path`, or an empty roster when it cannot be read.
///
/// # Arguments
/// * `path` - xlsx/xls/ods workbook; only the first sheet is read
/// * `rows` - zero-based inclusive row window
pub fn load_roster(path: &Path, rows: (u32, u32)) -> Roster {
    if !path.exists() {
        info!(
            "cannot find roster file {}, skipping name and group correction",
            path.display()
        );
        return Roster::default();
    }

    match read_roster(path, rows) {
        Ok(roster) => {
            info!("read {} student names and group numbers for matching", roster.len());
            roster
        }
        Err(e) => {
            info!("cannot read roster file {}: {}", path.display(), e);
            info!("skipping name and group correction");
            Roster::default()
        }
    }
}
