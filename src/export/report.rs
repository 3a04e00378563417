//! Class-usage report CSV

use super::bom_csv_writer;
use crate::error::Result;
use std::path::Path;
use ta_toolkit_common::{FolderRecord, REPORT_COLUMNS};

/// Write one row per record, in the given order. The header is written
/// even when there are no records.
pub fn write_report(records: &[FolderRecord], output_path: &Path) -> Result<()> {
    let mut writer = bom_csv_writer(output_path)?;

    writer.write_record(REPORT_COLUMNS)?;
    for record in records {
        writer.write_record(record.csv_row())?;
    }
    writer.flush()?;

    Ok(())
}
