pub mod json_csv;
pub mod report;

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Lets spreadsheet applications detect UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV writer on a new file that starts with a UTF-8 byte-order mark.
/// Records end in CRLF.
pub(crate) fn bom_csv_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(UTF8_BOM)?;

    Ok(csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bom_csv_writer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut writer = bom_csv_writer(&path).unwrap();
        writer.write_record(["a", "b"]).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, b"\xEF\xBB\xBFa,b\r\n");
    }
}
