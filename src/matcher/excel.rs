//! Roster spreadsheet reader (calamine)
//!
//! Column A holds the group number, column B the student name.

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use ta_toolkit_common::{Roster, RosterEntry};

const GROUP_COL: u32 = 0;
const NAME_COL: u32 = 1;

/// Read `(group, name)` rows from the first sheet.
///
/// `rows` is a zero-based inclusive window in absolute sheet coordinates.
/// Rows without a text name are skipped.
pub fn read_roster(path: &Path, rows: (u32, u32)) -> Result<Roster, calamine::Error> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(calamine::Error::Msg("workbook has no sheets"))??;

    let (first, last) = rows;
    let mut entries = Vec::new();

    for row in first..=last {
        let name = match range.get_value((row, NAME_COL)) {
            Some(Data::String(s)) => s.trim(),
            _ => continue,
        };
        if name.is_empty() {
            continue;
        }

        let group = group_text(range.get_value((row, GROUP_COL)));
        entries.push(RosterEntry::new(name, group));
    }

    Ok(Roster::new(entries))
}

/// Group cell as text: numbers lose their fractional part, blanks and
/// errors become empty.
fn group_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) | Some(Data::Error(_)) => String::new(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) if f.is_nan() => String::new(),
        Some(Data::Float(f)) => (f.trunc() as i64).to_string(),
        Some(Data::Bool(b)) => if *b { "1" } else { "0" }.to_string(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}
