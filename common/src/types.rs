//! Report record type
//!
//! One `FolderRecord` per student folder, in the column order of the
//! class-usage CSV.

use crate::folder::ParsedFolder;
use serde::{Deserialize, Serialize};

/// Column names of the class-usage report, in order
pub const REPORT_COLUMNS: [&str; 8] = [
    "folder",
    "student_name_raw",
    "student_name",
    "team_parsed",
    "team_from_excel",
    "used_class",
    "class_count",
    "py_files",
];

/// Check result for one student folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Original folder name
    pub folder: String,
    /// Name token from the folder name
    pub student_name_raw: String,
    /// Roster name (or the raw token when unmatched)
    pub student_name: String,
    /// Group parsed from the folder name, e.g. `Team 26`
    pub team_parsed: String,
    /// Group number from the roster
    pub team_from_excel: String,
    pub used_class: bool,
    pub class_count: usize,
    pub py_files: usize,
}

impl FolderRecord {
    pub fn new(folder: impl Into<String>, parsed: ParsedFolder, class_count: usize, py_files: usize) -> Self {
        Self {
            folder: folder.into(),
            student_name_raw: parsed.student_name_raw,
            student_name: parsed.matched.name,
            team_parsed: parsed.team_parsed,
            team_from_excel: parsed.matched.group,
            used_class: class_count > 0,
            class_count,
            py_files,
        }
    }

    /// Row values in `REPORT_COLUMNS` order. Booleans are written as
    /// `True`/`False` so existing marking sheets keep working.
    pub fn csv_row(&self) -> [String; 8] {
        [
            self.folder.clone(),
            self.student_name_raw.clone(),
            self.student_name.clone(),
            self.team_parsed.clone(),
            self.team_from_excel.clone(),
            if self.used_class { "True" } else { "False" }.to_string(),
            self.class_count.to_string(),
            self.py_files.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::parse_folder_name;
    use crate::matching::MatchOptions;
    use crate::roster::Roster;

    #[test]
    fn test_used_class_follows_count() {
        let parsed = parse_folder_name("a_Team_1", &Roster::default(), &MatchOptions::default());
        let record = FolderRecord::new("a_Team_1", parsed.clone(), 0, 3);
        assert!(!record.used_class);

        let record = FolderRecord::new("a_Team_1", parsed, 2, 3);
        assert!(record.used_class);
    }

    #[test]
    fn test_csv_row() {
        let roster = Roster::from_pairs([("5", "Bob Stone")]);
        let parsed = parse_folder_name("bobstone_group_5", &roster, &MatchOptions::default());
        let record = FolderRecord::new("bobstone_group_5", parsed, 4, 2);

        assert_eq!(
            record.csv_row(),
            [
                "bobstone_group_5".to_string(),
                "bobstone".to_string(),
                "Bob Stone".to_string(),
                "Group 5".to_string(),
                "5".to_string(),
                "True".to_string(),
                "4".to_string(),
                "2".to_string(),
            ]
        );
    }
}
