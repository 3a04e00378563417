//! Class-usage check for each student folder
//!
//! Combines folder-name parsing, roster matching and class counting into
//! one `FolderRecord` per student.

use crate::error::Result;
use crate::scanner::{self, ClassCounter};
use indicatif::ProgressBar;
use std::path::Path;
use ta_toolkit_common::{parse_folder_name, FolderRecord, MatchKind, MatchOptions, Roster};
use tracing::debug;

pub struct StudentChecker<'a> {
    roster: &'a Roster,
    options: MatchOptions,
    excluded_dirs: &'a [String],
    counter: ClassCounter,
}

impl<'a> StudentChecker<'a> {
    pub fn new(roster: &'a Roster, options: MatchOptions, excluded_dirs: &'a [String]) -> Result<Self> {
        Ok(Self {
            roster,
            options,
            excluded_dirs,
            counter: ClassCounter::new()?,
        })
    }

    /// Check one student folder.
    ///
    /// # Arguments
    /// * `folder_name` - folder name, parsed for the student token and team label
    /// * `student_path` - folder to search for `.py` files
    pub fn check_student_dir(&mut self, folder_name: &str, student_path: &Path) -> Result<FolderRecord> {
        let parsed = parse_folder_name(folder_name, self.roster, &self.options);
        match parsed.matched.kind {
            MatchKind::Containment(index) => {
                debug!("{}: roster row {} by containment", folder_name, index)
            }
            MatchKind::Similarity(index, ratio) => {
                debug!("{}: roster row {} by similarity {:.3}", folder_name, index, ratio)
            }
            MatchKind::Unmatched => debug!("{}: no roster match", folder_name),
        }

        let mut class_count = 0;
        let mut py_files = 0;

        for path in scanner::scan_python_files(student_path, self.excluded_dirs) {
            debug!("checking: {}", path.display());
            py_files += 1;
            class_count += self.counter.count_file(&path)?;
        }

        Ok(FolderRecord::new(folder_name, parsed, class_count, py_files))
    }

    /// Check every student folder under `root`, in folder-name order.
    pub fn check_homework_root(&mut self, root: &Path, progress: &ProgressBar) -> Result<Vec<FolderRecord>> {
        let folders = scanner::list_student_folders(root)?;
        progress.set_length(folders.len() as u64);

        let mut results = Vec::with_capacity(folders.len());
        for folder in &folders {
            progress.set_message(folder.name.clone());
            results.push(self.check_student_dir(&folder.name, &folder.path)?);
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(results)
    }
}
