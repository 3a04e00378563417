pub mod python;

use crate::error::{Result, ToolkitError};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

pub use python::{count_classes_in_file, ClassCounter, SourceCount};

/// A top-level student folder under the homework root
#[derive(Debug, Clone)]
pub struct StudentFolder {
    pub name: String,
    pub path: PathBuf,
}

/// Direct subdirectories of `root`, sorted by name. Files are ignored.
pub fn list_student_folders(root: &Path) -> Result<Vec<StudentFolder>> {
    if !root.is_dir() {
        return Err(ToolkitError::FolderNotFound(root.display().to_string()));
    }

    let mut folders = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        folders.push(StudentFolder {
            name: entry.file_name().to_string_lossy().to_string(),
            path: path.to_path_buf(),
        });
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(folders)
}

/// Tooling, VCS and virtual-environment directories are not student code.
pub fn is_excluded_dir(name: &str, excluded: &[String]) -> bool {
    excluded.iter().any(|d| d == name) || name.to_lowercase().contains("env")
}

fn is_pruned(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_excluded_dir(&entry.file_name().to_string_lossy(), excluded)
}

/// All `.py` files below `dir`, skipping excluded directories.
/// Unreadable directories are skipped.
pub fn scan_python_files(dir: &Path, excluded: &[String]) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e, excluded))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir() && e.file_name().to_string_lossy().ends_with(".py"))
        .map(|e| e.into_path())
        .collect()
}
