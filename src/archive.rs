//! Submission archives
//!
//! - `batch_unzip`: extract every `*.zip` in a folder into a sibling folder
//! - `pack_directory`: build a zip from a folder (demo bundles)

use crate::error::{Result, ToolkitError};
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

fn is_zip_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase().ends_with(".zip"))
            .unwrap_or(false)
}

/// Extract each zip directly inside `base_dir` into `base_dir/<stem>/`.
/// Nested archives are left as they are.
///
/// # Returns
/// The extraction folders, in archive name order.
pub fn batch_unzip(base_dir: &Path) -> Result<Vec<PathBuf>> {
    if !base_dir.is_dir() {
        return Err(ToolkitError::FolderNotFound(base_dir.display().to_string()));
    }

    let mut archives = Vec::new();
    for entry in std::fs::read_dir(base_dir)? {
        let path = entry?.path();
        if is_zip_file(&path) {
            archives.push(path);
        }
    }
    archives.sort();

    let mut extracted = Vec::with_capacity(archives.len());
    for archive_path in archives {
        let stem = archive_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let extract_dir = base_dir.join(&stem);
        std::fs::create_dir_all(&extract_dir)?;

        println!(
            "- extracting: {} -> {}",
            archive_path.file_name().unwrap_or_default().to_string_lossy(),
            extract_dir.display()
        );
        let mut archive = ZipArchive::new(File::open(&archive_path)?)?;
        archive.extract(&extract_dir)?;

        extracted.push(extract_dir);
    }

    Ok(extracted)
}

/// Default archive path for `pack_directory`: `<folder>.zip` next to the folder.
pub fn default_pack_output(src_dir: &Path) -> PathBuf {
    let mut name = src_dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "archive".into());
    name.push(".zip");
    src_dir.with_file_name(name)
}

/// Zip every file under `src_dir`. Entry names are relative to the parent
/// of `src_dir`, so they start with the folder's own name.
///
/// # Returns
/// Number of files written.
pub fn pack_directory(src_dir: &Path, output: &Path) -> Result<usize> {
    if !src_dir.is_dir() {
        return Err(ToolkitError::FolderNotFound(src_dir.display().to_string()));
    }
    let src_dir = src_dir.canonicalize()?;
    let base = src_dir.parent().unwrap_or(&src_dir).to_path_buf();

    let mut zip = ZipWriter::new(File::create(output)?);
    let output = output.canonicalize()?;
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(&src_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.path() == output {
            continue;
        }

        let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name, options)?;
        std::io::copy(&mut File::open(entry.path())?, &mut zip)?;
        count += 1;
    }
    zip.finish()?;

    Ok(count)
}
