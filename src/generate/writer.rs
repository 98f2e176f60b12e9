use crate::error::GenError;
use crate::generate::pipeline::Generation;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    Unchanged,
    /// Only reported by `check_generation`
    Missing,
    /// Only reported by `check_generation`
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Read the input file. A missing file is the one fatal precondition.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<String, GenError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GenError::InputNotFound(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write every generated file under `out_dir`, creating directories as needed.
/// Files whose contents already match are left alone so their mtime does not
/// trigger rebuilds.
pub fn write_generation<P: AsRef<Path>>(
    out_dir: P,
    generation: &Generation,
) -> Result<Vec<FileReport>, GenError> {
    let out_dir = out_dir.as_ref();
    let mut reports = Vec::new();

    for file in &generation.files {
        let path = out_dir.join(&file.path);

        if read_existing(&path).as_deref() == Some(file.contents.as_str()) {
            reports.push(FileReport {
                path,
                status: FileStatus::Unchanged,
            });
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.contents).map_err(|source| GenError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("wrote {}", path.display());

        reports.push(FileReport {
            path,
            status: FileStatus::Written,
        });
    }

    Ok(reports)
}

/// Compare generated files against what is on disk without writing anything.
pub fn check_generation<P: AsRef<Path>>(out_dir: P, generation: &Generation) -> Vec<FileReport> {
    let out_dir = out_dir.as_ref();

    generation
        .files
        .iter()
        .map(|file| {
            let path = out_dir.join(&file.path);
            let status = match read_existing(&path) {
                None => FileStatus::Missing,
                Some(existing) if existing == file.contents => FileStatus::Unchanged,
                Some(_) => FileStatus::Stale,
            };
            FileReport { path, status }
        })
        .collect()
}

fn read_existing(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}
