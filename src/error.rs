use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a generation run.
///
/// Anything recoverable (unmatched records, unknown dimension codes, suffix
/// collisions) is reported through `Diagnostics` instead.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
