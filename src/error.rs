// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the analysis path: reading corpora, snapshots and config.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no entries found in {}", path.display())]
    EmptyCorpus { path: PathBuf },

    #[error("corpus snapshot is unreadable: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
