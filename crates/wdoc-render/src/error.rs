use std::path::PathBuf;

use thiserror::Error;
use wdoc_ingest::IngestError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output directory {path} must differ from the docs directory")]
    SameDirectory { path: PathBuf },
}

impl RenderError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
