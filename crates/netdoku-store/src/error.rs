use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("template store not found at {path}")]
    TemplateMissing { path: PathBuf },

    #[error("failed to prepare output store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown feature class: {name}")]
    UnknownCollection { name: String },

    #[error("write failed for {collection} (code {code}): {message}")]
    Write {
        collection: String,
        code: i32,
        message: String,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
