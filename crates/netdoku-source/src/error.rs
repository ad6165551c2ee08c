use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{layer} layer not found")]
    LayerNotFound { layer: String },
}

pub type Result<T> = std::result::Result<T, SourceError>;
