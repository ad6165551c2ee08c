use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("rule target {target} is not a mapped or derived field in {label}")]
    RuleTargetUnknown { label: String, target: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
