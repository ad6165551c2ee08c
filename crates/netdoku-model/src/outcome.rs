use serde::{Deserialize, Serialize};

/// Per-source-layer export result handed back to the caller. One of these
/// is produced for every configured layer, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub label: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportOutcome {
    pub fn success(label: impl Into<String>, count: usize, destination: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            success: true,
            count: Some(count),
            destination: Some(destination.into()),
            error: None,
        }
    }

    pub fn failure(label: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            success: false,
            count: None,
            destination: None,
            error: Some(error.into()),
        }
    }
}
