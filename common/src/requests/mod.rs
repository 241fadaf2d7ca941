use serde::{Deserialize, Serialize};

/// JSON body carried by non-2xx API responses.
///
/// The backend fills `detail`; `error` is accepted as well so that older
/// servers answering `{"error": ...}` still produce a readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            detail: Some(message.into()),
            error: None,
        }
    }

    /// `detail` if present, otherwise `error`.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.error.as_deref())
    }
}
