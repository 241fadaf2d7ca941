use serde::{Deserialize, Serialize};

/// Parsed content of one solution file, as returned by
/// `GET /solutions/{language}/{path}`.
///
/// The description is the leading comment block, the code runs from the first
/// to the last non-comment line, and the complexity is the trailing comment
/// block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileContent {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,
}
