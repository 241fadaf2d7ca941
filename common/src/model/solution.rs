use serde::{Deserialize, Serialize};

/// One solution file as listed by `GET /solutions/{language}`.
///
/// `filename` is the slash-delimited path relative to the language directory
/// and is the unique key of the record. `rating` is a difficulty between 1 and
/// 5, or `None` (`null` on the wire) when the file was never rated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub filename: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl SolutionRecord {
    pub fn new(filename: impl Into<String>, rating: Option<u8>) -> Self {
        Self {
            filename: filename.into(),
            rating,
        }
    }
}
