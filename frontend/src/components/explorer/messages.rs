use common::error::FetchError;
use common::model::content::FileContent;
use common::model::rating::Rating;
use common::model::solution::SolutionRecord;

/// Responses carry the language or path they were requested for so that an
/// answer arriving after the user moved on can be recognised and dropped.
pub enum Msg {
    SolutionsLoaded {
        language: String,
        result: Result<Vec<SolutionRecord>, FetchError>,
    },
    SelectFile(String),
    ContentLoaded {
        path: String,
        result: Result<FileContent, FetchError>,
    },
    ToggleFolder(String),
    SelectFolder(String, bool),
    SelectAll,
    ClearAll,
    ToggleRatingFilter(Option<u8>),
    PickRandom,
    RatingSubmitted(Rating),
    ToggleGroup,
}
