use serde::{Deserialize, Serialize};

/// Lowest accepted difficulty rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted difficulty rating.
pub const MAX_RATING: u8 = 5;

/// Body of `POST /ratings` and of its success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub filename: String,
    pub rating: u8,
}

impl Rating {
    pub fn is_valid(&self) -> bool {
        is_valid_rating(self.rating)
    }
}

pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
