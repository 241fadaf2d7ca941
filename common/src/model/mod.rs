pub mod content;
pub mod language;
pub mod rating;
pub mod solution;
