//! # Ratings Service Module
//!
//! Persists the difficulty rating of a solution file.
//!
//! *   **`POST /ratings`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Expects `{filename, rating}` with `rating` between 1
//!       and 5 and `filename` naming an existing file of an enabled language.
//!       Answers with the stored `{filename, rating}`; invalid input answers
//!       `422` and unknown files `404`, both with `{detail}`.

mod save;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/ratings";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(save::process))
}
