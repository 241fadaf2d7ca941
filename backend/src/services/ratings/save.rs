use actix_web::{web, HttpResponse};
use common::model::rating::Rating;
use log::info;

use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::services::solutions::paths::resolve_solution;
use crate::state::AppState;
use crate::storage::ratings::RatingsStore;

const INVALID_INPUT: &str =
    "Invalid input: filename must be a string, rating an integer between 1-5.";

pub async fn process(
    payload: web::Json<Rating>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let rating = payload.into_inner();
    if rating.filename.trim().is_empty() || !rating.is_valid() {
        return Err(ApiError::Validation(INVALID_INPUT.to_string()));
    }

    let saved = tokio::task::spawn_blocking(move || {
        save_rating(&state.config, &state.ratings, rating)
    })
    .await??;
    info!("Rated {} as {}", saved.filename, saved.rating);
    Ok(HttpResponse::Ok().json(saved))
}

/// Stores `rating` once its file is found below one of the enabled
/// language directories.
pub fn save_rating(
    config: &AppConfig,
    store: &RatingsStore,
    rating: Rating,
) -> Result<Rating, ApiError> {
    let exists = config
        .languages
        .iter()
        .any(|p| resolve_solution(&config.language_dir(p), &rating.filename).is_ok());
    if !exists {
        return Err(ApiError::InvalidPath);
    }
    store.save(&rating.filename, rating.rating)?;
    Ok(rating)
}
