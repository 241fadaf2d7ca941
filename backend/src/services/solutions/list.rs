use std::path::Path;

use actix_web::{web, HttpResponse};
use common::model::solution::SolutionRecord;
use log::{debug, warn};
use walkdir::WalkDir;

use super::paths::relative_filename;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::storage::ratings::RatingsStore;

/// `GET /solutions/{language}`
pub async fn process(
    language: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let language = language.into_inner();
    let profile = state
        .config
        .language(&language)
        .ok_or(ApiError::UnknownLanguage(language))?;
    let dir = state.config.language_dir(profile);
    let store = state.ratings.clone();

    let records =
        tokio::task::spawn_blocking(move || list_solutions(&dir, profile.extension, &store))
            .await??;
    debug!("Listed {} {} solutions", records.len(), profile.value);
    Ok(HttpResponse::Ok().json(records))
}

/// Every file below `dir` ending in `extension`, with its stored rating,
/// sorted by filename. Hidden files and folders are skipped; a missing
/// directory yields an empty list.
pub fn list_solutions(
    dir: &Path,
    extension: &str,
    store: &RatingsStore,
) -> Result<Vec<SolutionRecord>, ApiError> {
    if !dir.is_dir() {
        warn!("Solutions directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }
    let ratings = store.all()?;

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    let mut records = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(extension) {
            continue;
        }
        if let Some(filename) = relative_filename(dir, entry.path()) {
            let rating = ratings.get(&filename).copied();
            records.push(SolutionRecord { filename, rating });
        }
    }
    records.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(records)
}
