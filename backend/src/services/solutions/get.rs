use std::fs;
use std::path::Path;

use actix_web::{web, HttpResponse};
use common::explorer::display_titles;
use common::model::content::FileContent;
use common::model::language::LanguageProfile;

use super::parse::{first_link, parse_solution};
use super::paths::resolve_solution;
use crate::errors::ApiError;
use crate::state::AppState;

const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";

/// `GET /solutions/{language}/{filename}`
pub async fn process(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (language, filename) = path.into_inner();
    let profile = state
        .config
        .language(&language)
        .ok_or(ApiError::UnknownLanguage(language))?;
    let root = state.config.language_dir(profile);

    let content = tokio::task::spawn_blocking(move || load_solution(&root, &filename, profile))
        .await??;
    Ok(HttpResponse::Ok().json(content))
}

/// Reads and parses one solution file below `root`.
pub fn load_solution(
    root: &Path,
    filename: &str,
    profile: &LanguageProfile,
) -> Result<FileContent, ApiError> {
    let full = resolve_solution(root, filename)?;
    let source = fs::read_to_string(&full)?;
    let parsed = parse_solution(&source, profile.comment_prefix);

    Ok(FileContent {
        source_link: first_link(&parsed.description),
        youtube_link: Some(youtube_search_link(filename, profile.value)),
        filename: Some(filename.to_string()),
        description: parsed.description,
        code: parsed.code,
        complexity: Some(parsed.complexity),
    })
}

/// YouTube search for walkthroughs of the problem named by `filename`.
fn youtube_search_link(filename: &str, language: &str) -> String {
    let (title, _) = display_titles(filename, language);
    let query = format!("leetcode {}", title.to_lowercase());
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", YOUTUBE_SEARCH, encoded)
}
