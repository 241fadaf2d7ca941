//! Typed calls to the solutions API.
//!
//! Every function resolves to `Result<_, FetchError>`; callers turn errors
//! into display text where they happen.
//!
//! - `GET  /languages`
//! - `GET  /solutions/{language}`
//! - `GET  /solutions/{language}/{path}`
//! - `POST /ratings`

use common::error::FetchError;
use common::model::content::FileContent;
use common::model::language::Language;
use common::model::rating::Rating;
use common::model::solution::SolutionRecord;
use gloo_net::http::{Request, Response};
use js_sys::encode_uri_component;
use serde::de::DeserializeOwned;

use crate::config::API_BASE_URL;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

/// Percent-encodes each segment of a slash-delimited path, keeping the
/// slashes.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| String::from(encode_uri_component(segment)))
        .collect::<Vec<_>>()
        .join("/")
}

fn network(err: gloo_net::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::from_status(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_languages() -> Result<Vec<Language>, FetchError> {
    let response = Request::get(&url("/languages"))
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn fetch_solutions(language: &str) -> Result<Vec<SolutionRecord>, FetchError> {
    let response = Request::get(&url(&format!("/solutions/{}", encode_path(language))))
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn fetch_content(language: &str, path: &str) -> Result<FileContent, FetchError> {
    let response = Request::get(&url(&format!(
        "/solutions/{}/{}",
        encode_path(language),
        encode_path(path)
    )))
    .send()
    .await
    .map_err(network)?;
    read_json(response).await
}

pub async fn submit_rating(rating: &Rating) -> Result<Rating, FetchError> {
    let response = Request::post(&url("/ratings"))
        .json(rating)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}
