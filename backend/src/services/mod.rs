pub mod languages;
pub mod ratings;
pub mod solutions;

use actix_web::web;

use crate::errors::ApiError;

/// JSON extractor settings shared by every route: small bodies, and
/// malformed payloads reported as `422 {detail}` like any other validation
/// failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            ApiError::Validation(format!("Invalid request body: {}", err)).into()
        })
}
