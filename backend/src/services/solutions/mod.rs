//! # Solutions Service Module
//!
//! Lists the solution files of a language and serves the parsed content of a
//! single file.
//!
//! ## Sub-modules:
//! - `list`: walks `SOLUTIONS_DIR/<language>` and joins the stored ratings.
//! - `get`: reads one file and splits it into description, code and complexity.
//! - `parse`: the splitting rules.
//! - `paths`: safe resolution of client-supplied relative paths.

mod get;
mod list;
mod parse;
pub(crate) mod paths;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all solution endpoints.
const API_PATH: &str = "/solutions";

/// Configures and returns the Actix `Scope` for the solution routes.
///
/// # Registered Routes:
///
/// *   **`GET /{language}`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns `[{filename, rating}]` for every file of the
///       language, sorted by filename. `rating` is `null` for unrated files.
///       Unknown languages answer `404`.
///
/// *   **`GET /{language}/{filename}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns `{filename, description, code, complexity,
///       source_link, youtube_link}` for one file. `filename` may contain
///       slashes. Paths escaping the language directory or naming missing
///       files answer `404` with `{detail}`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{language}", get().to(list::process))
        .route("/{language}/{filename:.*}", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use common::model::content::FileContent;
    use common::model::solution::SolutionRecord;
    use common::requests::ErrorBody;
    use std::fs;

    fn fixture() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let python = dir.path().join("solutions/python");
        fs::create_dir_all(python.join("arrays")).unwrap();
        fs::create_dir_all(python.join("dp")).unwrap();
        fs::create_dir_all(python.join(".git")).unwrap();
        fs::write(python.join("arrays/two-sum.py"), "# Two Sum\nx = 1\n# O(n)\n").unwrap();
        fs::write(python.join("arrays/three-sum.py"), "y = 2\n").unwrap();
        fs::write(python.join("dp/climb-stairs.py"), "z = 3\n").unwrap();
        fs::write(python.join("dp/notes.txt"), "ignored").unwrap();
        fs::write(python.join(".git/hook.py"), "ignored").unwrap();

        let solutions_dir = dir.path().join("solutions").to_string_lossy().to_string();
        let db_path = dir.path().join("ratings.db").to_string_lossy().to_string();
        let config = AppConfig::from_lookup(|key| match key {
            "SOLUTIONS_DIR" => Some(solutions_dir.clone()),
            "DB_PATH" => Some(db_path.clone()),
            _ => None,
        })
        .unwrap();
        let state = AppState::new(config);
        state.ratings.init().unwrap();
        state.ratings.save("dp/climb-stairs.py", 5).unwrap();
        (dir, state)
    }

    #[actix_web::test]
    async fn lists_files_with_ratings() {
        let (_dir, state) = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/solutions/python").to_request();
        let records: Vec<SolutionRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            records,
            vec![
                SolutionRecord::new("arrays/three-sum.py", None),
                SolutionRecord::new("arrays/two-sum.py", None),
                SolutionRecord::new("dp/climb-stairs.py", Some(5)),
            ]
        );
    }

    #[actix_web::test]
    async fn missing_language_directory_lists_nothing() {
        let (_dir, state) = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/solutions/rust").to_request();
        let records: Vec<SolutionRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(records.is_empty());

        let req = test::TestRequest::get().uri("/solutions/cobol").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn serves_nested_file_content() {
        let (_dir, state) = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/solutions/python/arrays/two-sum.py")
            .to_request();
        let content: FileContent = test::call_and_read_body_json(&app, req).await;
        assert_eq!(content.description, "Two Sum");
        assert_eq!(content.code, "x = 1");
        assert_eq!(content.complexity.as_deref(), Some("O(n)"));
    }

    #[actix_web::test]
    async fn traversal_is_a_not_found_with_detail() {
        let (_dir, state) = fixture();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/solutions/python/arrays/..%2F..%2F..%2Fratings.db")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message(), Some("Invalid or non-existent file path."));
    }
}
