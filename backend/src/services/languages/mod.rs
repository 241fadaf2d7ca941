//! `GET /languages`: the languages enabled in the configuration, in
//! configuration order.

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Scope};
use common::model::language::Language;

use crate::state::AppState;

const API_PATH: &str = "/languages";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(state: web::Data<AppState>) -> HttpResponse {
    let languages: Vec<Language> = state
        .config
        .languages
        .iter()
        .map(|p| p.to_language())
        .collect();
    HttpResponse::Ok().json(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn returns_configured_languages() {
        let config = AppConfig::from_lookup(|key| match key {
            "LANGUAGES" => Some("rust,python".to_string()),
            _ => None,
        })
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(config)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/languages").to_request();
        let languages: Vec<Language> = test::call_and_read_body_json(&app, req).await;
        let values: Vec<&str> = languages.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(values, vec!["rust", "python"]);
        assert_eq!(languages[0].name, "Rust");
    }
}
