use crate::config::AppConfig;
use crate::storage::ratings::RatingsStore;

/// Shared, read-only application state handed to every handler as
/// `web::Data<AppState>`.
pub struct AppState {
    pub config: AppConfig,
    pub ratings: RatingsStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let ratings = RatingsStore::new(config.db_path.clone());
        Self { config, ratings }
    }
}
