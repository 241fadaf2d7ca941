//! Server configuration, read from the environment after loading `.env`.
//!
//! | Variable        | Default          |
//! |-----------------|------------------|
//! | `HOST`          | `127.0.0.1`      |
//! | `PORT`          | `8000`           |
//! | `SOLUTIONS_DIR` | `../solutions`   |
//! | `DB_PATH`       | `ratings.db`     |
//! | `OPEN_BROWSER`  | `false`          |
//! | `LANGUAGES`     | every built-in   |
//!
//! `LANGUAGES` is a comma-separated list of language values (`python,rust`).
//! Each language reads its files from `SOLUTIONS_DIR/<value>`.

use std::env;
use std::path::PathBuf;

use common::model::language::{profile, LanguageProfile, PROFILES};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("LANGUAGES names an unsupported language: {0:?}")]
    UnknownLanguage(String),
    #[error("LANGUAGES must name at least one language")]
    NoLanguages,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub solutions_dir: PathBuf,
    pub db_path: PathBuf,
    pub open_browser: bool,
    pub languages: Vec<&'static LanguageProfile>,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => 8000,
        };
        let solutions_dir = lookup("SOLUTIONS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("../solutions"));
        let db_path = lookup("DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("ratings.db"));
        let open_browser = lookup("OPEN_BROWSER")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let languages = match lookup("LANGUAGES") {
            Some(list) => parse_languages(&list)?,
            None => PROFILES.iter().collect(),
        };

        Ok(Self {
            host,
            port,
            solutions_dir,
            db_path,
            open_browser,
            languages,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The enabled profile whose value is `value`.
    pub fn language(&self, value: &str) -> Option<&'static LanguageProfile> {
        self.languages
            .iter()
            .copied()
            .find(|p| p.value.eq_ignore_ascii_case(value))
    }

    pub fn language_dir(&self, language: &LanguageProfile) -> PathBuf {
        self.solutions_dir.join(language.value)
    }
}

fn parse_languages(list: &str) -> Result<Vec<&'static LanguageProfile>, ConfigError> {
    let mut languages = Vec::new();
    for value in list.split(',').map(str::trim).filter(|v| !v.is_empty()) {
        let found = profile(value).ok_or_else(|| ConfigError::UnknownLanguage(value.to_string()))?;
        if !languages.contains(&found) {
            languages.push(found);
        }
    }
    if languages.is_empty() {
        return Err(ConfigError::NoLanguages);
    }
    Ok(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8000");
        assert_eq!(config.db_path, PathBuf::from("ratings.db"));
        assert!(!config.open_browser);
        assert_eq!(config.languages.len(), PROFILES.len());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "9000"),
            ("SOLUTIONS_DIR", "/data/solutions"),
            ("OPEN_BROWSER", "true"),
            ("LANGUAGES", "rust, python,rust"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.language_dir(config.language("rust").unwrap()),
            PathBuf::from("/data/solutions/rust")
        );
        assert!(config.open_browser);
        let values: Vec<&str> = config.languages.iter().map(|p| p.value).collect();
        assert_eq!(values, vec!["rust", "python"]);
        assert!(config.language("typescript").is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".into())
        );
        assert_eq!(
            config(&[("LANGUAGES", "python,cobol")]).unwrap_err(),
            ConfigError::UnknownLanguage("cobol".into())
        );
        assert_eq!(config(&[("LANGUAGES", " , ")]).unwrap_err(), ConfigError::NoLanguages);
    }
}
