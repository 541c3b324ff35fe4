use crate::domain::error::DomainError;
use crate::domain::query::DEFAULT_LIMIT;
use std::env;
use tracing::debug;

const DEFAULT_FIRST_SUPERUSER: &str = "admin@example.com";
const DEFAULT_FIRST_SUPERUSER_NAME: &str = "Administrator";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub first_superuser: String,
    pub first_superuser_name: String,
    pub default_page_size: u64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_superuser: DEFAULT_FIRST_SUPERUSER.to_string(),
            first_superuser_name: DEFAULT_FIRST_SUPERUSER_NAME.to_string(),
            default_page_size: DEFAULT_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) | Err(_) => {
                    return Err(DomainError::Config(format!(
                        "DEFAULT_PAGE_SIZE must be a positive integer, got '{}'",
                        raw
                    )));
                }
                Ok(size) => size,
            },
            None => defaults.default_page_size,
        };

        Ok(Self {
            first_superuser: lookup("FIRST_SUPERUSER").unwrap_or(defaults.first_superuser),
            first_superuser_name: lookup("FIRST_SUPERUSER_NAME")
                .unwrap_or(defaults.first_superuser_name),
            default_page_size,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_page_size, 100);
    }

    #[test]
    fn test_reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("FIRST_SUPERUSER", "root@example.org"),
            ("FIRST_SUPERUSER_NAME", "Root"),
            ("DEFAULT_PAGE_SIZE", "25"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.first_superuser, "root@example.org");
        assert_eq!(settings.first_superuser_name, "Root");
        assert_eq!(settings.default_page_size, 25);
    }

    #[test]
    fn test_rejects_bad_page_size() {
        for raw in ["0", "ten", "-5"] {
            let result = Settings::from_lookup(lookup_from(&[("DEFAULT_PAGE_SIZE", raw)]));
            assert!(matches!(result, Err(DomainError::Config(_))), "{raw}");
        }
    }
}
