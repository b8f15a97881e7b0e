use sparksave_core::constants::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    pub storage_key: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let db_path = non_empty("SPARKSAVE_DB_PATH").unwrap_or_else(|| "./data/sparksave.db".into());
        let storage_key =
            non_empty("SPARKSAVE_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.into());
        let log_format = non_empty("SPARKSAVE_LOG_FORMAT")
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or(LogFormat::Text);

        Self {
            db_path,
            storage_key,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.db_path, "./data/sparksave.db");
        assert_eq!(config.storage_key, "sparksave-goals");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("SPARKSAVE_DB_PATH", "/tmp/goals.db"),
            ("SPARKSAVE_STORAGE_KEY", "profile-2"),
            ("SPARKSAVE_LOG_FORMAT", "JSON"),
        ]);
        assert_eq!(config.db_path, "/tmp/goals.db");
        assert_eq!(config.storage_key, "profile-2");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[("SPARKSAVE_DB_PATH", "  "), ("SPARKSAVE_LOG_FORMAT", "xml")]);
        assert_eq!(config.db_path, "./data/sparksave.db");
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
