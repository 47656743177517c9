use std::env;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://medisco_chatbot.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            seed_demo_data: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
                    DEFAULT_DATABASE_URL.to_string()
                }),
            database_max_connections: parse_or("DB_MAX_CONNECTIONS", env::var("DB_MAX_CONNECTIONS").ok(), DEFAULT_MAX_CONNECTIONS),
            server_host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            server_port: parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT),
            seed_demo_data: parse_or("SEED_DEMO_DATA", env::var("SEED_DEMO_DATA").ok(), false),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - database pool has no connections");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.database_url.is_empty() && self.database_max_connections > 0
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default", key, value);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        assert_eq!(parse_or("PORT", None, 5000u16), 5000);
        assert!(!parse_or("SEED_DEMO_DATA", None, false));
    }

    #[test]
    fn values_are_trimmed_and_parsed() {
        assert_eq!(parse_or("PORT", Some(" 8080 ".to_string()), 5000u16), 8080);
        assert_eq!(parse_or("DB_MAX_CONNECTIONS", Some("4".to_string()), 10u32), 4);
        assert!(parse_or("SEED_DEMO_DATA", Some("true".to_string()), false));
    }

    #[test]
    fn garbage_values_keep_the_default() {
        assert_eq!(parse_or("PORT", Some("eighty".to_string()), 5000u16), 5000);
    }

    #[test]
    fn default_config_binds_original_port() {
        let config = AppConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }
}
