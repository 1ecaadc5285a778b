use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub listings_api_url: String,
    pub listings_app_id: String,
    pub listings_app_key: String,
    /// Stamped on postings whose location the listings API omits.
    pub default_location: String,
    pub skills_file: String,
    pub roles_file: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a number")?,
            listings_api_url: require_env("LISTINGS_API_URL")?,
            listings_app_id: require_env("LISTINGS_APP_ID")?,
            listings_app_key: require_env("LISTINGS_APP_KEY")?,
            default_location: std::env::var("DEFAULT_LOCATION")
                .unwrap_or_else(|_| "Remote".to_string()),
            skills_file: std::env::var("SKILLS_FILE")
                .unwrap_or_else(|_| "data/seed_skills.json".to_string()),
            roles_file: std::env::var("ROLES_FILE")
                .unwrap_or_else(|_| "data/role_skills.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-global environment is touched in one place.
    #[test]
    fn test_defaults_apply_when_optional_vars_unset() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/jobs");
        std::env::set_var("LISTINGS_API_URL", "https://listings.example/search");
        std::env::set_var("LISTINGS_APP_ID", "id");
        std::env::set_var("LISTINGS_APP_KEY", "key");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("PORT");
        std::env::remove_var("SKILLS_FILE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.port, 8080);
        assert_eq!(config.skills_file, "data/seed_skills.json");
    }
}
