use serde::Deserialize;

use newswire_core::config::Config;

/// News service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct NewsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3200). Env var: `NEWS_PORT`.
    #[serde(default = "default_news_port")]
    pub news_port: u16,
}

fn default_news_port() -> u16 {
    3200
}

impl Config for NewsConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_port_when_absent() {
        let config: NewsConfig =
            serde_json::from_str(r#"{"database_url":"postgres://localhost/newswire"}"#).unwrap();
        assert_eq!(config.news_port, 3200);
        assert_eq!(config.database_url, "postgres://localhost/newswire");
    }
}
