use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Site
    pub site_name: String,
    pub public_base_url: String,

    // Language preference
    pub language_cookie: String,
    pub preferences_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            site_name: "Klinik".to_string(),
            public_base_url: "http://localhost:8080".to_string(),
            language_cookie: "i18nextLng".to_string(),
            preferences_file: "data/preferences.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{value}'"))?,
                Err(_) => defaults.port,
            },

            // Site
            site_name: std::env::var("SITE_NAME").unwrap_or(defaults.site_name),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_base_url),

            // Language preference
            language_cookie: std::env::var("LANGUAGE_COOKIE").unwrap_or(defaults.language_cookie),
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or(defaults.preferences_file),
        })
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
