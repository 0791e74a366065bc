use serde::Deserialize;

/// Configuration options for the courses service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// SQLite database URL or file path.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
}

impl ServerConfig {
    /// Load configuration from an optional `config.yaml` next to the
    /// binary, overridden by environment variables (`DATABASE_URL`,
    /// `BIND_ADDRESS`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("database_url", "courses.db")?
            .set_default("bind_address", "127.0.0.1:8080")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
