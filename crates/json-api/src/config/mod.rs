//! Server configuration module

use clap::Parser;

use bazaar_app::context::DatabaseOptions;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Bazaar JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "bazaar-json", about = "Bazaar JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Database settings in the form the app context expects.
    #[must_use]
    pub fn database_options(&self) -> DatabaseOptions {
        DatabaseOptions {
            url: self.database.database_url.clone(),
            max_connections: self.database.max_connections,
            run_migrations: self.database.run_migrations,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "bazaar-json",
            "--database-url",
            "postgres://localhost/bazaar",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(config.observability.metrics_enabled, "metrics default on");

        let options = config.database_options();

        assert_eq!(options.url, "postgres://localhost/bazaar");
        assert_eq!(options.max_connections, 10);
        assert!(options.run_migrations, "migrations default on");

        Ok(())
    }

    #[test]
    fn boolean_toggles_accept_explicit_values() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "bazaar-json",
            "--database-url",
            "postgres://localhost/bazaar",
            "--run-migrations",
            "false",
            "--metrics-enabled",
            "false",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert!(!config.database_options().run_migrations, "disabled");
        assert!(!config.observability.metrics_enabled, "disabled");

        Ok(())
    }
}
