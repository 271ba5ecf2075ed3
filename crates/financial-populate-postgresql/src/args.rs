//! CLI argument definitions for the PostgreSQL connection.

use clap::Args;

/// Connection parameters.
///
/// The defaults point at a local `financial_db` database with the stock
/// `postgres` superuser, so the tool runs without any arguments.
#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    /// PostgreSQL host
    #[arg(long, default_value = "localhost", env = "PGHOST")]
    pub host: String,

    /// Database name
    #[arg(long, default_value = "financial_db", env = "PGDATABASE")]
    pub database: String,

    /// Database user
    #[arg(long, default_value = "postgres", env = "PGUSER")]
    pub user: String,

    /// Database password
    #[arg(long, default_value = "postgres", env = "PGPASSWORD", hide_env_values = true)]
    pub password: String,

    /// PostgreSQL port
    #[arg(long, default_value = "5432", env = "PGPORT")]
    pub port: u16,
}

impl ConnectionArgs {
    /// Build a `tokio_postgres` configuration from the arguments.
    pub fn to_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .dbname(&self.database)
            .user(&self.user)
            .password(&self.password)
            .port(self.port);
        config
    }
}

impl Default for ConnectionArgs {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            database: "financial_db".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            port: 5432,
        }
    }
}
