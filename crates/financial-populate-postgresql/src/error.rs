//! Error types for the PostgreSQL gateway.

use thiserror::Error;

/// Errors that can occur while creating tables or inserting rows.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Cannot reach or authenticate to the database.
    #[error("Connection error")]
    Connection(#[source] tokio_postgres::Error),

    /// A CREATE TABLE / ALTER TABLE batch failed.
    #[error("Schema error on table '{table}'")]
    Schema {
        table: String,
        #[source]
        source: tokio_postgres::Error,
    },

    /// An INSERT failed: missing table, unique or foreign-key violation.
    #[error("Persistence error on table '{table}'")]
    Persistence {
        table: String,
        #[source]
        source: tokio_postgres::Error,
    },
}

impl PopulateError {
    /// SQLSTATE code reported by the server, if any.
    pub fn sql_state(&self) -> Option<&tokio_postgres::error::SqlState> {
        let source = match self {
            PopulateError::Connection(source)
            | PopulateError::Schema { source, .. }
            | PopulateError::Persistence { source, .. } => source,
        };
        source.code()
    }
}
