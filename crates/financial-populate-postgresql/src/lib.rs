//! PostgreSQL side of financial-seed.
//!
//! - [`schema`]: the five fixed tables and their foreign keys
//! - [`gateway`]: table creation and parameterized inserts over one connection
//! - [`populator`]: wires the record generator to the gateway

pub mod args;
pub mod error;
pub mod gateway;
pub mod populator;
pub mod schema;
pub mod statement;

pub use args::ConnectionArgs;
pub use error::PopulateError;
pub use gateway::PostgreSQLGateway;
pub use populator::{CycleReport, FinancialPopulator, PopulateMetrics};
pub use schema::{TableSchema, FINANCIAL_TABLES};
