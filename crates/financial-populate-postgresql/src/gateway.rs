//! Single-connection gateway to PostgreSQL.
//!
//! Every statement runs in autocommit mode: each table creation and each
//! insert is its own committed unit, and nothing spans multiple calls.

use crate::args::ConnectionArgs;
use crate::error::PopulateError;
use crate::schema::TableSchema;
use crate::statement::{create_table_sql, insert_sql, row_count_sql};
use financial_generator::{FieldValue, Record};
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

/// Owns the one database connection of a run.
pub struct PostgreSQLGateway {
    client: Client,
    /// Task driving the connection; `None` when wrapping an external client
    connection: Option<JoinHandle<()>>,
}

impl PostgreSQLGateway {
    /// Connect to PostgreSQL and verify the connection.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let gateway = PostgreSQLGateway::connect(&ConnectionArgs::default()).await?;
    /// gateway.create_table(&schema::CUSTOMER).await?;
    /// gateway.close().await;
    /// ```
    pub async fn connect(args: &ConnectionArgs) -> Result<Self, PopulateError> {
        info!(
            "Connecting to PostgreSQL at {}:{}/{} as {}",
            args.host, args.port, args.database, args.user
        );
        let (client, connection) = args
            .to_config()
            .connect(NoTls)
            .await
            .map_err(PopulateError::Connection)?;

        // Spawn the connection task
        let handle = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client
            .simple_query("SELECT 1")
            .await
            .map_err(PopulateError::Connection)?;

        Ok(Self {
            client,
            connection: Some(handle),
        })
    }

    /// Wrap an already connected client whose connection task is driven elsewhere.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            connection: None,
        }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Create the table if it does not exist and set its replica identity to full.
    ///
    /// Safe to call repeatedly with the same schema.
    pub async fn create_table(&self, table: &TableSchema) -> Result<(), PopulateError> {
        let sql = create_table_sql(table);
        info!("Creating table: {}", table.name);
        debug!("DDL: {}", sql);

        self.client
            .batch_execute(&sql)
            .await
            .map_err(|source| PopulateError::Schema {
                table: table.name.to_string(),
                source,
            })
    }

    /// Insert one row given as ordered column/value pairs.
    pub async fn insert_row(
        &self,
        table: &str,
        fields: &[(&str, FieldValue)],
    ) -> Result<u64, PopulateError> {
        let columns: Vec<&str> = fields.iter().map(|(column, _)| *column).collect();
        let sql = insert_sql(table, &columns);
        debug!("DML: {}", sql);

        let params: Vec<Box<dyn ToSql + Sync + Send>> = fields
            .iter()
            .map(|(_, value)| field_value_to_boxed(value.clone()))
            .collect();

        // Convert to references for execution
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        self.client
            .execute(&sql, &param_refs)
            .await
            .map_err(|source| PopulateError::Persistence {
                table: table.to_string(),
                source,
            })
    }

    /// Insert a generated record into its table.
    pub async fn insert_record<R: Record>(&self, record: &R) -> Result<u64, PopulateError> {
        self.insert_row(R::TABLE, &record.fields()).await
    }

    /// Get the row count for a table.
    pub async fn row_count(&self, table: &str) -> Result<u64, PopulateError> {
        let row = self
            .client
            .query_one(&row_count_sql(table), &[])
            .await
            .map_err(|source| PopulateError::Persistence {
                table: table.to_string(),
                source,
            })?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    /// Release the connection and wait for its task to wind down.
    pub async fn close(self) {
        let Self { client, connection } = self;
        drop(client);

        if let Some(handle) = connection {
            if let Err(e) = handle.await {
                tracing::warn!("PostgreSQL connection task ended abnormally: {}", e);
            }
        }
        debug!("PostgreSQL connection closed");
    }
}

/// Convert a FieldValue to a boxed ToSql trait object.
fn field_value_to_boxed(value: FieldValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        FieldValue::Uuid(u) => Box::new(u),
        FieldValue::Text(s) => Box::new(s),
        FieldValue::Int32(i) => Box::new(i),
        FieldValue::Decimal(d) => Box::new(d),
        FieldValue::Date(d) => Box::new(d),
        FieldValue::Timestamp(ts) => Box::new(ts),
    }
}
