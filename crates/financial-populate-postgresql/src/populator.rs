//! Financial database populator.

use crate::error::PopulateError;
use crate::gateway::PostgreSQLGateway;
use crate::schema::FINANCIAL_TABLES;
use financial_generator::DataGenerator;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Identifiers of the rows inserted by one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub customer_id: Uuid,
    pub address_id: Uuid,
    pub order_id: Uuid,
    pub item_id: Uuid,
    pub order_detail_id: Uuid,
}

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of cycles completed.
    pub cycles: u64,
    /// Number of rows inserted across all tables.
    pub rows_inserted: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Creates the financial tables and fills them with generated records.
pub struct FinancialPopulator {
    gateway: PostgreSQLGateway,
    generator: DataGenerator,
}

impl FinancialPopulator {
    pub fn new(gateway: PostgreSQLGateway, generator: DataGenerator) -> Self {
        Self { gateway, generator }
    }

    pub fn gateway(&self) -> &PostgreSQLGateway {
        &self.gateway
    }

    /// Create every table, parents first.
    pub async fn create_tables(&self) -> Result<(), PopulateError> {
        for table in &FINANCIAL_TABLES {
            self.gateway.create_table(table).await?;
        }
        Ok(())
    }

    /// Generate and insert one record per table.
    ///
    /// Parent identifiers are threaded into the children so every foreign
    /// key resolves. Each insert commits on its own; a failure part way
    /// leaves the rows inserted before it in place.
    pub async fn populate_once(&mut self) -> Result<CycleReport, PopulateError> {
        let customer = self.generator.generate_customer();
        self.gateway.insert_record(&customer).await?;

        let address = self.generator.generate_address(customer.id);
        self.gateway.insert_record(&address).await?;

        let order = self.generator.generate_order(customer.id);
        self.gateway.insert_record(&order).await?;

        let item = self.generator.generate_item();
        self.gateway.insert_record(&item).await?;

        let order_detail = self.generator.generate_order_details(order.id, item.id);
        self.gateway.insert_record(&order_detail).await?;

        debug!(
            "Inserted customer {} with order {} ({})",
            customer.id, order.id, order.status
        );

        Ok(CycleReport {
            customer_id: customer.id,
            address_id: address.id,
            order_id: order.id,
            item_id: item.id,
            order_detail_id: order_detail.id,
        })
    }

    /// Create the tables, then run `cycles` population cycles.
    pub async fn run(&mut self, cycles: u64) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        self.create_tables().await?;

        for _ in 0..cycles {
            self.populate_once().await?;
            metrics.cycles += 1;
            metrics.rows_inserted += FINANCIAL_TABLES.len() as u64;
        }

        metrics.total_duration = start_time.elapsed();
        info!(
            "Population complete: {} cycles, {} rows in {:?}",
            metrics.cycles, metrics.rows_inserted, metrics.total_duration
        );

        Ok(metrics)
    }

    /// Close the underlying connection.
    pub async fn close(self) {
        self.gateway.close().await;
    }
}
