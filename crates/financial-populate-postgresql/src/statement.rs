//! SQL text builders.
//!
//! Only identifiers from the static schema reach the SQL text; row values are
//! always sent as bound parameters.

use crate::schema::TableSchema;

/// Build the idempotent DDL batch for a table.
///
/// Creates the table if absent and sets `REPLICA IDENTITY FULL` so change
/// data capture consumers see complete before-images on update and delete.
pub fn create_table_sql(table: &TableSchema) -> String {
    let columns = table
        .columns
        .iter()
        .map(|(name, definition)| format!("{name} {definition}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "CREATE TABLE IF NOT EXISTS {name} ({columns}); ALTER TABLE {name} REPLICA IDENTITY FULL;",
        name = table.name
    )
}

/// Build a parameterized single-row INSERT statement.
pub fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();

    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table,
        columns
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

pub fn row_count_sql(table: &str) -> String {
    format!("SELECT COUNT(*) FROM \"{table}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CUSTOMER, ORDERS};

    #[test]
    fn test_create_table_sql() {
        let sql = create_table_sql(&ORDERS);

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS orders ("));
        assert!(sql.contains("id UUID PRIMARY KEY, customer_id UUID"));
        assert!(sql.contains("status VARCHAR(50)"));
        assert!(sql.contains("FOREIGN KEY (customer_id) REFERENCES customer(id)"));
        assert!(sql.ends_with("ALTER TABLE orders REPLICA IDENTITY FULL;"));
    }

    #[test]
    fn test_create_table_sql_keeps_column_order() {
        let sql = create_table_sql(&CUSTOMER);
        let positions: Vec<usize> = CUSTOMER
            .columns
            .iter()
            .map(|(name, definition)| sql.find(&format!("{name} {definition}")).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_insert_sql() {
        let sql = insert_sql("orders", &["id", "customer_id", "order_date", "status"]);
        assert_eq!(
            sql,
            "INSERT INTO \"orders\" (\"id\", \"customer_id\", \"order_date\", \"status\") VALUES ($1, $2, $3, $4)"
        );
    }

    #[test]
    fn test_row_count_sql() {
        assert_eq!(row_count_sql("items"), "SELECT COUNT(*) FROM \"items\"");
    }
}
