//! Fixed table layout of the financial demo database.

/// A table definition as an ordered column-name to definition mapping.
///
/// Entries whose name is a table constraint, such as
/// `("FOREIGN KEY (customer_id)", "REFERENCES customer(id)")`, are rendered
/// verbatim next to the real columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [(&'static str, &'static str)],
}

pub const CUSTOMER: TableSchema = TableSchema {
    name: "customer",
    columns: &[
        ("id", "UUID PRIMARY KEY"),
        ("user_name", "VARCHAR(255)"),
        ("name", "VARCHAR(255)"),
        ("sex", "CHAR(1)"),
        ("email", "VARCHAR(255)"),
        ("birthdate", "DATE"),
        ("create_date", "TIMESTAMP"),
    ],
};

pub const ORDERS: TableSchema = TableSchema {
    name: "orders",
    columns: &[
        ("id", "UUID PRIMARY KEY"),
        ("customer_id", "UUID"),
        ("order_date", "TIMESTAMP"),
        ("status", "VARCHAR(50)"),
        ("FOREIGN KEY (customer_id)", "REFERENCES customer(id)"),
    ],
};

pub const ADDRESSES: TableSchema = TableSchema {
    name: "addresses",
    columns: &[
        ("id", "UUID PRIMARY KEY"),
        ("customer_id", "UUID"),
        ("address", "VARCHAR(255)"),
        ("city", "VARCHAR(255)"),
        ("state", "VARCHAR(255)"),
        ("zip_code", "VARCHAR(10)"),
        ("country", "VARCHAR(255)"),
        ("FOREIGN KEY (customer_id)", "REFERENCES customer(id)"),
    ],
};

pub const ITEMS: TableSchema = TableSchema {
    name: "items",
    columns: &[
        ("id", "UUID PRIMARY KEY"),
        ("name", "VARCHAR(255)"),
        ("description", "TEXT"),
        ("price", "DECIMAL(10, 2)"),
        ("create_date", "TIMESTAMP"),
    ],
};

pub const ORDER_DETAILS: TableSchema = TableSchema {
    name: "order_details",
    columns: &[
        ("id", "UUID PRIMARY KEY"),
        ("order_id", "UUID"),
        ("item_id", "UUID"),
        ("quantity", "INTEGER"),
        ("price", "DECIMAL(10, 2)"),
        ("FOREIGN KEY (order_id)", "REFERENCES orders(id)"),
        ("FOREIGN KEY (item_id)", "REFERENCES items(id)"),
    ],
};

/// All tables, parents before children.
pub static FINANCIAL_TABLES: [TableSchema; 5] = [CUSTOMER, ORDERS, ADDRESSES, ITEMS, ORDER_DETAILS];

/// Table names in creation order.
pub fn table_names() -> Vec<&'static str> {
    FINANCIAL_TABLES.iter().map(|table| table.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use financial_generator::{Address, Customer, Item, Order, OrderDetail, Record};

    fn get_table(name: &str) -> Option<&'static TableSchema> {
        FINANCIAL_TABLES.iter().find(|table| table.name == name)
    }

    /// Names of the real columns, skipping constraint entries.
    fn column_names(table: &TableSchema) -> Vec<&'static str> {
        table
            .columns
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !name.to_ascii_uppercase().starts_with("FOREIGN KEY"))
            .collect()
    }

    #[test]
    fn test_table_order() {
        assert_eq!(
            table_names(),
            vec!["customer", "orders", "addresses", "items", "order_details"]
        );
    }

    #[test]
    fn test_get_table() {
        assert_eq!(get_table("items"), Some(&ITEMS));
        assert!(get_table("nonexistent").is_none());
    }

    #[test]
    fn test_column_names_skip_constraints() {
        assert_eq!(
            column_names(&ORDER_DETAILS),
            vec!["id", "order_id", "item_id", "quantity", "price"]
        );
    }

    #[test]
    fn test_parents_created_before_children() {
        let position = |name: &str| table_names().iter().position(|t| *t == name).unwrap();

        for table in FINANCIAL_TABLES {
            for (entry, definition) in table.columns {
                if let Some(rest) = definition.strip_prefix("REFERENCES ") {
                    assert!(entry.starts_with("FOREIGN KEY"));
                    let parent = rest.split('(').next().unwrap();
                    assert!(position(parent) < position(table.name));
                }
            }
        }
    }

    #[test]
    fn test_record_tables_match_schema() {
        assert!(get_table(Customer::TABLE).is_some());
        assert!(get_table(Order::TABLE).is_some());
        assert!(get_table(Address::TABLE).is_some());
        assert!(get_table(Item::TABLE).is_some());
        assert!(get_table(OrderDetail::TABLE).is_some());
    }

    #[test]
    fn test_record_fields_match_columns() {
        let mut generator = financial_generator::DataGenerator::new(Some(3));
        let customer = generator.generate_customer();
        let order = generator.generate_order(customer.id);
        let address = generator.generate_address(customer.id);
        let item = generator.generate_item();
        let detail = generator.generate_order_details(order.id, item.id);

        let names = |fields: Vec<(&'static str, financial_generator::FieldValue)>| {
            fields.into_iter().map(|(c, _)| c).collect::<Vec<_>>()
        };

        assert_eq!(names(customer.fields()), column_names(&CUSTOMER));
        assert_eq!(names(order.fields()), column_names(&ORDERS));
        assert_eq!(names(address.fields()), column_names(&ADDRESSES));
        assert_eq!(names(item.fields()), column_names(&ITEMS));
        assert_eq!(names(detail.fields()), column_names(&ORDER_DETAILS));
    }
}
