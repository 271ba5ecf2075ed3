//! Record types produced by the generator.
//!
//! Each record knows the table it belongs to and how to flatten itself into
//! ordered `(column, value)` pairs, so the persistence side never needs to
//! know anything about the financial domain.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// A database-neutral field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
    Int32(i32),
    Decimal(Decimal),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

/// A generated row destined for a single table.
pub trait Record {
    /// Name of the table the record is inserted into.
    const TABLE: &'static str;

    /// Column/value pairs in table column order.
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;
}

/// Sex code of a customer profile, stored as a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in the order they are sampled from.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub user_name: String,
    pub name: String,
    pub sex: Sex,
    pub email: String,
    pub birthdate: NaiveDate,
    pub create_date: NaiveDateTime,
}

impl Record for Customer {
    const TABLE: &'static str = "customer";

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Uuid(self.id)),
            ("user_name", FieldValue::Text(self.user_name.clone())),
            ("name", FieldValue::Text(self.name.clone())),
            ("sex", FieldValue::Text(self.sex.code().to_string())),
            ("email", FieldValue::Text(self.email.clone())),
            ("birthdate", FieldValue::Date(self.birthdate)),
            ("create_date", FieldValue::Timestamp(self.create_date)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
}

impl Record for Order {
    const TABLE: &'static str = "orders";

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Uuid(self.id)),
            ("customer_id", FieldValue::Uuid(self.customer_id)),
            ("order_date", FieldValue::Timestamp(self.order_date)),
            ("status", FieldValue::Text(self.status.as_str().to_string())),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Record for Address {
    const TABLE: &'static str = "addresses";

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Uuid(self.id)),
            ("customer_id", FieldValue::Uuid(self.customer_id)),
            ("address", FieldValue::Text(self.address.clone())),
            ("city", FieldValue::Text(self.city.clone())),
            ("state", FieldValue::Text(self.state.clone())),
            ("zip_code", FieldValue::Text(self.zip_code.clone())),
            ("country", FieldValue::Text(self.country.clone())),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub create_date: NaiveDateTime,
}

impl Record for Item {
    const TABLE: &'static str = "items";

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Uuid(self.id)),
            ("name", FieldValue::Text(self.name.clone())),
            ("description", FieldValue::Text(self.description.clone())),
            ("price", FieldValue::Decimal(self.price)),
            ("create_date", FieldValue::Timestamp(self.create_date)),
        ]
    }
}

/// One line of an order.
///
/// `price` is drawn on its own and does not follow the referenced item's price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: Uuid,
    pub order_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

impl Record for OrderDetail {
    const TABLE: &'static str = "order_details";

    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", FieldValue::Uuid(self.id)),
            ("order_id", FieldValue::Uuid(self.order_id)),
            ("item_id", FieldValue::Uuid(self.item_id)),
            ("quantity", FieldValue::Int32(self.quantity)),
            ("price", FieldValue::Decimal(self.price)),
        ]
    }
}
