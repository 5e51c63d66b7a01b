//! Master table row models.
//!
//! Ids are `i64` to match the warehouse's BIGINT columns. Field order
//! matches the artifacts' column order; each struct serializes directly
//! into one delimited record.

use serde::Serialize;

/// One row of the category master table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    /// Stable 1-based category id.
    pub category_id: i64,
    /// Display name of the category.
    pub category_name: String,
}

impl CategoryRow {
    /// The artifact's header record, in column order.
    pub const HEADER: [&'static str; 2] = ["category_id", "category_name"];
}

/// One row of the service master table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRow {
    /// Stable 1-based service id.
    pub service_id: i64,
    /// Display name of the service plan.
    pub service_name: String,
}

impl ServiceRow {
    /// The artifact's header record, in column order.
    pub const HEADER: [&'static str; 2] = ["service_id", "service_name"];
}

/// One row of the product master table.
///
/// Category and service attributes are denormalized onto the row, the
/// shape the warehouse's products table expects from the bulk load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    /// Sequential 1-based product id, assigned in generation order.
    pub product_id: i64,
    /// Templated display name.
    pub product_name: String,
    /// Id of the owning category.
    pub category_id: i64,
    /// Name of the owning category.
    pub category_name: String,
    /// Id of the service plan.
    pub service_id: i64,
    /// Name of the service plan.
    pub service_name: String,
}

impl ProductRow {
    /// The artifact's header record, in column order.
    pub const HEADER: [&'static str; 6] = [
        "product_id",
        "product_name",
        "category_id",
        "category_name",
        "service_id",
        "service_name",
    ];
}
