//! Products Data
//!
//! Input shapes as submitted by callers. Every field is optional here so the
//! service can report the first missing one in a fixed order.

use crate::domain::products::records::ProductStatus;

/// New Product Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub product_name: Option<String>,
    pub user_name: Option<String>,
    pub content: Option<String>,
    pub password: Option<String>,
}

/// Product Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub product_name: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub password: Option<String>,
}

/// Product Deletion Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDeletion {
    pub password: Option<String>,
}

/// Validated fields for inserting a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInsert {
    pub product_name: String,
    pub user_name: String,
    pub content: String,
    pub password: String,
}

/// Validated replacement values for a product's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductChanges {
    pub product_name: String,
    pub content: String,
    pub status: ProductStatus,
}
