//! Product Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Listing state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Still available.
    #[default]
    ForSale,

    /// No longer available.
    SoldOut,
}

impl ProductStatus {
    /// Stored and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForSale => "FOR_SALE",
            Self::SoldOut => "SOLD_OUT",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a status string is neither `FOR_SALE` nor `SOLD_OUT`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product status: {0}")]
pub struct UnknownProductStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownProductStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "FOR_SALE" => Ok(Self::ForSale),
            "SOLD_OUT" => Ok(Self::SoldOut),
            other => Err(UnknownProductStatus(other.to_string())),
        }
    }
}

/// Product Record
///
/// `password` holds the listing password exactly as submitted. It is only
/// ever compared for equality and must never be rendered to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub product_name: String,
    pub user_name: String,
    pub content: String,
    pub password: String,
    pub status: ProductStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Whether `candidate` matches the stored password exactly.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
