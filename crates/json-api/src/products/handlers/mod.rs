//! Product Handlers

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

use bazaar_app::domain::products::records::ProductUuid;

use crate::{errors::ApiError, products::errors::product_not_found};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Path segments that are not UUIDs cannot name a product.
fn parse_product_uuid(raw: &str) -> Result<ProductUuid, ApiError> {
    raw.parse::<ProductUuid>()
        .map_err(|_invalid| product_not_found())
}

/// `passWord` may be sent as a JSON string or number. Numbers are kept as
/// their decimal text, so `1234` and `"1234"` name the same password.
fn deserialize_password<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_other) => Err(D::Error::custom("passWord must be a string or a number")),
    }
}
