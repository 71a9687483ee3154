//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::products::records::ProductRecord;

use crate::{errors::ApiError, extensions::*, state::State};

use super::parse_product_uuid;

/// A product as returned to clients. The password never leaves the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub product_id: Uuid,

    /// The unique listing name
    pub product_name: String,

    /// Name of the seller who listed the product
    pub user_name: String,

    /// Listing description
    pub content: String,

    /// `FOR_SALE` or `SOLD_OUT`
    pub status: String,

    /// The date and time the product was created (RFC 3339)
    pub created_at: String,

    /// The date and time the product was last updated (RFC 3339)
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            product_id: product.uuid.into(),
            product_name: product.product_name,
            user_name: product.user_name,
            content: product.content,
            status: product.status.to_string(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Product Detail Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailResponse {
    pub success: bool,
    pub product: ProductResponse,
}

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_uuid(&product.into_inner())?;

    let product = state.app.products.get_product(product).await?;

    Ok(Json(ProductDetailResponse {
        success: true,
        product: product.into(),
    }))
}
