//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ApiError, ErrorCode},
    extensions::*,
    products::get::ProductResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub success: bool,

    /// Every product, newest first
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns every product, newest first. An empty collection is reported as
/// `404 NO_PRODUCTS` rather than an empty list.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products found"),
        (status_code = StatusCode::NOT_FOUND, description = "No products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products().await?;

    if products.is_empty() {
        return Err(ApiError::not_found(
            ErrorCode::NoProducts,
            "no products found",
        ));
    }

    Ok(Json(ProductsResponse {
        success: true,
        products: products.into_iter().map(Into::into).collect(),
    }))
}
