//! Delete Product Handler

use std::sync::Arc;

use salvo::{
    http::ParseError,
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::products::data::ProductDeletion;

use crate::{
    errors::{ApiError, ErrorCode},
    extensions::*,
    state::State,
};

use super::parse_product_uuid;

/// Delete Product Request
///
/// The body is optional; without one the delete carries no password.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteProductRequest {
    #[serde(default, deserialize_with = "super::deserialize_password")]
    pub pass_word: Option<String>,
}

async fn read_request(req: &mut Request) -> Result<DeleteProductRequest, ApiError> {
    let invalid =
        |error: ParseError| ApiError::bad_request(ErrorCode::InvalidRequest, error.to_string());

    let empty = req
        .payload()
        .await
        .map_err(invalid)?
        .iter()
        .all(u8::is_ascii_whitespace);

    if empty {
        return Ok(DeleteProductRequest::default());
    }

    req.parse_json().await.map_err(invalid)
}

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    request_body = Option<DeleteProductRequest>,
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Password does not match"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(product, req, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_uuid(&product.into_inner())?;
    let request = read_request(req).await?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(
            product,
            ProductDeletion {
                password: request.pass_word,
            },
        )
        .await?;

    Ok(Json(ProductDeletedResponse {
        success: true,
        message: "product deleted".to_string(),
    }))
}
