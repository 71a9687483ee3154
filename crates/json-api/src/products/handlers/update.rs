//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::products::data::ProductUpdate;

use crate::{errors::ApiError, extensions::*, products::get::ProductResponse, state::State};

use super::parse_product_uuid;

/// Update Product Request
///
/// Name, content and status are replaced as a whole; `passWord` must match
/// the stored password.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_password")]
    pub pass_word: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            product_name: request.product_name,
            content: request.content,
            status: request.status,
            password: request.pass_word,
        }
    }
}

/// Product Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductUpdatedResponse {
    pub success: bool,
    pub message: String,
    pub product: ProductResponse,
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Password does not match"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing field, invalid status or duplicate name"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(
        product_uuid = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductUpdatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_uuid(&product.into_inner())?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));

    if let Some(status) = &request.status {
        span.record("status", tracing::field::display(status));
    }

    let product = state
        .app
        .products
        .update_product(product, request.into())
        .await?;

    Ok(Json(ProductUpdatedResponse {
        success: true,
        message: "product updated".to_string(),
        product: product.into(),
    }))
}
