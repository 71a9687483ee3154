//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::products::data::NewProduct;

use crate::{errors::ApiError, extensions::*, products::get::ProductResponse, state::State};

/// Create Product Request
///
/// Every field is required; absent and blank values are reported per field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub product_name: Option<String>,
    pub user_name: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_password")]
    pub pass_word: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            product_name: request.product_name,
            user_name: request.user_name,
            content: request.content,
            password: request.pass_word,
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    pub success: bool,
    pub message: String,
    pub product: ProductResponse,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing field or duplicate name"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product.uuid));

    res.add_header(LOCATION, format!("/api/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        success: true,
        message: "product created".to_string(),
        product: product.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::products::{
        MockProductsService, ProductField, ProductsServiceError, records::ProductUuid,
    };

    use crate::{
        errors::{ErrorCode, ErrorResponse},
        test_helpers::{TEST_PASSWORD, make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    fn chair_request() -> NewProduct {
        NewProduct {
            product_name: Some("chair".to_string()),
            user_name: Some("alice".to_string()),
            content: Some("wood chair".to_string()),
            password: Some(TEST_PASSWORD.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| *new == chair_request())
            .return_once(move |_| Ok(product));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "productName": "chair",
                "userName": "alice",
                "content": "wood chair",
                "passWord": TEST_PASSWORD,
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/products/{uuid}").as_str()));
        assert!(body.success, "create response must report success");
        assert_eq!(body.product.product_id, uuid.into_uuid());
        assert_eq!(body.product.status, "FOR_SALE");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_name_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "productName": "chair",
                "userName": "bob",
                "content": "metal chair",
                "passWord": "9999",
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(!body.success, "error response must not report success");
        assert_eq!(body.code, ErrorCode::ProductAlreadyExists);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_field_passes_through_as_none() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    content: None,
                    ..chair_request()
                }
            })
            .return_once(|_| Err(ProductsServiceError::MissingField(ProductField::Content)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "productName": "chair",
                "userName": "alice",
                "passWord": TEST_PASSWORD,
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, ErrorCode::MissingContent);
        assert_eq!(body.error_message, "content is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_json_returns_invalid_request() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .raw_json("{\"productName\": ")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.code, ErrorCode::InvalidRequest);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_numeric_password_is_stored_as_text() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    password: Some("1234".to_string()),
                    ..chair_request()
                }
            })
            .return_once(move |_| Ok(product));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "productName": "chair",
                "userName": "alice",
                "content": "wood chair",
                "passWord": 1234,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }
}
