//! Product Errors

use salvo::http::StatusCode;
use tracing::error;

use bazaar_app::domain::products::{ProductField, ProductsServiceError};

use crate::errors::{ApiError, ErrorCode};

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::MissingField(field) => {
                ApiError::bad_request(missing_field_code(field), error.to_string())
            }
            ProductsServiceError::InvalidStatus(_) => {
                ApiError::bad_request(ErrorCode::InvalidStatus, error.to_string())
            }
            ProductsServiceError::AlreadyExists => ApiError::bad_request(
                ErrorCode::ProductAlreadyExists,
                "a product with this name already exists",
            ),
            ProductsServiceError::NotFound => product_not_found(),
            ProductsServiceError::PasswordMismatch => ApiError::new(
                StatusCode::FORBIDDEN,
                ErrorCode::PasswordMismatch,
                "password does not match",
            ),
            ProductsServiceError::Repository(source) => {
                error!("products store failure: {source}");

                ApiError::internal()
            }
        }
    }
}

pub(crate) fn product_not_found() -> ApiError {
    ApiError::not_found(ErrorCode::ProductNotFound, "product not found")
}

fn missing_field_code(field: ProductField) -> ErrorCode {
    match field {
        ProductField::ProductName => ErrorCode::MissingProductName,
        ProductField::UserName => ErrorCode::MissingUserName,
        ProductField::Content => ErrorCode::MissingContent,
        ProductField::PassWord => ErrorCode::MissingPassword,
        ProductField::Status => ErrorCode::MissingStatus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_its_own_missing_code() {
        let codes = [
            ProductField::ProductName,
            ProductField::UserName,
            ProductField::Content,
            ProductField::PassWord,
            ProductField::Status,
        ]
        .map(missing_field_code);

        for (index, code) in codes.iter().enumerate() {
            assert!(
                !codes.iter().skip(index + 1).any(|other| other == code),
                "{code:?} is shared by more than one field"
            );
        }
    }
}
