//! Products errors.

use std::fmt;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Caller-supplied product fields, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    ProductName,
    UserName,
    Content,
    PassWord,
    Status,
}

impl ProductField {
    /// Field name as it appears in request bodies.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::UserName => "userName",
            Self::Content => "content",
            Self::PassWord => "passWord",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsRepositoryError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("{0} is required")]
    MissingField(ProductField),

    #[error("status must be FOR_SALE or SOLD_OUT, got {0:?}")]
    InvalidStatus(String),

    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("password does not match")]
    PasswordMismatch,

    #[error("product store failure")]
    Repository(#[source] ProductsRepositoryError),
}

impl From<ProductsRepositoryError> for ProductsServiceError {
    fn from(error: ProductsRepositoryError) -> Self {
        match error {
            ProductsRepositoryError::AlreadyExists => Self::AlreadyExists,
            ProductsRepositoryError::NotFound => Self::NotFound,
            other @ (ProductsRepositoryError::MissingRequiredData
            | ProductsRepositoryError::InvalidData
            | ProductsRepositoryError::Sql(_)) => Self::Repository(other),
        }
    }
}
