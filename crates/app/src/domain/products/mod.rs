//! Products

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::{ProductField, ProductsRepositoryError, ProductsServiceError};
pub use service::*;
