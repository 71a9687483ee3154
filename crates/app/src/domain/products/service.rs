//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::domain::products::{
    data::{NewProduct, ProductChanges, ProductDeletion, ProductInsert, ProductUpdate},
    errors::{ProductField, ProductsServiceError},
    records::{ProductRecord, ProductStatus, ProductUuid},
    repository::{PgProductsRepository, ProductsRepository},
};

/// Products service over any [`ProductsRepository`].
#[derive(Debug, Clone)]
pub struct RepositoryProductsService<R> {
    repository: R,
}

/// Products service backed by `PostgreSQL`.
pub type PgProductsService = RepositoryProductsService<PgProductsRepository>;

impl<R: ProductsRepository> RepositoryProductsService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl PgProductsService {
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(PgProductsRepository::new(pool))
    }
}

fn required(value: Option<String>, field: ProductField) -> Result<String, ProductsServiceError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(ProductsServiceError::MissingField(field))
}

fn verified_password(
    current: &ProductRecord,
    supplied: Option<String>,
) -> Result<String, ProductsServiceError> {
    supplied
        .filter(|password| current.password_matches(password))
        .ok_or(ProductsServiceError::PasswordMismatch)
}

#[async_trait]
impl<R: ProductsRepository> ProductsService for RepositoryProductsService<R> {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products().await?)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.get_product(product).await?)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product_name = required(product.product_name, ProductField::ProductName)?;
        let user_name = required(product.user_name, ProductField::UserName)?;
        let content = required(product.content, ProductField::Content)?;
        let password = required(product.password, ProductField::PassWord)?;

        if self
            .repository
            .find_product_by_name(product_name.clone())
            .await?
            .is_some()
        {
            return Err(ProductsServiceError::AlreadyExists);
        }

        // The unique index still rejects a concurrent insert of the same name.
        let created = self
            .repository
            .create_product(ProductInsert {
                product_name,
                user_name,
                content,
                password,
            })
            .await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let current = self.repository.get_product(product).await?;

        let password = verified_password(&current, update.password).inspect_err(|_| {
            debug!(product_uuid = %product, "update rejected: password mismatch");
        })?;

        let product_name = required(update.product_name, ProductField::ProductName)?;
        let content = required(update.content, ProductField::Content)?;
        let status = required(update.status, ProductField::Status)?
            .parse::<ProductStatus>()
            .map_err(|unknown| ProductsServiceError::InvalidStatus(unknown.0))?;

        let updated = self
            .repository
            .update_product(
                product,
                password,
                ProductChanges {
                    product_name,
                    content,
                    status,
                },
            )
            .await?;

        info!(product_uuid = %product, status = %updated.status, "updated product");

        Ok(updated)
    }

    async fn delete_product(
        &self,
        product: ProductUuid,
        deletion: ProductDeletion,
    ) -> Result<(), ProductsServiceError> {
        let current = self.repository.get_product(product).await?;

        let password = verified_password(&current, deletion.password).inspect_err(|_| {
            debug!(product_uuid = %product, "delete rejected: password mismatch");
        })?;

        let rows_affected = self.repository.delete_product(product, password).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        info!(product_uuid = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, newest first.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Validates and creates a new product listed as for sale.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces the name, content and status of a product after checking its password.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product after checking its password.
    async fn delete_product(
        &self,
        product: ProductUuid,
        deletion: ProductDeletion,
    ) -> Result<(), ProductsServiceError>;
}
