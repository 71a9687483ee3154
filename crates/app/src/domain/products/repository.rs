//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    data::{ProductChanges, ProductInsert},
    errors::ProductsRepositoryError,
    records::{ProductRecord, ProductStatus, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_PRODUCT_BY_NAME_SQL: &str = include_str!("sql/find_product_by_name.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Access to the products collection.
///
/// Writes that mutate an existing product are conditional on the stored
/// password, so a concurrent password change or delete makes them match
/// nothing rather than overwrite.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products, newest first.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError>;

    /// A single product, or [`ProductsRepositoryError::NotFound`].
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsRepositoryError>;

    /// The product carrying exactly this name, if any.
    async fn find_product_by_name(
        &self,
        product_name: String,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError>;

    /// Insert a product. A name collision fails with
    /// [`ProductsRepositoryError::AlreadyExists`].
    async fn create_product(
        &self,
        product: ProductInsert,
    ) -> Result<ProductRecord, ProductsRepositoryError>;

    /// Replace the mutable fields of the product if `password` still matches.
    async fn update_product(
        &self,
        product: ProductUuid,
        password: String,
        changes: ProductChanges,
    ) -> Result<ProductRecord, ProductsRepositoryError>;

    /// Delete the product if `password` still matches, returning rows removed.
    async fn delete_product(
        &self,
        product: ProductUuid,
        password: String,
    ) -> Result<u64, ProductsRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_product_by_name(
        &self,
        product_name: String,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCT_BY_NAME_SQL)
            .bind(product_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_product(
        &self,
        product: ProductInsert,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(ProductUuid::new().into_uuid())
            .bind(product.product_name)
            .bind(product.user_name)
            .bind(product.content)
            .bind(product.password)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        password: String,
        changes: ProductChanges,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(password)
            .bind(changes.product_name)
            .bind(changes.content)
            .bind(changes.status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_product(
        &self,
        product: ProductUuid,
        password: String,
    ) -> Result<u64, ProductsRepositoryError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(password)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<ProductStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            product_name: row.try_get("product_name")?,
            user_name: row.try_get("user_name")?,
            content: row.try_get("content")?,
            password: row.try_get("password")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
