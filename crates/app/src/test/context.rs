//! Test context for service-level integration tests.

use crate::domain::products::PgProductsService;

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;

        Self {
            products: PgProductsService::from_pool(db.pool().clone()),
            db,
        }
    }

    /// Number of rows currently stored in the products collection.
    pub async fn product_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count products")
    }
}
