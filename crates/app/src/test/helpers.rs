//! Test Helpers

use crate::{
    domain::products::{
        ProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord,
    },
    test::TestContext,
};

pub(crate) fn new_product(name: &str, author: &str, content: &str, password: &str) -> NewProduct {
    NewProduct {
        product_name: Some(name.to_string()),
        user_name: Some(author.to_string()),
        content: Some(content.to_string()),
        password: Some(password.to_string()),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    password: &str,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(new_product(name, "alice", "listed for testing", password))
        .await
}
