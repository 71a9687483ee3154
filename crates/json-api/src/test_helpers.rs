//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use bazaar_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductRecord, ProductStatus, ProductUuid},
    },
};

use crate::{errors::structured_errors, state::State};

pub(crate) const TEST_PASSWORD: &str = "hunter2";

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        product_name: "chair".to_string(),
        user_name: "alice".to_string(),
        content: "wood chair".to_string(),
        password: TEST_PASSWORD.to_string(),
        status: ProductStatus::ForSale,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::shared(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
    .catcher(Catcher::default().hoop(structured_errors))
}
