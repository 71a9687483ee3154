//! Handler state injected into every request's depot.

use std::sync::Arc;

use bazaar_app::context::AppContext;

pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
