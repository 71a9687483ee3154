//! Bazaar JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    catcher::Catcher,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use bazaar_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

fn api_router() -> Router {
    Router::with_path("api").push(
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(
                Router::with_path("{product}")
                    .get(products::get::handler)
                    .patch(products::update::handler)
                    .delete(products::delete::handler),
            ),
    )
}

fn build_service(app: AppContext, metrics_enabled: bool) -> Service {
    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::shared(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(api_router());

    let doc = OpenApi::new("Bazaar API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    if metrics_enabled {
        router = router.push(Router::with_path("metrics").get(observability::metrics_handler));
    }

    Service::new(router).catcher(Catcher::default().hoop(errors::structured_errors))
}

/// Bazaar JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "no subscriber was installed, eprintln is the only sink"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let app = match AppContext::from_database(&config.database_options()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(build_service(app, config.observability.metrics_enabled))
        .await;

    info!("server stopped");
}
