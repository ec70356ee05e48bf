#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use talya::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let app_state = match startup::build_app_state(&config) {
            Ok(app_state) => app_state,
            Err(e) => {
                eprintln!("Startup error: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(hotel_id = %config.hotel_id, "Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(app_state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
