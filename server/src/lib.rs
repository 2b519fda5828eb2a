//! Backend for the Dona Capivara storefront.
//!
//!
//!
//! # General Infrastructure
//! - Storefront frontend stays a static site; this backend only answers delivery quotes and checkout handoffs
//! - Frontend talks to the VPS public endpoint, reverse proxy forwards into this container
//! - Checkout never submits an order here: we compute the totals, render the WhatsApp message and hand back a wa.me link
//! - The WhatsApp conversation is the order of record, the shop owner confirms everything there
//!
//!
//!
//! # Pricing Strategies
//!
//! **Goal**: one deployment, one rule. The two pricing rules are separate experiments and must not silently fall back into each other.
//!
//! - `flat`: the frontend classifies the customer zone (neighbor or not) and sends a distance, we run the base + per-km formula
//! - `geo`: the frontend sends the raw address, we geocode it and ask the routing service for real road distance, then charge by tier
//! - `PRICING_STRATEGY` picks one per deployment; `flat` is the default since it cannot strand a checkout on a third-party outage
//! - If the geo services fail we refuse the quote. Charging 0 or guessing a fee is a financial error, the frontend must flag the
//!   order for manual fee resolution instead
//!
//!
//!
//! # Notes
//!
//! ## Why proxy Geoapify
//! We could geocode straight from the frontend. But, the API key would live in the browser and the pricing rule would be
//! client-editable. Keeping both calls here means the key stays in a Docker secret and a quote is computed exactly once,
//! server-side, with the same code path checkout uses.
//!
//! The extra hop costs one backend round trip per quote. Quotes happen once per checkout, not per keystroke, so that
//! trip is insignificant next to the two outbound calls themselves.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run -p server
//! ```
//!
//! Smoke-test a running server.
//! ```sh
//! cargo run -p tester
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};

use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod checkout;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use routes::{checkout_handler, quote_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/quote", post(quote_handler))
        .route("/checkout", post(checkout_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
