use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

mod cache;
mod clients;
mod database;
mod errors;
mod format;
mod handlers;
mod lottery;
mod models;
mod notify;
mod routes;
mod state;

use cache::DrawCache;
use clients::caixa::CaixaClient;
use database::connection::get_db_pool;
use notify::sink::ResendSink;
use routes::{bets, config, draws, notifications};
use state::AppState;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = get_db_pool().await;

    let state = AppState {
        pool,
        cache: DrawCache::new(),
        lottery: CaixaClient::from_env(),
        sink: Arc::new(ResendSink::from_env()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    // Build application
    let app = Router::new()
        .route("/", get(|| async { "Mega-Sena results API" }))
        .nest("/api/sorteios", draws::routes())
        .nest("/api/apostas", bets::routes())
        .nest("/api/notificacoes", notifications::routes())
        .nest("/api/configuracao", config::routes())
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
