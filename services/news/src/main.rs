use sea_orm::Database;
use tracing::info;

use newswire_core::config::Config as _;
use newswire_core::tracing::init_tracing;
use newswire_news::config::NewsConfig;
use newswire_news::router::build_router;
use newswire_news::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = NewsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.news_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("news service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
