use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use newswire_core::health::{healthz, readyz};
use newswire_core::middleware::request_id_layer;

use crate::handlers::category::{
    create_category, delete_category, get_categories, get_category, partial_update_category,
    update_category,
};
use crate::handlers::comment::{
    create_comment, delete_comment, get_comment, get_comments, partial_update_comment,
    update_comment,
};
use crate::handlers::news::{
    create_news, delete_news, get_news, get_news_item, partial_update_news, update_news,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Categories
        .route("/categories", get(get_categories))
        .route("/categories", post(create_category))
        .route("/categories/{category_id}", get(get_category))
        .route("/categories/{category_id}", put(update_category))
        .route("/categories/{category_id}", patch(partial_update_category))
        .route("/categories/{category_id}", delete(delete_category))
        // News
        .route("/news", get(get_news))
        .route("/news", post(create_news))
        .route("/news/{news_id}", get(get_news_item))
        .route("/news/{news_id}", put(update_news))
        .route("/news/{news_id}", patch(partial_update_news))
        .route("/news/{news_id}", delete(delete_news))
        // Comments (list nested under the news resource so the single-comment
        // route stays reachable)
        .route("/news/{news_id}/comments", get(get_comments))
        .route("/comments", post(create_comment))
        .route("/comments/{comment_id}", get(get_comment))
        .route("/comments/{comment_id}", put(update_comment))
        .route("/comments/{comment_id}", patch(partial_update_comment))
        .route("/comments/{comment_id}", delete(delete_comment))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
