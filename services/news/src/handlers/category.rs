//! Category CRUD. Plain persistence mapping with no business rules, so the
//! handlers talk to the repository directly instead of going through a use
//! case layer.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use newswire_domain::pagination::PageRequest;

use crate::domain::repository::CategoryRepository;
use crate::domain::types::{Category, CategoryChanges, NewCategory};
use crate::error::NewsServiceError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    #[serde(serialize_with = "newswire_core::serde::to_rfc3339_ms")]
    pub created: chrono::DateTime<chrono::Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created: category.created,
        }
    }
}

// ── GET /categories ──────────────────────────────────────────────────────────

pub async fn get_categories(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<CategoryResponse>>, NewsServiceError> {
    let categories = state.category_repo().list(page).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

// ── GET /categories/{category_id} ────────────────────────────────────────────

pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<CategoryResponse>, NewsServiceError> {
    let category = state
        .category_repo()
        .find_by_id(category_id)
        .await?
        .ok_or(NewsServiceError::CategoryNotFound)?;
    Ok(Json(category.into()))
}

// ── POST /categories ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), NewsServiceError> {
    let category = state
        .category_repo()
        .insert(NewCategory { name: body.name })
        .await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

// ── PUT /categories/{category_id} ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, NewsServiceError> {
    let category = state
        .category_repo()
        .update(
            category_id,
            CategoryChanges {
                name: Some(body.name),
            },
        )
        .await?
        .ok_or(NewsServiceError::CategoryNotFound)?;
    Ok(Json(category.into()))
}

// ── PATCH /categories/{category_id} ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct PatchCategoryRequest {
    pub name: Option<String>,
}

pub async fn partial_update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(body): Json<PatchCategoryRequest>,
) -> Result<Json<CategoryResponse>, NewsServiceError> {
    let category = state
        .category_repo()
        .update(category_id, CategoryChanges { name: body.name })
        .await?
        .ok_or(NewsServiceError::CategoryNotFound)?;
    Ok(Json(category.into()))
}

// ── DELETE /categories/{category_id} ─────────────────────────────────────────

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<StatusCode, NewsServiceError> {
    let deleted = state.category_repo().delete(category_id).await?;
    if !deleted {
        return Err(NewsServiceError::CategoryNotFound);
    }
    Ok(StatusCode::OK)
}
