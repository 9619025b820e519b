//! Comment HTTP surface. Reads are public; create requires an authenticated
//! active identity; update/patch/delete additionally require ownership,
//! enforced by the comment use cases.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use newswire_auth_types::identity::IdentityHeaders;
use newswire_domain::pagination::PageRequest;

use crate::domain::types::{Comment, CommentChanges};
use crate::error::NewsServiceError;
use crate::state::AppState;
use crate::usecase::comment::{
    CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase, GetCommentUseCase,
    GetCommentsUseCase, PartialUpdateCommentUseCase, UpdateCommentInput, UpdateCommentUseCase,
};

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: i32,
    pub text: String,
    #[serde(serialize_with = "newswire_core::serde::to_rfc3339_ms")]
    pub created: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "newswire_core::serde::to_rfc3339_ms")]
    pub updated: chrono::DateTime<chrono::Utc>,
    pub user_id: String,
    pub news_id: i32,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            created: comment.created,
            updated: comment.updated,
            user_id: comment.user_id.to_string(),
            news_id: comment.news_id,
        }
    }
}

// ── GET /news/{news_id}/comments ─────────────────────────────────────────────

pub async fn get_comments(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<CommentResponse>>, NewsServiceError> {
    let usecase = GetCommentsUseCase {
        repo: state.comment_repo(),
    };
    let comments = usecase.execute(news_id, page).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

// ── GET /comments/{comment_id} ───────────────────────────────────────────────

pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<Json<CommentResponse>, NewsServiceError> {
    let usecase = GetCommentUseCase {
        repo: state.comment_repo(),
    };
    let comment = usecase.execute(comment_id).await?;
    Ok(Json(comment.into()))
}

// ── POST /comments ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    pub news_id: i32,
}

pub async fn create_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), NewsServiceError> {
    let usecase = CreateCommentUseCase {
        repo: state.comment_repo(),
    };
    let comment = usecase
        .execute(
            identity.user_id,
            CreateCommentInput {
                text: body.text,
                news_id: body.news_id,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}

// ── PUT /comments/{comment_id} ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
    pub news_id: i32,
}

pub async fn update_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, NewsServiceError> {
    let usecase = UpdateCommentUseCase {
        repo: state.comment_repo(),
    };
    let comment = usecase
        .execute(
            identity.user_id,
            comment_id,
            UpdateCommentInput {
                text: body.text,
                news_id: body.news_id,
            },
        )
        .await?;
    Ok(Json(comment.into()))
}

// ── PATCH /comments/{comment_id} ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PatchCommentRequest {
    pub text: Option<String>,
    pub news_id: Option<i32>,
}

pub async fn partial_update_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    Json(body): Json<PatchCommentRequest>,
) -> Result<Json<CommentResponse>, NewsServiceError> {
    let usecase = PartialUpdateCommentUseCase {
        repo: state.comment_repo(),
    };
    let comment = usecase
        .execute(
            identity.user_id,
            comment_id,
            CommentChanges {
                text: body.text,
                news_id: body.news_id,
            },
        )
        .await?;
    Ok(Json(comment.into()))
}

// ── DELETE /comments/{comment_id} ────────────────────────────────────────────

pub async fn delete_comment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
) -> Result<StatusCode, NewsServiceError> {
    let usecase = DeleteCommentUseCase {
        repo: state.comment_repo(),
    };
    usecase.execute(identity.user_id, comment_id).await?;
    Ok(StatusCode::OK)
}
