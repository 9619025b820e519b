//! News article CRUD. Like categories these handlers call the repository
//! directly; the one business rule (duplicate-title rejection) lives in
//! [`insert_unique_title`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use newswire_domain::pagination::PageRequest;

use crate::domain::repository::NewsRepository;
use crate::domain::types::{NewNews, News, NewsChanges};
use crate::error::NewsServiceError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct NewsResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(serialize_with = "newswire_core::serde::to_rfc3339_ms")]
    pub created: chrono::DateTime<chrono::Utc>,
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            title: news.title,
            content: news.content,
            author: news.author,
            created: news.created,
        }
    }
}

// ── GET /news ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NewsListQuery {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub search: Option<String>,
}

fn default_limit() -> u64 {
    10
}

pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsListQuery>,
) -> Result<Json<Vec<NewsResponse>>, NewsServiceError> {
    let page = PageRequest {
        offset: query.offset,
        limit: query.limit,
    };
    let news = state
        .news_repo()
        .list(query.search.as_deref(), page)
        .await?;
    Ok(Json(news.into_iter().map(Into::into).collect()))
}

// ── GET /news/{news_id} ──────────────────────────────────────────────────────

pub async fn get_news_item(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<Json<NewsResponse>, NewsServiceError> {
    let news = state
        .news_repo()
        .find_by_id(news_id)
        .await?
        .ok_or(NewsServiceError::NewsNotFound)?;
    Ok(Json(news.into()))
}

// ── POST /news ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    /// Optional client-supplied creation timestamp; server time when absent.
    pub created: Option<chrono::DateTime<chrono::Utc>>,
}

/// Reject a duplicate title by lookup, then insert. The check and the insert
/// are separate statements, so concurrent creates with the same title can
/// still race past each other; the store enforces no unique constraint.
async fn insert_unique_title<R: NewsRepository>(
    repo: &R,
    new: NewNews,
) -> Result<News, NewsServiceError> {
    if repo.find_by_title(&new.title).await?.is_some() {
        return Err(NewsServiceError::DuplicateNewsTitle);
    }
    repo.insert(new).await
}

pub async fn create_news(
    State(state): State<AppState>,
    Json(body): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<NewsResponse>), NewsServiceError> {
    let news = insert_unique_title(
        &state.news_repo(),
        NewNews {
            title: body.title,
            content: body.content,
            author: body.author,
            created: body.created,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(news.into())))
}

// ── PUT /news/{news_id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateNewsRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

pub async fn update_news(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
    Json(body): Json<UpdateNewsRequest>,
) -> Result<Json<NewsResponse>, NewsServiceError> {
    let news = state
        .news_repo()
        .update(
            news_id,
            NewsChanges {
                title: Some(body.title),
                content: Some(body.content),
                author: Some(body.author),
            },
        )
        .await?
        .ok_or(NewsServiceError::NewsNotFound)?;
    Ok(Json(news.into()))
}

// ── PATCH /news/{news_id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PatchNewsRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

pub async fn partial_update_news(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
    Json(body): Json<PatchNewsRequest>,
) -> Result<Json<NewsResponse>, NewsServiceError> {
    let news = state
        .news_repo()
        .update(
            news_id,
            NewsChanges {
                title: body.title,
                content: body.content,
                author: body.author,
            },
        )
        .await?
        .ok_or(NewsServiceError::NewsNotFound)?;
    Ok(Json(news.into()))
}

// ── DELETE /news/{news_id} ───────────────────────────────────────────────────

pub async fn delete_news(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<StatusCode, NewsServiceError> {
    let deleted = state.news_repo().delete(news_id).await?;
    if !deleted {
        return Err(NewsServiceError::NewsNotFound);
    }
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockNewsRepo {
        existing_title: Option<String>,
        inserted: Mutex<Option<NewNews>>,
    }

    impl NewsRepository for MockNewsRepo {
        async fn list(
            &self,
            _search: Option<&str>,
            _page: PageRequest,
        ) -> Result<Vec<News>, NewsServiceError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<News>, NewsServiceError> {
            Ok(None)
        }

        async fn find_by_title(&self, title: &str) -> Result<Option<News>, NewsServiceError> {
            Ok(self
                .existing_title
                .as_deref()
                .filter(|t| *t == title)
                .map(|t| News {
                    id: 1,
                    title: t.into(),
                    content: "c".into(),
                    author: "a".into(),
                    created: Utc::now(),
                }))
        }

        async fn insert(&self, new: NewNews) -> Result<News, NewsServiceError> {
            let created = new.created.unwrap_or_else(Utc::now);
            let news = News {
                id: 2,
                title: new.title.clone(),
                content: new.content.clone(),
                author: new.author.clone(),
                created,
            };
            *self.inserted.lock().unwrap() = Some(new);
            Ok(news)
        }

        async fn update(
            &self,
            _id: i32,
            _changes: NewsChanges,
        ) -> Result<Option<News>, NewsServiceError> {
            Ok(None)
        }

        async fn delete(&self, _id: i32) -> Result<bool, NewsServiceError> {
            Ok(false)
        }
    }

    fn new_article(title: &str) -> NewNews {
        NewNews {
            title: title.into(),
            content: "c".into(),
            author: "a".into(),
            created: None,
        }
    }

    #[tokio::test]
    async fn should_reject_duplicate_title_without_insert() {
        let repo = MockNewsRepo {
            existing_title: Some("A".into()),
            inserted: Mutex::new(None),
        };
        let result = insert_unique_title(&repo, new_article("A")).await;
        assert!(matches!(result, Err(NewsServiceError::DuplicateNewsTitle)));
        assert!(repo.inserted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn should_insert_when_title_unused() {
        let repo = MockNewsRepo {
            existing_title: Some("A".into()),
            inserted: Mutex::new(None),
        };
        let result = insert_unique_title(&repo, new_article("B")).await.unwrap();
        assert_eq!(result.title, "B");
        assert!(repo.inserted.lock().unwrap().is_some());
    }
}
