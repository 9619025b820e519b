use chrono::{DateTime, Utc};
use uuid::Uuid;

/// News category.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created: DateTime<Utc>,
}

/// News article.
#[derive(Debug, Clone)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

/// Comment on a news article. `user_id` is the owning identity; only the
/// owner may mutate or delete the comment.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub user_id: Uuid,
    pub news_id: i32,
}

// ── Insert payloads ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub author: String,
    /// Client-supplied creation timestamp; server time when `None`.
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub news_id: i32,
    pub user_id: Uuid,
}

// ── Change sets ──────────────────────────────────────────────────────────────
//
// Explicit per-entity field lists for update merging. A full update builds a
// change set with every mutable field populated; a partial update with only
// the fields the caller supplied. Unknown fields never reach this layer.

#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewsChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommentChanges {
    pub text: Option<String>,
    pub news_id: Option<i32>,
}
