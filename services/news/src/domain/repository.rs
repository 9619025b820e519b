#![allow(async_fn_in_trait)]

use newswire_domain::pagination::PageRequest;

use crate::domain::types::{
    Category, CategoryChanges, Comment, CommentChanges, NewCategory, NewComment, NewNews, News,
    NewsChanges,
};
use crate::error::NewsServiceError;

/// Repository for news categories.
pub trait CategoryRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Category>, NewsServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, NewsServiceError>;

    async fn insert(&self, new: NewCategory) -> Result<Category, NewsServiceError>;

    /// Apply the populated fields of `changes`. Returns `None` when no row matches.
    async fn update(
        &self,
        id: i32,
        changes: CategoryChanges,
    ) -> Result<Option<Category>, NewsServiceError>;

    /// Delete a category. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, NewsServiceError>;
}

/// Repository for news articles.
pub trait NewsRepository: Send + Sync {
    /// List articles, optionally filtered by a title substring.
    async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<News>, NewsServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, NewsServiceError>;

    /// Exact-title lookup backing the duplicate-title check.
    async fn find_by_title(&self, title: &str) -> Result<Option<News>, NewsServiceError>;

    async fn insert(&self, new: NewNews) -> Result<News, NewsServiceError>;

    /// Apply the populated fields of `changes`. Returns `None` when no row matches.
    async fn update(
        &self,
        id: i32,
        changes: NewsChanges,
    ) -> Result<Option<News>, NewsServiceError>;

    /// Delete an article. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, NewsServiceError>;
}

/// Repository for comments.
pub trait CommentRepository: Send + Sync {
    /// List comments for one news article, ordered by id ascending.
    async fn list_by_news(
        &self,
        news_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, NewsServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, NewsServiceError>;

    async fn insert(&self, new: NewComment) -> Result<Comment, NewsServiceError>;

    /// Apply the populated fields of `changes` and refresh `updated`.
    /// Returns `None` when no row matches.
    async fn update(
        &self,
        id: i32,
        changes: CommentChanges,
    ) -> Result<Option<Comment>, NewsServiceError>;

    /// Delete a comment. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, NewsServiceError>;
}
