use sea_orm::DatabaseConnection;

use crate::infra::db::{DbCategoryRepository, DbCommentRepository, DbNewsRepository};

/// Shared application state passed to every handler via axum `State`.
///
/// Holds the connection pool handle explicitly; repositories are constructed
/// per call from it, so no database state lives in module globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn news_repo(&self) -> DbNewsRepository {
        DbNewsRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }
}
