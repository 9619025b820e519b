//! sea-orm implementations of the repository traits. Each call borrows a
//! connection from the pool for its own duration; nothing here holds database
//! state across requests.

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect,
};

use newswire_domain::pagination::PageRequest;
use newswire_news_schema::{categories, comments, news};

use crate::domain::repository::{CategoryRepository, CommentRepository, NewsRepository};
use crate::domain::types::{
    Category, CategoryChanges, Comment, CommentChanges, NewCategory, NewComment, NewNews, News,
    NewsChanges,
};
use crate::error::NewsServiceError;

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Category>, NewsServiceError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, NewsServiceError> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }

    async fn insert(&self, new: NewCategory) -> Result<Category, NewsServiceError> {
        let model = categories::ActiveModel {
            name: Set(new.name),
            created: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert category")?;
        Ok(category_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: CategoryChanges,
    ) -> Result<Option<Category>, NewsServiceError> {
        let Some(model) = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find category for update")?
        else {
            return Ok(None);
        };
        let Some(name) = changes.name else {
            // Empty change set: nothing to persist.
            return Ok(Some(category_from_model(model)));
        };
        let mut am = model.into_active_model();
        am.name = Set(name);
        let model = am.update(&self.db).await.context("update category")?;
        Ok(Some(category_from_model(model)))
    }

    async fn delete(&self, id: i32) -> Result<bool, NewsServiceError> {
        let result = categories::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete category")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        created: model.created,
    }
}

// ── News repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNewsRepository {
    pub db: DatabaseConnection,
}

impl NewsRepository for DbNewsRepository {
    async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<News>, NewsServiceError> {
        let mut query = news::Entity::find().order_by_asc(news::Column::Id);
        if let Some(search) = search {
            query = query.filter(news::Column::Title.contains(search));
        }
        let models = query
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list news")?;
        Ok(models.into_iter().map(news_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, NewsServiceError> {
        let model = news::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find news by id")?;
        Ok(model.map(news_from_model))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<News>, NewsServiceError> {
        let model = news::Entity::find()
            .filter(news::Column::Title.eq(title))
            .one(&self.db)
            .await
            .context("find news by title")?;
        Ok(model.map(news_from_model))
    }

    async fn insert(&self, new: NewNews) -> Result<News, NewsServiceError> {
        let model = news::ActiveModel {
            title: Set(new.title),
            content: Set(new.content),
            author: Set(new.author),
            created: Set(new.created.unwrap_or_else(Utc::now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert news")?;
        Ok(news_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: NewsChanges,
    ) -> Result<Option<News>, NewsServiceError> {
        let Some(model) = news::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find news for update")?
        else {
            return Ok(None);
        };
        if changes.title.is_none() && changes.content.is_none() && changes.author.is_none() {
            return Ok(Some(news_from_model(model)));
        }
        let mut am = model.into_active_model();
        if let Some(title) = changes.title {
            am.title = Set(title);
        }
        if let Some(content) = changes.content {
            am.content = Set(content);
        }
        if let Some(author) = changes.author {
            am.author = Set(author);
        }
        let model = am.update(&self.db).await.context("update news")?;
        Ok(Some(news_from_model(model)))
    }

    async fn delete(&self, id: i32) -> Result<bool, NewsServiceError> {
        let result = news::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete news")?;
        Ok(result.rows_affected > 0)
    }
}

fn news_from_model(model: news::Model) -> News {
    News {
        id: model.id,
        title: model.title,
        content: model.content,
        author: model.author,
        created: model.created,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn list_by_news(
        &self,
        news_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, NewsServiceError> {
        let models = comments::Entity::find()
            .filter(comments::Column::NewsId.eq(news_id))
            .order_by_asc(comments::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list comments by news")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, NewsServiceError> {
        let model = comments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn insert(&self, new: NewComment) -> Result<Comment, NewsServiceError> {
        let now = Utc::now();
        let model = comments::ActiveModel {
            text: Set(new.text),
            created: Set(now),
            updated: Set(now),
            user_id: Set(new.user_id),
            news_id: Set(new.news_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert comment")?;
        Ok(comment_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: CommentChanges,
    ) -> Result<Option<Comment>, NewsServiceError> {
        let Some(model) = comments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find comment for update")?
        else {
            return Ok(None);
        };
        if changes.text.is_none() && changes.news_id.is_none() {
            return Ok(Some(comment_from_model(model)));
        }
        let mut am = model.into_active_model();
        if let Some(text) = changes.text {
            am.text = Set(text);
        }
        if let Some(news_id) = changes.news_id {
            am.news_id = Set(news_id);
        }
        am.updated = Set(Utc::now());
        let model = am.update(&self.db).await.context("update comment")?;
        Ok(Some(comment_from_model(model)))
    }

    async fn delete(&self, id: i32) -> Result<bool, NewsServiceError> {
        let result = comments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(model: comments::Model) -> Comment {
    Comment {
        id: model.id,
        text: model.text,
        created: model.created,
        updated: model.updated,
        user_id: model.user_id,
        news_id: model.news_id,
    }
}
