//! Comment use cases — the one place business rules live: ownership
//! enforcement and full/partial update merge semantics.

use uuid::Uuid;

use newswire_domain::pagination::PageRequest;

use crate::domain::repository::CommentRepository;
use crate::domain::types::{Comment, CommentChanges, NewComment};
use crate::error::NewsServiceError;

/// Authorization predicate shared by update, partial update, and delete.
/// Only the identity whose id matches `comment.user_id` may mutate it.
fn ensure_owner(comment: &Comment, actor_id: Uuid) -> Result<(), NewsServiceError> {
    if comment.user_id != actor_id {
        return Err(NewsServiceError::Forbidden);
    }
    Ok(())
}

// ── GetComments ──────────────────────────────────────────────────────────────

pub struct GetCommentsUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> GetCommentsUseCase<R> {
    /// Public read; no ownership check. Offset/limit pass through to the store.
    pub async fn execute(
        &self,
        news_id: i32,
        page: PageRequest,
    ) -> Result<Vec<Comment>, NewsServiceError> {
        self.repo.list_by_news(news_id, page).await
    }
}

// ── GetComment ───────────────────────────────────────────────────────────────

pub struct GetCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> GetCommentUseCase<R> {
    pub async fn execute(&self, comment_id: i32) -> Result<Comment, NewsServiceError> {
        self.repo
            .find_by_id(comment_id)
            .await?
            .ok_or(NewsServiceError::CommentNotFound)
    }
}

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentInput {
    pub text: String,
    pub news_id: i32,
}

pub struct CreateCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> CreateCommentUseCase<R> {
    /// The actor is already authenticated and active (extractor precondition);
    /// the new comment is owned by the actor.
    pub async fn execute(
        &self,
        actor_id: Uuid,
        input: CreateCommentInput,
    ) -> Result<Comment, NewsServiceError> {
        self.repo
            .insert(NewComment {
                text: input.text,
                news_id: input.news_id,
                user_id: actor_id,
            })
            .await
    }
}

// ── UpdateComment (full replace) ─────────────────────────────────────────────

pub struct UpdateCommentInput {
    pub text: String,
    pub news_id: i32,
}

pub struct UpdateCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> UpdateCommentUseCase<R> {
    /// Replaces every mutable field. Presence of both fields is guaranteed by
    /// the request schema, so nothing silently falls back to a type default.
    pub async fn execute(
        &self,
        actor_id: Uuid,
        comment_id: i32,
        input: UpdateCommentInput,
    ) -> Result<Comment, NewsServiceError> {
        let comment = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(NewsServiceError::CommentNotFound)?;
        ensure_owner(&comment, actor_id)?;
        self.repo
            .update(
                comment_id,
                CommentChanges {
                    text: Some(input.text),
                    news_id: Some(input.news_id),
                },
            )
            .await?
            .ok_or(NewsServiceError::CommentNotFound)
    }
}

// ── PartialUpdateComment ─────────────────────────────────────────────────────

pub struct PartialUpdateCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> PartialUpdateCommentUseCase<R> {
    /// Applies only the fields present in `changes`; everything else is left
    /// untouched. This is the distinguishing contract versus full update.
    pub async fn execute(
        &self,
        actor_id: Uuid,
        comment_id: i32,
        changes: CommentChanges,
    ) -> Result<Comment, NewsServiceError> {
        let comment = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(NewsServiceError::CommentNotFound)?;
        ensure_owner(&comment, actor_id)?;
        self.repo
            .update(comment_id, changes)
            .await?
            .ok_or(NewsServiceError::CommentNotFound)
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> DeleteCommentUseCase<R> {
    pub async fn execute(&self, actor_id: Uuid, comment_id: i32) -> Result<(), NewsServiceError> {
        let comment = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(NewsServiceError::CommentNotFound)?;
        ensure_owner(&comment, actor_id)?;
        let deleted = self.repo.delete(comment_id).await?;
        if !deleted {
            return Err(NewsServiceError::CommentNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory comment store keyed by id, ordered like the real table.
    struct MockCommentRepo {
        rows: Mutex<BTreeMap<i32, Comment>>,
        next_id: Mutex<i32>,
    }

    impl MockCommentRepo {
        fn new() -> Self {
            Self {
                rows: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            }
        }

        fn with_rows(rows: Vec<Comment>) -> Self {
            let next = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            Self {
                rows: Mutex::new(rows.into_iter().map(|c| (c.id, c)).collect()),
                next_id: Mutex::new(next),
            }
        }

        fn get(&self, id: i32) -> Option<Comment> {
            self.rows.lock().unwrap().get(&id).cloned()
        }
    }

    impl CommentRepository for MockCommentRepo {
        async fn list_by_news(
            &self,
            news_id: i32,
            page: PageRequest,
        ) -> Result<Vec<Comment>, NewsServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .values()
                .filter(|c| c.news_id == news_id)
                .skip(page.offset as usize)
                .take(page.limit as usize)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, NewsServiceError> {
            Ok(self.get(id))
        }

        async fn insert(&self, new: NewComment) -> Result<Comment, NewsServiceError> {
            let mut next = self.next_id.lock().unwrap();
            let now = Utc::now();
            let comment = Comment {
                id: *next,
                text: new.text,
                created: now,
                updated: now,
                user_id: new.user_id,
                news_id: new.news_id,
            };
            *next += 1;
            self.rows
                .lock()
                .unwrap()
                .insert(comment.id, comment.clone());
            Ok(comment)
        }

        async fn update(
            &self,
            id: i32,
            changes: CommentChanges,
        ) -> Result<Option<Comment>, NewsServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let Some(comment) = rows.get_mut(&id) else {
                return Ok(None);
            };
            if let Some(text) = changes.text {
                comment.text = text;
            }
            if let Some(news_id) = changes.news_id {
                comment.news_id = news_id;
            }
            comment.updated = Utc::now();
            Ok(Some(comment.clone()))
        }

        async fn delete(&self, id: i32) -> Result<bool, NewsServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }

    fn comment(id: i32, user_id: Uuid, news_id: i32, text: &str) -> Comment {
        let now = Utc::now();
        Comment {
            id,
            text: text.into(),
            created: now,
            updated: now,
            user_id,
            news_id,
        }
    }

    #[tokio::test]
    async fn should_reject_update_by_non_owner() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let repo = MockCommentRepo::with_rows(vec![comment(1, owner, 1, "hello")]);
        let usecase = UpdateCommentUseCase { repo };
        let result = usecase
            .execute(
                stranger,
                1,
                UpdateCommentInput {
                    text: "hijacked".into(),
                    news_id: 1,
                },
            )
            .await;
        assert!(matches!(result, Err(NewsServiceError::Forbidden)));
        // Row untouched.
        assert_eq!(usecase.repo.get(1).unwrap().text, "hello");
    }

    #[tokio::test]
    async fn should_reject_partial_update_by_non_owner() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let repo = MockCommentRepo::with_rows(vec![comment(1, owner, 1, "hello")]);
        let usecase = PartialUpdateCommentUseCase { repo };
        let result = usecase
            .execute(
                stranger,
                1,
                CommentChanges {
                    text: Some("hijacked".into()),
                    news_id: None,
                },
            )
            .await;
        assert!(matches!(result, Err(NewsServiceError::Forbidden)));
    }

    #[tokio::test]
    async fn should_reject_delete_by_non_owner() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let repo = MockCommentRepo::with_rows(vec![comment(1, owner, 1, "hello")]);
        let usecase = DeleteCommentUseCase { repo };
        let result = usecase.execute(stranger, 1).await;
        assert!(matches!(result, Err(NewsServiceError::Forbidden)));
        // Row still present.
        assert!(usecase.repo.get(1).is_some());
    }

    #[tokio::test]
    async fn should_full_update_replace_text_and_news_id_keeping_owner() {
        let owner = Uuid::new_v4();
        let repo = MockCommentRepo::with_rows(vec![comment(1, owner, 1, "old")]);
        let usecase = UpdateCommentUseCase { repo };
        let updated = usecase
            .execute(
                owner,
                1,
                UpdateCommentInput {
                    text: "x".into(),
                    news_id: 5,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "x");
        assert_eq!(updated.news_id, 5);
        assert_eq!(updated.user_id, owner);
        let stored = usecase.repo.get(1).unwrap();
        assert_eq!(stored.text, "x");
        assert_eq!(stored.news_id, 5);
    }

    #[tokio::test]
    async fn should_partial_update_change_only_supplied_fields() {
        let owner = Uuid::new_v4();
        let before = comment(1, owner, 3, "old");
        let repo = MockCommentRepo::with_rows(vec![before.clone()]);
        let usecase = PartialUpdateCommentUseCase { repo };
        let updated = usecase
            .execute(
                owner,
                1,
                CommentChanges {
                    text: Some("x".into()),
                    news_id: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "x");
        assert_eq!(updated.news_id, before.news_id);
        assert_eq!(updated.user_id, before.user_id);
        assert_eq!(updated.created, before.created);
    }

    #[tokio::test]
    async fn should_delete_by_owner_then_get_not_found() {
        let owner = Uuid::new_v4();
        let repo = MockCommentRepo::with_rows(vec![comment(1, owner, 1, "hello")]);
        let usecase = DeleteCommentUseCase { repo };
        usecase.execute(owner, 1).await.unwrap();

        let get = GetCommentUseCase { repo: usecase.repo };
        let result = get.execute(1).await;
        assert!(matches!(result, Err(NewsServiceError::CommentNotFound)));
    }

    #[tokio::test]
    async fn should_return_comment_not_found_on_update_missing() {
        let usecase = UpdateCommentUseCase {
            repo: MockCommentRepo::new(),
        };
        let result = usecase
            .execute(
                Uuid::new_v4(),
                42,
                UpdateCommentInput {
                    text: "x".into(),
                    news_id: 1,
                },
            )
            .await;
        assert!(matches!(result, Err(NewsServiceError::CommentNotFound)));
    }

    #[tokio::test]
    async fn should_create_comment_owned_by_actor() {
        let actor = Uuid::new_v4();
        let usecase = CreateCommentUseCase {
            repo: MockCommentRepo::new(),
        };
        let created = usecase
            .execute(
                actor,
                CreateCommentInput {
                    text: "first".into(),
                    news_id: 7,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.user_id, actor);
        assert_eq!(created.news_id, 7);
        assert_eq!(created.created, created.updated);
    }

    #[tokio::test]
    async fn should_paginate_comments_in_id_order() {
        let owner = Uuid::new_v4();
        let rows = (1..=5).map(|i| comment(i, owner, 9, "c")).collect();
        let usecase = GetCommentsUseCase {
            repo: MockCommentRepo::with_rows(rows),
        };
        let page = usecase
            .execute(
                9,
                PageRequest {
                    offset: 0,
                    limit: 2,
                },
            )
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 1);
        assert_eq!(page[1].id, 2);

        let rest = usecase
            .execute(
                9,
                PageRequest {
                    offset: 2,
                    limit: 10,
                },
            )
            .await
            .unwrap();
        assert_eq!(rest.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn should_not_list_comments_of_other_news() {
        let owner = Uuid::new_v4();
        let rows = vec![comment(1, owner, 1, "a"), comment(2, owner, 2, "b")];
        let usecase = GetCommentsUseCase {
            repo: MockCommentRepo::with_rows(rows),
        };
        let page = usecase.execute(1, PageRequest::default()).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, 1);
    }
}
