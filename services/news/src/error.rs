use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// News service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("category not found")]
    CategoryNotFound,
    #[error("news not found")]
    NewsNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("news with this title already exists")]
    DuplicateNewsTitle,
    #[error("forbidden")]
    Forbidden,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl NewsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::NewsNotFound => "NEWS_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::DuplicateNewsTitle => "DUPLICATE_NEWS_TITLE",
            Self::Forbidden => "FORBIDDEN",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for NewsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CategoryNotFound | Self::NewsNotFound | Self::CommentNotFound => {
                StatusCode::NOT_FOUND
            }
            // The duplicate-title rejection is surfaced as a plain 400, not
            // 409, matching the public API contract.
            Self::DuplicateNewsTitle | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: NewsServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_category_not_found() {
        assert_error(
            NewsServiceError::CategoryNotFound,
            StatusCode::NOT_FOUND,
            "CATEGORY_NOT_FOUND",
            "category not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_news_not_found() {
        assert_error(
            NewsServiceError::NewsNotFound,
            StatusCode::NOT_FOUND,
            "NEWS_NOT_FOUND",
            "news not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_comment_not_found() {
        assert_error(
            NewsServiceError::CommentNotFound,
            StatusCode::NOT_FOUND,
            "COMMENT_NOT_FOUND",
            "comment not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_duplicate_news_title_as_bad_request() {
        assert_error(
            NewsServiceError::DuplicateNewsTitle,
            StatusCode::BAD_REQUEST,
            "DUPLICATE_NEWS_TITLE",
            "news with this title already exists",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            NewsServiceError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_missing_data() {
        assert_error(
            NewsServiceError::MissingData,
            StatusCode::BAD_REQUEST,
            "MISSING_DATA",
            "missing data",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            NewsServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
