//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Authenticated user identity injected by the gateway via the
/// `x-newswire-user-id` and `x-newswire-user-active` headers.
///
/// Returns 401 if either header is absent or unparsable, or if the account
/// is not active. Ownership enforcement (403) is done by the comment use
/// cases after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub active: bool,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-newswire-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let active = parts
            .headers
            .get("x-newswire-user-active")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<bool>().ok());

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let active = active.ok_or(StatusCode::UNAUTHORIZED)?;
            if !active {
                return Err(StatusCode::UNAUTHORIZED);
            }
            Ok(Self { user_id, active })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use http::Request;

    async fn extract_identity(headers: Vec<(&str, &str)>) -> Result<IdentityHeaders, StatusCode> {
        let mut builder = Request::builder().method("GET").uri("/test");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, _body) = request.into_parts();
        IdentityHeaders::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn should_extract_valid_identity_headers() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![
            ("x-newswire-user-id", &user_id.to_string()),
            ("x-newswire-user-active", "true"),
        ])
        .await;

        let identity = result.unwrap();
        assert_eq!(identity.user_id, user_id);
        assert!(identity.active);
    }

    #[tokio::test]
    async fn should_reject_missing_user_id() {
        let result = extract_identity(vec![("x-newswire-user-active", "true")]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_invalid_uuid() {
        let result = extract_identity(vec![
            ("x-newswire-user-id", "not-a-uuid"),
            ("x-newswire-user-active", "true"),
        ])
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_missing_active_flag() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![("x-newswire-user-id", &user_id.to_string())]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_inactive_user() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![
            ("x-newswire-user-id", &user_id.to_string()),
            ("x-newswire-user-active", "false"),
        ])
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_unparsable_active_flag() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![
            ("x-newswire-user-id", &user_id.to_string()),
            ("x-newswire-user-active", "yes"),
        ])
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
