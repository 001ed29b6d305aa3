use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use parlor_core::auth::verify_token;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated caller, inserted as a request extension once the
/// bearer token has been validated.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

/// Reject requests without a valid bearer token. Claims are decoded into a
/// typed structure; any missing or malformed field fails closed.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;
    let claims = verify_token(state.jwt_secret(), &token)
        .map_err(|err| AppError::unauthorized(format!("token rejected: {err}")))?;

    request.extensions_mut().insert(AuthUser {
        id: claims.sub,
        username: claims.username,
    });
    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("missing authorization header"))?;

    let Some(token) = header_value.strip_prefix("Bearer ") else {
        return Err(AppError::unauthorized("authorization header is not a bearer token"));
    };

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let err = extract_bearer_token(&request_with_auth(None)).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let err = extract_bearer_token(&request_with_auth(Some("Basic abc"))).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_token_is_extracted() {
        let token = extract_bearer_token(&request_with_auth(Some("Bearer abc.def.ghi"))).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }
}
