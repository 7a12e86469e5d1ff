use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use super::JwtKeys;
use crate::error::ApiError;

/// Identity resolved by [`require_auth`], attached to the request so
/// downstream handlers never re-parse the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Precedence for locating the raw token: the `token` query parameter wins;
/// otherwise the `Authorization` header when it splits into exactly two
/// words; otherwise empty, which verification rejects as malformed.
fn extract_token(request: &Request) -> String {
    let from_query = request.uri().query().and_then(|query| {
        query.split('&').find_map(|pair| {
            let mut it = pair.splitn(2, '=');
            match (it.next(), it.next()) {
                (Some("token"), Some(value)) if !value.is_empty() => Some(value.to_string()),
                _ => None,
            }
        })
    });
    if let Some(token) = from_query {
        return token;
    }

    let header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() == 2 {
        return parts[1].to_string();
    }

    String::new()
}

/// Validates the bearer token once per request and short-circuits with 401
/// on any failure. The resolved identity rides along as an [`AuthUser`]
/// extension.
pub async fn require_auth(
    State(keys): State<JwtKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&request);
    let user_id = keys.subject(&token)?;

    debug!(user_id = %user_id, "request authorized");
    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::AUTHORIZATION;

    fn make_request(uri: &str, authorization: Option<&str>) -> Request {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn query_parameter_wins_over_header() {
        let request = make_request("/api/v1/users?token=A", Some("Bearer B"));
        assert_eq!(extract_token(&request), "A");
    }

    #[test]
    fn header_is_used_when_query_is_absent() {
        let request = make_request("/api/v1/users", Some("Bearer B"));
        assert_eq!(extract_token(&request), "B");
    }

    #[test]
    fn empty_query_token_falls_back_to_header() {
        let request = make_request("/api/v1/users?token=", Some("Bearer B"));
        assert_eq!(extract_token(&request), "B");
    }

    #[test]
    fn header_must_split_into_exactly_two_words() {
        let request = make_request("/api/v1/users", Some("Bearer a b"));
        assert_eq!(extract_token(&request), "");

        let request = make_request("/api/v1/users", Some("token-without-scheme"));
        assert_eq!(extract_token(&request), "");
    }

    #[test]
    fn no_credentials_yields_empty_string() {
        let request = make_request("/api/v1/users", None);
        assert_eq!(extract_token(&request), "");
    }
}
