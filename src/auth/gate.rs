use std::sync::Arc;

use axum::extract::{MatchedPath, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::policy::{self, Access};
use super::token::{Claims, TokenService};
use crate::error::{Error, Result};
use crate::server::AppState;
use crate::server::response::ApiError;
use crate::types::Role;

/// Request header carrying the bearer token.
pub const TOKEN_HEADER: &str = "x-access-token";

/// Router-level middleware enforcing the route policy. Protected routes are
/// checked before their handler runs; a rejected request never reaches the
/// store. Verified claims are inserted into request extensions for handlers
/// that want them.
pub async fn authorize(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> std::result::Result<Response, ApiError> {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned());

    let access = match route.as_deref() {
        Some(route) => policy::access_for(request.method(), route),
        // No matched route; the fallback 404 needs no token.
        None => Access::Public,
    };

    if let Access::Roles(allowed) = access {
        match authorize_request(&state.tokens, request.headers(), allowed) {
            Ok(claims) => {
                request.extensions_mut().insert(claims);
            }
            Err(err) => {
                tracing::debug!(
                    "{} {} denied: {}",
                    request.method(),
                    request.uri().path(),
                    err
                );
                return Err(err.into());
            }
        }
    }

    Ok(next.run(request).await)
}

/// Checks a request's token against a role allow-list. Steps in order:
/// extract the header, verify the token, check the role.
pub fn authorize_request(
    tokens: &TokenService,
    headers: &HeaderMap,
    allowed: &[Role],
) -> Result<Claims> {
    let header = headers.get(TOKEN_HEADER).ok_or(Error::MissingToken)?;
    let token = header.to_str().map_err(|_| Error::InvalidToken)?;

    let claims = tokens.verify(token)?;

    if !allowed.contains(&claims.role) {
        return Err(Error::Forbidden);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test-signing-secret")
    }

    fn headers_with_token(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token.parse().unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let result = authorize_request(&service(), &HeaderMap::new(), &[Role::Admin]);
        assert!(matches!(result, Err(Error::MissingToken)));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let headers = headers_with_token("not-a-real-token");
        let result = authorize_request(&service(), &headers, &[Role::Admin]);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn test_allowed_role_passes() {
        let tokens = service();
        let token = tokens.issue("alice", Role::Manager).unwrap();
        let headers = headers_with_token(&token);

        let claims =
            authorize_request(&tokens, &headers, &[Role::Admin, Role::Manager]).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, Role::Manager);
    }

    #[test]
    fn test_disallowed_role_is_forbidden() {
        let tokens = service();
        let token = tokens.issue("bob", Role::Viewer).unwrap();
        let headers = headers_with_token(&token);

        let result = authorize_request(&tokens, &headers, &[Role::Admin, Role::Manager]);
        assert!(matches!(result, Err(Error::Forbidden)));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = TokenService::new(b"other-secret")
            .issue("alice", Role::Admin)
            .unwrap();
        let headers = headers_with_token(&token);

        let result = authorize_request(&service(), &headers, &[Role::Admin]);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }
}
