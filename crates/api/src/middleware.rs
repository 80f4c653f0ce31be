use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use stockroom_auth::{Principal, TokenVerifier};

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Resolve the request's [`Principal`] from the `Authorization` header.
///
/// No header means `Anonymous` — the request still proceeds, because some
/// routes are public and per-route authorization makes the access
/// decision. A header that is present but unusable (malformed, bad
/// signature, expired) is a credential failure: 401, distinct from an
/// authorization Deny.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let principal = match bearer_token(req.headers())? {
        None => Principal::Anonymous,
        Some(token) => {
            let claims = state
                .verifier
                .verify(token, Utc::now())
                .map_err(|_e| StatusCode::UNAUTHORIZED)?;
            claims.to_principal()
        }
    };

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, StatusCode> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Some(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn missing_header_resolves_to_no_token() {
        assert_eq!(bearer_token(&HeaderMap::new()), Ok(None));
    }

    #[test]
    fn bearer_header_yields_the_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Ok(Some("abc.def.ghi")));
    }

    #[test]
    fn non_bearer_scheme_is_a_credential_failure() {
        let headers = headers_with("Basic dXNlcjpwdw==");
        assert_eq!(bearer_token(&headers), Err(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn empty_bearer_token_is_a_credential_failure() {
        let headers = headers_with("Bearer ");
        assert_eq!(bearer_token(&headers), Err(StatusCode::UNAUTHORIZED));
    }
}
