//! Session JWT authentication.
//!
//! Clients send `Authorization: Bearer <token>`. The token is HS256-signed
//! with `JWT_SECRET`, carries the user id in `sub`, and must have a valid
//! `exp` and an `iss` of [`ISSUER`].
//!
//! [`RequireAuth`] rejects with 401 JSON; `Option<RequireAuth>` never
//! rejects, for routes that answer unauthenticated callers some other way.

use axum::{
    Json,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use keyrace_business::ErrorResponse;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const ISSUER: &str = "keyrace";

/// Session lifetime for issued tokens.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// Why a request carried no usable session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Authorization header with Bearer token is required")]
    MissingToken,
    #[error("Authorization header must be in format: Bearer <token>")]
    InvalidFormat,
    #[error("{0}")]
    InvalidToken(String),
    #[error("Server configuration error")]
    MissingConfig,
}

impl SessionError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidToken(_) => "invalid_token",
            Self::MissingConfig => "server_error",
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingConfig => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        };
        let body = ErrorResponse::new(self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Signs a session token for `user_id`.
pub fn issue_session_token(user_id: &str, jwt_secret: &str) -> Result<String, SessionError> {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: user_id.to_owned(),
        iat: now,
        exp: now + SESSION_TTL_SECS,
        iss: ISSUER.to_owned(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| SessionError::InvalidToken(format!("Failed to sign token: {e}")))
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let value = headers.get(AUTHORIZATION).ok_or(SessionError::MissingToken)?;
    let value = value.to_str().map_err(|_| SessionError::InvalidFormat)?;
    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(SessionError::InvalidFormat),
    }
}

fn validate_session_token(token: &str, jwt_secret: &str) -> Result<SessionClaims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        let reason = match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => "Token has expired".to_owned(),
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                "Invalid token signature".to_owned()
            }
            jsonwebtoken::errors::ErrorKind::InvalidIssuer => "Invalid token issuer".to_owned(),
            _ => format!("Token validation failed: {e}"),
        };
        SessionError::InvalidToken(reason)
    })
}

fn claims_from_parts(parts: &Parts) -> Result<SessionClaims, SessionError> {
    let config = parts
        .extensions
        .get::<Config>()
        .ok_or(SessionError::MissingConfig)?;
    let token = extract_bearer_token(&parts.headers)?;
    validate_session_token(token, config.jwt_secret())
}

/// A caller with a valid session.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    claims: SessionClaims,
}

impl RequireAuth {
    pub fn user_id(&self) -> &str {
        &self.claims.sub
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts).inspect_err(|e| {
            tracing::debug!(reason = %e, "Rejected session");
        })?;
        Ok(Self { claims })
    }
}

/// Lets handlers take `Option<RequireAuth>` when a missing session is not
/// an error in itself.
impl<S> OptionalFromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(claims_from_parts(parts).ok().map(|claims| Self { claims }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-jwt-secret-for-unit-tests";

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().expect("valid header value"));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc")), Ok("abc"));
        assert_eq!(
            extract_bearer_token(&HeaderMap::new()),
            Err(SessionError::MissingToken)
        );
        assert_eq!(
            extract_bearer_token(&headers("abc")),
            Err(SessionError::InvalidFormat)
        );
        assert_eq!(
            extract_bearer_token(&headers("Bearer ")),
            Err(SessionError::InvalidFormat)
        );
    }

    #[test]
    fn test_issued_token_validates() {
        let token = issue_session_token("user-1", TEST_SECRET).expect("token signs");
        let claims = validate_session_token(&token, TEST_SECRET).expect("token validates");

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.iss, ISSUER);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_session_token("user-1", TEST_SECRET).expect("token signs");
        let err = validate_session_token(&token, "other-secret").expect_err("must fail");
        assert_eq!(
            err,
            SessionError::InvalidToken("Invalid token signature".to_owned())
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let past = Utc::now().timestamp() - 3600;
        let claims = SessionClaims {
            sub: "user-1".to_owned(),
            iat: past - 60,
            exp: past,
            iss: ISSUER.to_owned(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("token signs");

        let err = validate_session_token(&token, TEST_SECRET).expect_err("must fail");
        assert_eq!(err, SessionError::InvalidToken("Token has expired".to_owned()));
    }

    #[test]
    fn test_error_response_status() {
        assert_eq!(
            SessionError::MissingToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            SessionError::MissingConfig.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
