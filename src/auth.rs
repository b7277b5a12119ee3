//! # Admin Authentication
//!
//! Credential check plus HS256 JWT issue/verify for the `/admin` endpoints.
//! Protected handlers take an [`AdminClaims`] argument; the extractor pulls
//! the bearer token out of the `Authorization` header and rejects the request
//! with a 401 before the handler body runs.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{config::Config, error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

/// Check the configured credentials and mint a bearer token.
pub fn login(config: &Config, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    if request.username != config.admin_username || request.password != config.admin_password {
        return Err(AppError::InvalidCredentials);
    }

    let claims = Claims {
        sub: request.username.clone(),
        exp: Utc::now().timestamp() as u64 + config.token_ttl_secs,
    };

    let access_token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(LoginResponse {
        access_token,
        token_type: "bearer",
        expires_in: config.token_ttl_secs,
    })
}

pub fn verify_token(config: &Config, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

/// Verified claims of the calling admin.
pub struct AdminClaims(pub Claims);

impl FromRequestParts<Arc<AppState>> for AdminClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        verify_token(&state.config, token).map(AdminClaims)
    }
}
