use axum::{extract::FromRequestParts, http::request::Parts};
use shared::models::user::User;
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};

/// The caller, as vouched for by the reverse proxy in front of the API.
///
/// The proxy authenticates the request and forwards the username in the
/// configured header; unknown usernames are registered on first sight.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(&*state.auth_header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                debug!("Missing or unreadable {} header", state.auth_header);
                ApiError::Unauthorized
            })?;

        let user = state
            .user_service
            .get_or_create_user(username)
            .await
            .map_err(|e| {
                error!("Failed to resolve user {}: {}", username, e);
                ApiError::from(e)
            })?;

        Ok(AuthenticatedUser(user))
    }
}
