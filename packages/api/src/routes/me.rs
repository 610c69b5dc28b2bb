use axum::{routing::get, Json, Router};
use shared::models::user::User;

use crate::{middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

async fn me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
