use axum::{extract::State, response::Html, routing::get, Router};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/users/", get(users))
}

/// Full unfiltered listing of every student profile.
#[instrument(skip(state))]
pub async fn users(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let students = state.profiles.list_all().await?;
    let mut ctx = tera::Context::new();
    ctx.insert("students", &students);
    let body = state.templates.render("users.html", &ctx)?;
    Ok(Html(body))
}
