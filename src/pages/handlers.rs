use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/test/:id/:name", get(test))
        .route("/batch/:class_name", get(batch))
        .route("/dept/:dept_name", get(department))
        .route("/about/", get(about))
}

#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut ctx = tera::Context::new();
    ctx.insert("lang", "Rust");
    ctx.insert("list", &["Books", "Pens", "Vegies"]);
    // Demo values, there is no real login.
    ctx.insert("user_logged_in", &true);
    ctx.insert("username", "asha");
    let body = state.templates.render("home.html", &ctx)?;
    Ok(Html(body))
}

#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = state.templates.render("about.html", &tera::Context::new())?;
    Ok(Html(body))
}

/// Path parameters are interpolated verbatim, no escaping.
#[instrument]
pub async fn test(Path((id, name)): Path<(String, String)>) -> String {
    format!("Hi, I am {} and my I'd is {}", name, id)
}

#[instrument]
pub async fn batch(Path(class_name): Path<String>) -> String {
    format!("I am in Batch {}", class_name)
}

#[instrument]
pub async fn department(Path(dept_name): Path<String>) -> String {
    format!("I am in {} department", dept_name)
}
