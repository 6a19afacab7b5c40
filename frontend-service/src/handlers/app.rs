use askama::Template;
use axum::response::Html;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Serves the landing page for both `/` and `/index.html`.
pub async fn index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexTemplate {}.render()?))
}
