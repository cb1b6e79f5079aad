//! Embedded front-end pages
//!
//! The markup is compiled into the binary so the server ships as a single
//! artifact with no asset directory to deploy.

use axum::{Router, response::Html, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(employee_page))
}

/// Employee directory page
pub async fn employee_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
