//! Landing page with a minimal upload form.

use axum::response::Html;

/// `GET /` - compiled-in upload page.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
