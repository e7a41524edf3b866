//! Request inspector page.
//!
//! Echoes the query parameters, headers, and cookies of the current
//! request back as HTML tables, in the order they arrived.

use axum::extract::Query;
use axum::http::HeaderMap;
use axum::response::Html;

use crate::http::render;
use crate::http::request::parse_cookies;

pub async fn show(
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Html<String> {
    let header_rows: Vec<(String, String)> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let cookie_rows = parse_cookies(&headers);

    tracing::debug!(
        params = params.len(),
        headers = header_rows.len(),
        cookies = cookie_rows.len(),
        "Rendering request info"
    );

    let body = format!(
        "    <h2>Query parameters</h2>\n{}    <h2>Headers</h2>\n{}    <h2>Cookies</h2>\n{}",
        render::kv_table(&params),
        render::kv_table(&header_rows),
        render::kv_table(&cookie_rows),
    );
    Html(render::page("Request info", &body))
}
