//! Index page listing the available tools.

use axum::response::Html;

use crate::http::render;

pub async fn show() -> Html<String> {
    let body = r#"    <p>Small demo pages for poking at HTTP requests:</p>
    <ul>
        <li><a href="/request-info">Request info</a> — echoes query parameters, headers, and cookies</li>
        <li><a href="/form-data">Form data</a> — echoes submitted form fields</li>
        <li><a href="/phone-validator">Phone validator</a> — validates and formats a phone number</li>
    </ul>
"#;
    Html(render::page("Request inspector", body))
}
