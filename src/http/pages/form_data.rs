//! Form-submission echo page.
//!
//! GET renders a demo form posting to itself; POST echoes the decoded
//! urlencoded pairs back as a table. No field is validated or stored.

use axum::response::Html;
use axum::Form;

use crate::http::render;

const FORM: &str = r#"    <form method="post" action="/form-data">
        <label for="name">Name</label>
        <input type="text" id="name" name="name">
        <label for="email">Email</label>
        <input type="text" id="email" name="email">
        <label for="message">Message</label>
        <input type="text" id="message" name="message">
        <button type="submit">Send</button>
    </form>
"#;

pub async fn show() -> Html<String> {
    Html(render::page("Form data", FORM))
}

pub async fn submit(Form(fields): Form<Vec<(String, String)>>) -> Html<String> {
    tracing::debug!(fields = fields.len(), "Echoing submitted form");

    let body = format!(
        "    <h2>Submitted fields</h2>\n{}{}",
        render::kv_table(&fields),
        FORM
    );
    Html(render::page("Form data", &body))
}
