//! Phone validator page.
//!
//! GET renders the form; POST runs the submitted value through
//! [`validate_phone`] and re-renders the form with either the formatted
//! number or the error message next to the field. An empty submission is
//! a field error and never reaches the normalizer.

use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use crate::http::render::{self, escape_html};
use crate::phone::validate_phone;

const REQUIRED_MESSAGE: &str = "This field is required.";

#[derive(Debug, Deserialize)]
pub struct PhoneForm {
    #[serde(default)]
    pub phone: String,
}

pub async fn show() -> Html<String> {
    Html(render::page("Phone validator", &form_body("", None, None)))
}

pub async fn submit(Form(form): Form<PhoneForm>) -> Html<String> {
    let (error, formatted) = if form.phone.is_empty() {
        (Some(REQUIRED_MESSAGE.to_string()), None)
    } else {
        match validate_phone(&form.phone) {
            Ok(formatted) => (None, Some(formatted)),
            Err(e) => (Some(e.to_string()), None),
        }
    };

    tracing::debug!(
        valid = formatted.is_some(),
        error = error.as_deref().unwrap_or(""),
        "Phone validation"
    );

    let body = form_body(&form.phone, error.as_deref(), formatted.as_deref());
    Html(render::page("Phone validator", &body))
}

/// Render the phone form, preserving the submitted value and showing
/// the field error or the formatted result when present.
fn form_body(value: &str, error: Option<&str>, formatted: Option<&str>) -> String {
    let mut body = format!(
        r#"    <form method="post" action="/phone-validator">
        <label for="phone">Phone number</label>
        <input type="text" id="phone" name="phone" value="{}">
"#,
        escape_html(value)
    );

    if let Some(message) = error {
        body.push_str(&format!(
            "        <p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    body.push_str("        <button type=\"submit\">Validate</button>\n    </form>\n");

    if let Some(number) = formatted {
        body.push_str(&format!(
            "    <div class=\"result\">Formatted number: <strong>{}</strong></div>\n",
            escape_html(number)
        ));
    }

    body
}
