//! HTML rendering helpers.
//!
//! Pages are built with `format!` against a shared shell; no template
//! engine. Every request-derived string goes through [`escape_html`]
//! before it is interpolated into markup.

/// Escape a string for safe interpolation into HTML text or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared HTML shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 720px;
            margin: 0 auto;
            padding: 20px;
        }}
        h1 {{
            color: #1a1a1a;
            font-size: 24px;
        }}
        h2 {{
            font-size: 18px;
            margin-top: 24px;
        }}
        nav a {{
            margin-right: 14px;
        }}
        table {{
            border-collapse: collapse;
            width: 100%;
            margin: 12px 0;
        }}
        th, td {{
            border: 1px solid #ddd;
            padding: 6px 10px;
            text-align: left;
            vertical-align: top;
            word-break: break-all;
        }}
        th {{
            background-color: #f0f0f0;
        }}
        label {{
            display: block;
            margin-top: 12px;
            font-weight: 600;
        }}
        input[type="text"] {{
            width: 100%;
            padding: 6px;
            margin-top: 4px;
        }}
        button {{
            margin-top: 14px;
            padding: 8px 20px;
        }}
        .error {{
            color: #b00020;
        }}
        .result {{
            background-color: #e6f4ea;
            border: 1px solid #34a853;
            border-radius: 4px;
            padding: 12px;
            margin-top: 16px;
        }}
        .empty {{
            color: #666;
            font-style: italic;
        }}
    </style>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/request-info">Request info</a>
        <a href="/form-data">Form data</a>
        <a href="/phone-validator">Phone validator</a>
    </nav>
    <h1>{title}</h1>
{body}</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

/// Render ordered key/value pairs as a two-column table.
///
/// An empty slice renders a placeholder paragraph instead of a bare
/// table header.
pub fn kv_table(rows: &[(String, String)]) -> String {
    if rows.is_empty() {
        return "<p class=\"empty\">(empty)</p>\n".to_string();
    }

    let mut out = String::from("<table>\n<tr><th>Name</th><th>Value</th></tr>\n");
    for (name, value) in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(name),
            escape_html(value)
        ));
    }
    out.push_str("</table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("1&2")</script>"#),
            "&lt;script&gt;alert(&quot;1&amp;2&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("8-916-123-45-67"), "8-916-123-45-67");
    }

    #[test]
    fn empty_rows_render_placeholder() {
        assert!(kv_table(&[]).contains("(empty)"));
    }

    #[test]
    fn table_cells_are_escaped() {
        let rows = vec![("<b>".to_string(), "a&b".to_string())];
        let html = kv_table(&rows);
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a&amp;b"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn page_shell_escapes_title() {
        let html = page("<title>", "<p>body</p>");
        assert!(html.contains("&lt;title&gt;"));
        // The body is the caller's responsibility and is inserted as-is.
        assert!(html.contains("<p>body</p>"));
    }
}
