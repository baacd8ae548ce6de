//! Server-rendered HTML for the browser-facing routes.

use axum::response::{Html, IntoResponse, Response};

use crate::errors::AppError;

pub mod pages;

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; padding: 0; background: #f4f6f9; color: #333; }
header { background: #2c3e50; color: #fff; padding: 20px; text-align: center; }
nav { background: #2c3e50; padding: 10px; text-align: center; }
nav a { color: #fff; margin: 0 10px; text-decoration: none; }
main { padding: 40px; max-width: 900px; margin: auto; }
.card { background: #fff; padding: 20px; margin-bottom: 20px; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1); }
.btn { display: inline-block; padding: 10px 20px; background: #3498db; color: #fff; border: 0; text-decoration: none; border-radius: 5px; }
.error { color: #c0392b; }
textarea { width: 100%; height: 240px; }
.summary { display: flex; justify-content: space-around; margin: 20px; }
.summary div { background: #fff; padding: 15px; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1); text-align: center; width: 22%; }
table { width: 95%; margin: 0 auto 40px auto; border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 10px; text-align: center; }
th { background: #2c3e50; color: #fff; }
tr:nth-child(even) { background: #ecf0f1; }
"#;

const NAV: &str = r#"<nav>
  <a href="/">Home</a>
  <a href="/screen-resume">Text Screening</a>
  <a href="/results">Results</a>
</nav>"#;

/// Escapes text for safe inclusion in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wraps page content in the shared document shell. `body` must already be escaped.
fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{NAV}
{body}
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// An `AppError` rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct HtmlError {
    pub error: AppError,
    /// Where the "Go back" link points.
    pub back: &'static str,
}

impl HtmlError {
    pub fn new(error: AppError, back: &'static str) -> Self {
        Self { error, back }
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let (status, _, message) = self.error.parts();
        (status, pages::error_page(&message, self.back)).into_response()
    }
}
