//! Standalone HTML document assembly for download or copy

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::GeneratedPage;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Wrap a generated page into a complete document
pub fn full_document(page: &GeneratedPage, business_name: &str) -> String {
    format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{business_name}</title>
  <style>
    {css}
  </style>
</head>
<body>
  {html}
</body>
</html>"#,
        css = page.css,
        html = page.html,
    )
}

/// Suggested file name, e.g. `acme-construction-landing-page.html`
pub fn download_filename(business_name: &str) -> String {
    let slug = WHITESPACE_RE.replace_all(&business_name.to_lowercase(), "-").into_owned();
    format!("{slug}-landing-page.html")
}
