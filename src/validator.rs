//! Extraction of the `{ "html", "css" }` object from free-form model output

use serde_json::Value;
use thiserror::Error;

use crate::form::GeneratedPage;

/// Reasons model output could not be turned into a page. Each keeps the raw text.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("no JSON object found in model output")]
    NoJsonObject { raw: String },
    #[error("JSON object in model output is invalid: {reason}")]
    InvalidJson { reason: String, raw: String },
    #[error("model output is missing string field '{field}'")]
    MissingField { field: &'static str, raw: String },
}

impl ResponseError {
    /// Offending model output, for diagnostics
    pub fn raw(&self) -> &str {
        match self {
            ResponseError::NoJsonObject { raw }
            | ResponseError::InvalidJson { raw, .. }
            | ResponseError::MissingField { raw, .. } => raw,
        }
    }
}

/// Validate model output into a [`GeneratedPage`]. Never coerces.
pub fn parse_page_response(text: &str) -> Result<GeneratedPage, ResponseError> {
    let Some(span) = first_json_object(text) else {
        return Err(ResponseError::NoJsonObject {
            raw: text.to_string(),
        });
    };

    let value: Value = serde_json::from_str(span).map_err(|e| ResponseError::InvalidJson {
        reason: e.to_string(),
        raw: text.to_string(),
    })?;

    let field = |name: &'static str| -> Result<String, ResponseError> {
        match value.get(name).and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
            _ => Err(ResponseError::MissingField {
                field: name,
                raw: text.to_string(),
            }),
        }
    };

    Ok(GeneratedPage {
        html: field("html")?,
        css: field("css")?,
    })
}

/// First top-level balanced `{...}` span. Braces inside string literals are skipped.
pub fn first_json_object(text: &str) -> Option<&str> {
    let mut depth: u32 = 0;
    let mut start: Option<usize> = None;
    let mut in_string = false;
    let mut escape = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escape {
                escape = false;
                continue;
            }
            match ch {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            // Quotes only open a string once we are inside an object; prose
            // before the object may contain unbalanced quotes.
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0
                        && let Some(s) = start
                    {
                        return Some(&text[s..=idx]);
                    }
                }
            }
            _ => {}
        }
    }

    None
}
