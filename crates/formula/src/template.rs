//! ERB-style template rendering.
//!
//! A substitution-only subset of the ERB syntax the formula template uses:
//!
//! - `<%= name %>` inserts the bound value of `name`.
//! - `<%= name -%>` inserts the value and swallows the newline immediately
//!   after the directive (the `trim_mode: '-'` convention, so directive
//!   lines leave no stray blank lines).
//! - `<%# comment %>` produces nothing; `-%>` trims as above.
//!
//! No code is evaluated. Code directives (`<% ... %>`, `<%- ... %>`),
//! undefined variables, non-identifier expressions, and unterminated
//! directives all fail rendering rather than passing through silently.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Render `source`, substituting each output directive from `bindings`.
///
/// Rendering is deterministic: the same source and bindings always produce
/// the same output.
///
/// # Errors
///
/// Returns [`Error::Template`] for an undefined variable, a code directive,
/// a non-identifier expression, or an unterminated directive.
pub fn render(source: &str, bindings: &HashMap<&str, &str>) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("<%") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(close) = after_open.find("%>") else {
            return Err(Error::template(
                "unterminated directive (missing `%>`)",
                None,
            ));
        };
        let mut body = &after_open[..close];
        let mut tail = &after_open[close + 2..];

        // `-%>` requires the `-` adjacent to the closer
        let trim_newline = body.ends_with('-');
        if trim_newline {
            body = &body[..body.len() - 1];
        }

        match body.chars().next() {
            Some('=') => out.push_str(lookup(&body[1..], bindings)?),
            Some('#') => {}
            _ => {
                return Err(Error::template(
                    format!(
                        "unsupported directive `<%{body}%>` (only `<%= name %>` and `<%# comment %>` are supported)"
                    ),
                    None,
                ));
            }
        }

        if trim_newline && tail.starts_with('\n') {
            tail = &tail[1..];
        }
        rest = tail;
    }

    out.push_str(rest);
    Ok(out)
}

/// Resolve an output directive's expression to its bound value.
fn lookup<'a>(expr: &str, bindings: &HashMap<&str, &'a str>) -> Result<&'a str> {
    let name = expr.trim();
    if name.is_empty() {
        return Err(Error::template("empty output directive", None));
    }
    if !is_identifier(name) {
        return Err(Error::template(
            format!("unsupported expression `{name}` (only plain variable names are supported)"),
            None,
        ));
    }
    bindings
        .get(name)
        .copied()
        .ok_or_else(|| Error::template(format!("undefined template variable `{name}`"), None))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
