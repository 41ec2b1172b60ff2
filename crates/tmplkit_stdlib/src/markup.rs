//! Markdown to HTML.
//!
//! Rendering uses the GitHub-flavored constructs (tables, strikethrough,
//! autolinks, task lists, footnotes). Raw HTML in the input is escaped and
//! links with dangerous protocols lose their target, so the output is safe
//! to embed in a page built from untrusted text.

use markdown::Options;
use tmplkit_foundation::{Arity, Error, Result, Value};
use tmplkit_language::FunctionRegistry;

use crate::args::string_arg;

/// Registry for the markdown family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new().with("markdown", Arity::Exact(1), native_markdown)
}

/// Renders Markdown text as sanitized HTML.
///
/// # Errors
/// Returns an invalid-argument error when the renderer rejects the input.
pub fn render_markdown(input: &str) -> Result<String> {
    markdown::to_html_with_options(input, &Options::gfm())
        .map_err(|e| Error::invalid_argument("markdown", e.to_string()))
}

/// Markdown: markdown - sanitized HTML for Markdown text
pub(crate) fn native_markdown(args: &[Value]) -> Result<Value> {
    let input = string_arg("markdown", args, 0)?;
    render_markdown(input).map(Value::from)
}
