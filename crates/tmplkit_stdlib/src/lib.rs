//! Helper-function registries for tmplkit expressions.
//!
//! Each family is a function returning a fresh [`FunctionRegistry`]:
//! - [`math`]: mixed-representation arithmetic and numeric conversion
//! - [`logic`]: `and`/`or`/`not`, equality and ordering, `index`, `len`
//! - [`time`]: date normalization and RFC formats
//! - [`page`]: HTML and URL helpers, paging, JSON output
//! - [`text`]: slugs and English title case
//! - [`iterables`]: integer ranges and column/row reshaping
//! - [`path`]: slash-separated path components
//! - [`markdown`]: sanitized Markdown rendering
//!
//! [`all`] joins every family into one registry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod args;
#[allow(clippy::unnecessary_wraps)]
mod iterables;
#[allow(clippy::unnecessary_wraps)]
mod logic;
#[allow(clippy::unnecessary_wraps)]
mod markup;
#[allow(clippy::unnecessary_wraps)]
mod math;
#[allow(clippy::unnecessary_wraps)]
mod page;
#[allow(clippy::unnecessary_wraps)]
mod path;
#[allow(clippy::unnecessary_wraps)]
mod text;
#[allow(clippy::unnecessary_wraps)]
mod time;

pub use iterables::registry as iterables;
pub use logic::registry as logic;
pub use markup::registry as markdown;
pub use math::registry as math;
pub use page::registry as page;
pub use path::registry as path;
pub use text::registry as text;
pub use time::registry as time;

pub use iterables::MAX_INTS;
pub use markup::render_markdown;
pub use math::type_name;
pub use text::{english_title, slug, unslug};
pub use time::normalize_date;

use tmplkit_language::FunctionRegistry;

/// Log target for helper-function diagnostics.
const LOG_TARGET: &str = "tmplkit::stdlib";

/// Every family joined into one registry.
///
/// Families are joined in the order math, logic, time, page, text,
/// iterables, path, markdown; no two families define the same name.
#[must_use]
pub fn all() -> FunctionRegistry {
    FunctionRegistry::join([
        math(),
        logic(),
        time(),
        page(),
        text(),
        iterables(),
        path(),
        markdown(),
    ])
}
