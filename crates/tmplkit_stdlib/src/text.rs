//! Slugs and title case.

use tmplkit_foundation::{Arity, Result, Value};
use tmplkit_language::FunctionRegistry;

use crate::args::string_arg;

/// Registry for the text family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("slug", Arity::Exact(1), native_slug)
        .with("unslug", Arity::Exact(1), native_unslug)
        .with("english_title", Arity::Exact(1), native_english_title)
}

/// Words left lowercase inside an English title.
const SMALL_WORDS: &[&str] = &["a", "an", "on", "the", "to", "of", "in"];

/// Makes text safe for a file name.
///
/// `-` becomes `_`, then spaces become `-`, `/` becomes `~`, and the result
/// is lowercased. [`unslug`] reverses everything but the case.
///
/// ```
/// assert_eq!(tmplkit_stdlib::slug("The Jumbles"), "the-jumbles");
/// assert_eq!(tmplkit_stdlib::slug("red/blue"), "red~blue");
/// ```
#[must_use]
pub fn slug(s: &str) -> String {
    s.replace('-', "_")
        .replace(' ', "-")
        .replace('/', "~")
        .to_lowercase()
}

/// Turns a slug back into readable text.
#[must_use]
pub fn unslug(s: &str) -> String {
    s.replace('-', " ").replace('_', "-").replace('~', "/")
}

/// Capitalizes the first letter of every word.
///
/// A word starts after any character that is not a letter, digit or
/// underscore, so `l'année` becomes `L'Année`.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Title case with English small words kept lowercase.
///
/// Whitespace runs collapse to one space. Every word is title-cased except
/// `a an on the to of in`, which stay as written unless they open the title.
///
/// ```
/// assert_eq!(
///     tmplkit_stdlib::english_title("the wind in the willows"),
///     "The Wind in the Willows"
/// );
/// ```
#[must_use]
pub fn english_title(s: &str) -> String {
    s.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && SMALL_WORDS.contains(&word) {
                word.to_string()
            } else {
                title_case(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text: slug - file-name-friendly form
pub(crate) fn native_slug(args: &[Value]) -> Result<Value> {
    Ok(Value::from(slug(string_arg("slug", args, 0)?)))
}

/// Text: unslug - readable form of a slug
pub(crate) fn native_unslug(args: &[Value]) -> Result<Value> {
    Ok(Value::from(unslug(string_arg("unslug", args, 0)?)))
}

/// Text: english_title - title case keeping small words lowercase
pub(crate) fn native_english_title(args: &[Value]) -> Result<Value> {
    Ok(Value::from(english_title(string_arg(
        "english_title",
        args,
        0,
    )?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slugs() {
        assert_eq!(slug("The Jumbles"), "the-jumbles");
        assert_eq!(slug("red/blue"), "red~blue");
        assert_eq!(slug("half-life 2"), "half_life-2");
        assert_eq!(unslug("half_life-2"), "half-life 2");
        assert_eq!(unslug("red~blue"), "red/blue");
    }

    #[test]
    fn title_case_boundaries() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("l'année"), "L'Année");
        assert_eq!(title_case("snake_case x2y"), "Snake_case X2y");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn english_titles() {
        assert_eq!(english_title("the wind in the willows"), "The Wind in the Willows");
        assert_eq!(english_title("  a   tale of two cities "), "A Tale of Two Cities");
        assert_eq!(english_title("gone with THE wind"), "Gone With THE Wind");
    }

    #[test]
    fn natives_read_text() {
        let registry = registry();
        let slugged = registry
            .get("slug")
            .expect("registered")
            .call(&[Value::from("A B")])
            .expect("slug");
        assert_eq!(slugged, Value::from("a-b"));
        assert!(
            registry
                .get("unslug")
                .expect("registered")
                .call(&[Value::Int32(1)])
                .is_err()
        );
    }

    proptest! {
        #[test]
        fn unslug_inverts_lowercase_slug(s in "[a-z/ ]{0,24}") {
            prop_assert_eq!(unslug(&slug(&s)), s);
        }
    }
}
