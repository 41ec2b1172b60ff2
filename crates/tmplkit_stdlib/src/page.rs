//! Helpers for rendering pages: HTML text, paging links, URL encoding,
//! JSON output, and fenced code blocks.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tmplkit_foundation::{Arity, Result, Value};
use tmplkit_language::FunctionRegistry;

use crate::LOG_TARGET;
use crate::args::{arg, int_arg, int_value, integer, list_arg, map_arg, string_arg};
use crate::math::type_name;
use crate::text::title_case;

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query-string escaping: unreserved characters pass, everything else is
/// percent-encoded (space is handled separately).
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Registry for the page family.
#[must_use]
pub fn registry() -> FunctionRegistry {
    FunctionRegistry::new()
        .with("nl2p", Arity::Exact(1), native_nl2p)
        .with("contains", Arity::Exact(2), native_contains)
        .with("title", Arity::Exact(1), native_title)
        .with("arraylength", Arity::Exact(1), native_arraylength)
        .with("mapsize", Arity::Exact(1), native_mapsize)
        .with("prevPage", Arity::Exact(3), native_prev_page)
        .with("nextPage", Arity::Exact(3), native_next_page)
        .with("getType", Arity::Exact(1), native_get_type)
        .with("asList", Arity::Exact(2), native_as_list)
        .with("synopsis", Arity::Exact(1), native_synopsis)
        .with("encodeURIComponent", Arity::Exact(1), native_encode_uri_component)
        .with("decodeURIComponent", Arity::Exact(1), native_decode_uri_component)
        .with("urlencode", Arity::Exact(1), native_urlencode)
        .with("urldecode", Arity::Exact(1), native_urldecode)
        .with("stringify", Arity::Range(1, 2), native_stringify)
        .with("codeblock", Arity::Exact(4), native_codeblock)
}

// =============================================================================
// Text
// =============================================================================

/// Page: nl2p - blank lines become `<p>`, other newlines `<br />`
pub(crate) fn native_nl2p(args: &[Value]) -> Result<Value> {
    let s = string_arg("nl2p", args, 0)?;
    Ok(Value::from(s.replace("\n\n", "<p>").replace('\n', "<br />")))
}

/// Page: contains - substring test
pub(crate) fn native_contains(args: &[Value]) -> Result<Value> {
    let s = string_arg("contains", args, 0)?;
    let sub = string_arg("contains", args, 1)?;
    Ok(Value::Bool(s.contains(sub)))
}

/// Page: title - capitalizes every word
pub(crate) fn native_title(args: &[Value]) -> Result<Value> {
    Ok(Value::from(title_case(string_arg("title", args, 0)?)))
}

/// First sentence of `text`, with whitespace runs collapsed.
///
/// A sentence ends at a period followed by a space or the end of the text,
/// unless the period follows a lone capital letter (an initial).
fn first_sentence(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = collapsed.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '.' {
            continue;
        }
        let at_break = chars.get(i + 1).is_none_or(|next| *next == ' ');
        let initial = i >= 1
            && chars[i - 1].is_uppercase()
            && (i == 1 || chars[i - 2] == ' ');
        if at_break && !initial {
            return chars[..=i].iter().collect();
        }
    }
    collapsed
}

/// Page: synopsis - first sentence
pub(crate) fn native_synopsis(args: &[Value]) -> Result<Value> {
    Ok(Value::from(first_sentence(string_arg("synopsis", args, 0)?)))
}

// =============================================================================
// Collections and paging
// =============================================================================

/// Page: arraylength - number of list items
pub(crate) fn native_arraylength(args: &[Value]) -> Result<Value> {
    Ok(int_value(list_arg("arraylength", args, 0)?.len()))
}

/// Page: mapsize - number of map entries
pub(crate) fn native_mapsize(args: &[Value]) -> Result<Value> {
    Ok(int_value(map_arg("mapsize", args, 0)?.len()))
}

/// Page: prevPage - `from - size`, never below zero
pub(crate) fn native_prev_page(args: &[Value]) -> Result<Value> {
    let from = int_arg("prevPage", args, 0)?;
    let size = int_arg("prevPage", args, 1)?;
    Ok(integer(from.saturating_sub(size).max(0)))
}

/// Page: nextPage - `from + size`, or `from` when that passes `max`
pub(crate) fn native_next_page(args: &[Value]) -> Result<Value> {
    let from = int_arg("nextPage", args, 0)?;
    let size = int_arg("nextPage", args, 1)?;
    let max = int_arg("nextPage", args, 2)?;
    let next = from.saturating_add(size);
    Ok(integer(if next > max { from } else { next }))
}

/// Page: getType - type name of the argument
pub(crate) fn native_get_type(args: &[Value]) -> Result<Value> {
    Ok(Value::from(type_name(arg(args, 0))))
}

/// Page: asList - list items rendered and joined by a separator
pub(crate) fn native_as_list(args: &[Value]) -> Result<Value> {
    let items = list_arg("asList", args, 0)?;
    let sep = string_arg("asList", args, 1)?;
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    Ok(Value::from(rendered.join(sep)))
}

// =============================================================================
// URL encoding
// =============================================================================

/// Page: encodeURIComponent - percent-encodes all but `A-Za-z0-9-_.!~*'()`
pub(crate) fn native_encode_uri_component(args: &[Value]) -> Result<Value> {
    let s = string_arg("encodeURIComponent", args, 0)?;
    Ok(Value::from(utf8_percent_encode(s, URI_COMPONENT).to_string()))
}

/// Page: decodeURIComponent - reverses encodeURIComponent
pub(crate) fn native_decode_uri_component(args: &[Value]) -> Result<Value> {
    let s = string_arg("decodeURIComponent", args, 0)?;
    Ok(Value::from(percent_decode_str(s).decode_utf8_lossy().into_owned()))
}

/// Page: urlencode - query-string escaping, space as `+`
pub(crate) fn native_urlencode(args: &[Value]) -> Result<Value> {
    let s = string_arg("urlencode", args, 0)?;
    let encoded = s
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY).to_string())
        .collect::<Vec<_>>()
        .join("+");
    Ok(Value::from(encoded))
}

/// Page: urldecode - reverses urlencode
pub(crate) fn native_urldecode(args: &[Value]) -> Result<Value> {
    let s = string_arg("urldecode", args, 0)?.replace('+', " ");
    Ok(Value::from(percent_decode_str(&s).decode_utf8_lossy().into_owned()))
}

// =============================================================================
// Output
// =============================================================================

/// Page: stringify - JSON text, tab-indented when the second argument is truthy
///
/// A value that cannot be encoded renders as the empty string.
pub(crate) fn native_stringify(args: &[Value]) -> Result<Value> {
    let pretty = arg(args, 1).is_truthy();
    match arg(args, 0).to_json_string(pretty) {
        Ok(json) => Ok(Value::from(json)),
        Err(e) => {
            log::warn!(target: LOG_TARGET, "stringify: {e}");
            Ok(Value::from(""))
        }
    }
}

/// Page: codeblock - fenced block of selected lines
///
/// Arguments are the source text, the first line (zero-based), the line
/// to stop before (zero meaning the end), and the fence language. Leading
/// and trailing newlines are dropped first. Non-empty lines are indented
/// four spaces.
pub(crate) fn native_codeblock(args: &[Value]) -> Result<Value> {
    let src = string_arg("codeblock", args, 0)?;
    let start = int_arg("codeblock", args, 1)?;
    let end = int_arg("codeblock", args, 2)?;
    let lang = string_arg("codeblock", args, 3)?;

    let lines: Vec<&str> = src.trim_matches('\n').split('\n').collect();
    let start = usize::try_from(start).unwrap_or(0).min(lines.len());
    let end = match usize::try_from(end) {
        Ok(0) | Err(_) => lines.len(),
        Ok(end) => end.min(lines.len()),
    };
    let body: Vec<String> = lines[start..end.max(start)]
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect();
    Ok(Value::from(format!("```{lang}\n{}\n```", body.join("\n"))))
}
