//! Helper functions called from expressions

use tmplkit_foundation::{ErrorKind, Value};
use tmplkit_language::eval;

fn run(source: &str, record: &Value) -> Value {
    eval(source, &tmplkit_stdlib::all(), record).expect("evaluates")
}

fn text(source: &str) -> String {
    run(source, &Value::Nil).to_string()
}

// =============================================================================
// Math
// =============================================================================

#[test]
fn math_over_record_fields() {
    let rec = Value::from_json_str(r#"{"price": 2.5, "qty": "4", "n": 7}"#).expect("json");
    assert_eq!(run("multiply .price .qty", &rec), Value::Float64(10.0));
    assert_eq!(run("modulo .n 4", &rec), Value::Int64(3));
    assert_eq!(run("add .n 1 2 3", &rec), Value::Int64(13));
    assert_eq!(run("divide .n 0", &rec), Value::NaN);
    assert_eq!(text("typeof .5"), "float64");
}

// =============================================================================
// Time
// =============================================================================

#[test]
fn dates() {
    assert_eq!(text(r#"year "2016-04-03""#), "2016");
    assert_eq!(text(r#"rfc3339 "2016""#), "2016-01-01T00:00:00Z");
    assert_eq!(
        text(r#"datefmt "2016-04" "%Y-%m-%d" "%b %Y" "%Y""#),
        "Apr 2016"
    );
}

// =============================================================================
// Page
// =============================================================================

#[test]
fn page_helpers() {
    assert_eq!(text(r#"nl2p "a\nb\n\nc""#), "a<br />b<p>c");
    assert_eq!(text(r#"urlencode "a b&c""#), "a+b%26c");
    assert_eq!(text(r#"urlencode "a b&c" | urldecode"#), "a b&c");
    assert_eq!(text("nextPage 10 10 15"), "10");
    assert_eq!(text("prevPage 10 25 100"), "0");
    assert_eq!(text(r#"synopsis "One. Two.""#), "One.");
}

// =============================================================================
// Text, iterables, paths
// =============================================================================

#[test]
fn text_helpers() {
    assert_eq!(text(r#"slug "The Jumbles""#), "the-jumbles");
    assert_eq!(text(r#"slug "The Jumbles" | unslug"#), "the jumbles");
    assert_eq!(text(r#"english_title "of mice and men""#), "Of Mice And Men");
}

#[test]
fn iterables_and_paths() {
    assert_eq!(text("ints 1 10 2"), "[1 3 5 7 9]");
    assert_eq!(text("cols2rows (ints 1 2 1) (ints 3 4 1)"), "[[1 3] [2 4]]");
    assert_eq!(text(r#"basename "/one/two/three.bleve" ".bleve""#), "three");
    assert_eq!(text(r#"dirname "/one/two/three.bleve""#), "/one/two");
    assert_eq!(text(r#"ext "/one/two/three.bleve""#), ".bleve");
}

#[test]
fn helper_errors_name_the_function() {
    let err = eval("ints 1 10 0", &tmplkit_stdlib::all(), &Value::Nil).expect_err("zero step");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument { ref function, .. } if function == "ints"));
    let err = eval("slug 1", &tmplkit_stdlib::all(), &Value::Nil).expect_err("not text");
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn oversized_ranges_fail_instead_of_allocating() {
    let err = eval("ints 0 4000000000 1", &tmplkit_stdlib::all(), &Value::Nil)
        .expect_err("too long");
    assert!(matches!(err.kind, ErrorKind::InvalidArgument { ref function, .. } if function == "ints"));
    assert_eq!(text("len (ints 1 1000 1)"), "1000");
}

// =============================================================================
// Markdown
// =============================================================================

#[test]
fn markdown_from_record_fields() {
    let rec = Value::record([("body", "# Notes\n\nSee <b>this</b>.")]);
    let html = run(".body | markdown", &rec).to_string();
    assert!(html.contains("<h1>Notes</h1>"));
    assert!(!html.contains("<b>"));
}
