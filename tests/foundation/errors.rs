//! Integration tests for errors and error context

use tmplkit_foundation::{Arity, Error, ErrorKind, Type};

#[test]
fn messages_name_the_problem() {
    let err = Error::arity_mismatch("add", Arity::Variadic(2), 1);
    assert_eq!(
        err.to_string(),
        "wrong number of args for add: want at least 2, got 1"
    );
    let err = Error::type_mismatch("slug", Type::String, Type::Bool);
    assert_eq!(err.to_string(), "slug: expected string, got bool");
    let err = Error::missing_field(".a.b");
    assert!(err.to_string().contains(".a.b"));
}

#[test]
fn compile_errors_are_distinguished() {
    assert!(Error::undefined_function("nope").is_compile_error());
    let wrapped = Error::compile("(nope)", &Error::undefined_function("nope"));
    assert!(wrapped.is_compile_error());
    assert!(matches!(
        wrapped.kind,
        ErrorKind::Compile { ref source_text, .. } if source_text == "(nope)"
    ));
    assert!(!Error::missing_field(".a").is_compile_error());
}

#[test]
fn frames_accumulate_innermost_first() {
    let err = Error::invalid_argument("ints", "step must not be zero")
        .with_frame("ints")
        .with_frame("len");
    let ctx = err.context.expect("frames");
    assert_eq!(ctx.stack, vec!["ints".to_string(), "len".to_string()]);
    assert!(ctx.to_string().contains("in ints"));
}
