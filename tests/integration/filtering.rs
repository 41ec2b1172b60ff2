//! Filtering decoded records end to end

use tmplkit::foundation::Value;
use tmplkit::language::{EvalConfig, Filter, MissingKey};
use tmplkit::runtime::{Session, read_records};

const RECORDS: &str = r#"[
    {"id": 1, "one": true, "two": true, "three": false, "cnt2014": "3"},
    {"id": 2, "one": true, "two": false, "three": false, "cnt2014": "2"},
    {"id": 3, "one": false, "two": true, "three": true, "cnt2014": 10}
]"#;

fn matching(source: &str) -> Vec<String> {
    let records = read_records(RECORDS).expect("valid records");
    Session::new()
        .filter(source, &records)
        .expect("filters")
        .iter()
        .filter_map(|r| r.get("id").map(ToString::to_string))
        .collect()
}

#[test]
fn connectives() {
    assert_eq!(matching("(and .one .two)"), vec!["1"]);
    assert_eq!(matching("(or .two .three)"), vec!["1", "3"]);
    assert_eq!(matching("(and .one (eq .three false))"), vec!["1", "2"]);
    assert!(matching("false").is_empty());
    assert!(matching("(false)").is_empty());
}

#[test]
fn numeric_text_fields() {
    assert_eq!(matching("(gt (int .cnt2014) 2)"), vec!["1", "3"]);
    assert_eq!(matching("(eq .cnt2014 2)"), vec!["2"]);
    assert_eq!(matching("(ge .cnt2014 3)"), vec!["1", "3"]);
    assert_eq!(matching("add 1 1").len(), 3);
}

#[test]
fn string_fields_compare_the_same_way_everywhere() {
    let registry = tmplkit::stdlib::all();
    let record = Value::from_json_str(r#"{"cnt": "3"}"#).expect("valid record");
    let passes = |source: &str| {
        Filter::compile(source, &registry)
            .expect("compiles")
            .apply(&record)
            .expect("applies")
    };
    assert!(passes("(ge .cnt 3)"));
    assert!(passes("(le .cnt 3)"));
    assert!(passes("(eq .cnt 3)"));
    assert!(!passes("(ne .cnt 3)"));
    assert!(!passes("(eq .cnt 4)"));
}

#[test]
fn filter_is_reusable_across_records() {
    let records = read_records(RECORDS).expect("valid records");
    let filter = Filter::compile("(gt (int .cnt2014) 2)", &tmplkit::stdlib::all())
        .expect("compiles");
    let first: Vec<bool> = records
        .iter()
        .map(|r| filter.apply(r).expect("applies"))
        .collect();
    let second: Vec<bool> = records
        .iter()
        .map(|r| filter.apply(r).expect("applies"))
        .collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![true, false, true]);
}

#[test]
fn single_record_cases() {
    let registry = tmplkit::stdlib::all();
    let passes = |cnt: &str| {
        let record = Value::record([("cnt2014", Value::json_number(cnt))]);
        Filter::compile("(gt (int .cnt2014) 2)", &registry)
            .expect("compiles")
            .apply(&record)
            .expect("applies")
    };
    assert!(passes("3"));
    assert!(!passes("2"));
}

#[test]
fn missing_fields_error_unless_lenient() {
    let records = read_records(RECORDS).expect("valid records");
    let strict = Filter::compile(".four", &tmplkit::stdlib::all()).expect("compiles");
    assert!(strict.apply(&records[0]).is_err());

    let lenient = Filter::compile_with_config(
        ".four",
        &tmplkit::stdlib::all(),
        EvalConfig::new().with_missing_key(MissingKey::Zero),
    )
    .expect("compiles");
    assert!(!lenient.apply(&records[0]).expect("applies"));
}

#[test]
fn filters_run_on_other_threads() {
    let filter = Filter::compile("(and .one .two)", &tmplkit::stdlib::all()).expect("compiles");
    let records = read_records(RECORDS).expect("valid records");
    let handle = std::thread::spawn(move || {
        records
            .iter()
            .filter(|r| filter.apply(*r).expect("applies"))
            .count()
    });
    assert_eq!(handle.join().expect("thread finished"), 1);
}

#[test]
fn int_clamps_wide_values() {
    let registry = tmplkit::stdlib::all();
    let record = Value::from_json_str(r#"{"big": 5000000000, "neg": -4294967296}"#)
        .expect("valid record");
    let passes = |source: &str| {
        Filter::compile(source, &registry)
            .expect("compiles")
            .apply(&record)
            .expect("applies")
    };
    assert!(passes("(int .big)"));
    assert!(passes("(int .neg)"));
    assert!(passes("(eq (int .big) 2147483647)"));
    assert!(passes("(gt .big 4000000000)"));
}

#[test]
fn runaway_ranges_are_errors() {
    let records = read_records(RECORDS).expect("valid records");
    let err = Session::new()
        .filter("(len (ints 0 4000000000 1))", &records)
        .expect_err("range too long");
    assert!(!err.is_compile_error());
}
