//! Property tests across layers

use proptest::prelude::*;
use tmplkit::foundation::Value;
use tmplkit::language::Filter;

proptest! {
    #[test]
    fn gt_filter_agrees_with_integer_comparison(n in -10_000i64..10_000, k in -100i64..100) {
        let registry = tmplkit::stdlib::all();
        let source = format!("(gt (int .n) {k})");
        let filter = Filter::compile(&source, &registry).expect("compiles");
        let record = Value::record([("n", Value::json_number(&n.to_string()))]);
        prop_assert_eq!(filter.apply(&record).expect("applies"), n > k);
    }

    #[test]
    fn eq_is_symmetric_across_representations(n in -1000i32..1000) {
        let registry = tmplkit::stdlib::all();
        let record = Value::record([
            ("a", Value::Int32(n)),
            ("b", Value::json_number(&n.to_string())),
        ]);
        for source in ["(eq .a .b)", "(eq .b .a)"] {
            let filter = Filter::compile(source, &registry).expect("compiles");
            prop_assert!(filter.apply(&record).expect("applies"));
        }
    }

    #[test]
    fn slug_output_has_no_spaces_or_slashes(s in "[A-Za-z /-]{0,30}") {
        let out = tmplkit::stdlib::slug(&s);
        prop_assert!(!out.contains(' '));
        prop_assert!(!out.contains('/'));
    }
}
