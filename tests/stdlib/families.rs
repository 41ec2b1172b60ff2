//! Family registries and how they combine

use tmplkit_language::FunctionRegistry;

#[test]
fn each_family_is_fresh_and_independent() {
    let mut math = tmplkit_stdlib::math();
    math.merge(&tmplkit_stdlib::text());
    assert!(math.contains("slug"));
    assert!(!tmplkit_stdlib::math().contains("slug"));
}

#[test]
fn all_covers_every_family() {
    let all = tmplkit_stdlib::all();
    for family in [
        tmplkit_stdlib::math(),
        tmplkit_stdlib::logic(),
        tmplkit_stdlib::time(),
        tmplkit_stdlib::page(),
        tmplkit_stdlib::text(),
        tmplkit_stdlib::iterables(),
        tmplkit_stdlib::path(),
        tmplkit_stdlib::markdown(),
    ] {
        for name in family.names() {
            assert!(all.contains(name), "{name} missing from all()");
        }
    }
}

#[test]
fn math_and_logic_do_not_collide() {
    let joined = FunctionRegistry::join([tmplkit_stdlib::math(), tmplkit_stdlib::logic()]);
    assert_eq!(
        joined.len(),
        tmplkit_stdlib::math().len() + tmplkit_stdlib::logic().len()
    );
}
