//! Integration tests for persistent collections

use tmplkit_foundation::{LtMap, LtVec, Value};

#[test]
fn vec_collects_and_reads() {
    let items: LtVec<i32> = [3, 1, 2].into_iter().collect();
    assert!(!items.is_empty());
    assert_eq!(items.len(), 3);
    assert_eq!(items.get(1), Some(&1));
    assert_eq!(items.last(), Some(&2));
    assert_eq!(items.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    assert!(LtVec::<i32>::new().is_empty());
}

#[test]
fn map_lookup_by_str() {
    let map: LtMap<String, i32> = [("a".to_string(), 1), ("b".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(map.get("b"), Some(&2));
    assert_eq!(map.get("c"), None);
    assert!(LtMap::<String, i32>::new().is_empty());
}

#[test]
fn map_iterates_in_key_order() {
    let map: LtMap<String, i32> = [("z", 1), ("a", 2), ("m", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "m", "z"]);
}

#[test]
fn record_maps_render_sorted() {
    let record = Value::record([("zeta", 1), ("alpha", 2)]);
    assert_eq!(record.to_string(), "map[alpha:2 zeta:1]");
}
