use super::*;

#[test]
fn prepend_puts_newest_entries_first() {
    let store = MemoryStore::connect();
    store.list_prepend("rd:rack-1.0.0", "rails >=1.0").expect("must prepend");
    store.list_prepend("rd:rack-1.0.0", "thor >=0.14").expect("must prepend");

    let entries = store.list_range("rd:rack-1.0.0", 0, -1).expect("must range");
    assert_eq!(entries, vec!["thor >=0.14", "rails >=1.0"]);
}

#[test]
fn append_keeps_insertion_order() {
    let store = MemoryStore::connect();
    store.list_append("v:rack", "rack-1.0.0").expect("must append");
    store.list_append("v:rack", "rack-1.1.0").expect("must append");

    let entries = store.list_range("v:rack", 0, -1).expect("must range");
    assert_eq!(entries, vec!["rack-1.0.0", "rack-1.1.0"]);
}

#[test]
fn range_of_missing_key_is_empty() {
    let store = MemoryStore::connect();
    let entries = store.list_range("v:nope", 0, -1).expect("must range");
    assert!(entries.is_empty());
}

#[test]
fn range_honors_negative_indices() {
    let store = MemoryStore::connect();
    for value in ["a", "b", "c", "d"] {
        store.list_append("k", value).expect("must append");
    }

    assert_eq!(store.list_range("k", 0, 0).expect("must range"), vec!["a"]);
    assert_eq!(
        store.list_range("k", -2, -1).expect("must range"),
        vec!["c", "d"]
    );
    assert_eq!(
        store.list_range("k", 1, 100).expect("must range"),
        vec!["b", "c", "d"]
    );
    assert!(store.list_range("k", 3, 1).expect("must range").is_empty());
    assert!(store
        .list_range("k", -100, -50)
        .expect("must range")
        .is_empty());
}

#[test]
fn hash_get_all_of_missing_key_is_empty() {
    let store = MemoryStore::connect();
    let fields = store.hash_get_all("info:nope").expect("must read hash");
    assert!(fields.is_empty());
}

#[test]
fn hash_set_then_get_all_round_trips_fields() {
    let store = MemoryStore::connect();
    store.hash_set("info:rack-1.0.0", "name", "rack").expect("must set");
    store.hash_set("info:rack-1.0.0", "number", "1.0.0").expect("must set");

    let fields = store.hash_get_all("info:rack-1.0.0").expect("must read hash");
    assert_eq!(fields.get("name").map(String::as_str), Some("rack"));
    assert_eq!(fields.get("number").map(String::as_str), Some("1.0.0"));
}

#[test]
fn list_operation_on_hash_key_reports_wrong_type() {
    let store = MemoryStore::connect();
    store.hash_set("info:rack-1.0.0", "name", "rack").expect("must set");

    let err = store
        .list_range("info:rack-1.0.0", 0, -1)
        .expect_err("must reject list read of a hash");
    assert!(matches!(err, StoreError::WrongType { ref key } if key == "info:rack-1.0.0"));
}

#[test]
fn released_store_is_unavailable_across_clones() {
    let store = MemoryStore::connect();
    let handle = store.clone();
    store.list_append("v:rack", "rack-1.0.0").expect("must append");

    handle.release();

    let err = store
        .list_range("v:rack", 0, -1)
        .expect_err("must fail after release");
    assert!(matches!(err, StoreError::Unavailable(_)));

    let err = store
        .list_prepend("rd:rack-1.0.0", "rails >=1.0")
        .expect_err("must fail after release");
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[test]
fn clones_share_the_same_entries() {
    let store = MemoryStore::connect();
    let handle = store.clone();
    handle.list_append("v:rack", "rack-1.0.0").expect("must append");

    let entries = store.list_range("v:rack", 0, -1).expect("must range");
    assert_eq!(entries, vec!["rack-1.0.0"]);
}
