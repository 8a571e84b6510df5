//! Conditional copy tests, mirroring src/access/update.rs

use deeppath::{get, update};
use serde_json::json;

#[test]
fn copies_a_top_level_property() {
    let mut dest = json!({ "hello": null });
    let source = json!({ "hello": "world" });
    update(&mut dest, &source, "hello");
    assert_eq!(dest, json!({ "hello": "world" }));
}

#[test]
fn copies_a_second_level_property() {
    let mut dest = json!({ "hello": { "world": null } });
    let source = json!({ "hello": { "world": "again" } });
    update(&mut dest, &source, "hello.world");
    assert_eq!(dest, json!({ "hello": { "world": "again" } }));
}

#[test]
fn overwrites_a_deeply_nested_destination_value() {
    let mut dest = json!({ "hello": { "world": { "again": "initial" } } });
    let source = json!({ "hello": { "world": { "again": "new" } } });
    update(&mut dest, &source, "hello.world.again");
    assert_eq!(get(&dest, "hello.world.again"), Some(&json!("new")));
}

#[test]
fn returns_a_reference_to_the_written_value() {
    let mut dest = json!({ "a": {} });
    let source = json!({ "a": { "b": 3 } });
    assert_eq!(update(&mut dest, &source, "a.b"), Some(&mut json!(3)));
}

#[test]
fn does_nothing_when_the_source_lacks_the_key() {
    let mut dest = json!({ "a": { "b": "keep" } });
    let source = json!({ "a": {} });
    assert_eq!(update(&mut dest, &source, "a.b"), None);
    assert_eq!(dest, json!({ "a": { "b": "keep" } }));
}

#[test]
fn never_clears_an_existing_destination_value() {
    let mut dest = json!({ "a": { "b": "keep" } });
    let source = json!({ "other": true });
    update(&mut dest, &source, "a.b");
    assert_eq!(get(&dest, "a.b"), Some(&json!("keep")));
}

#[test]
fn skips_a_source_key_holding_a_falsy_value() {
    // The source-side key check is presence-based, but a falsy value still
    // never propagates.
    let mut dest = json!({ "a": { "b": "keep" } });
    let source = json!({ "a": { "b": 0 } });
    assert_eq!(update(&mut dest, &source, "a.b"), None);
    assert_eq!(dest, json!({ "a": { "b": "keep" } }));
}

#[test]
fn does_nothing_when_the_source_parent_is_missing() {
    let mut dest = json!({ "a": { "b": null } });
    let source = json!({ "x": 1 });
    assert_eq!(update(&mut dest, &source, "a.b"), None);
    assert_eq!(dest, json!({ "a": { "b": null } }));
}

#[test]
fn does_nothing_when_the_destination_parent_is_missing() {
    let mut dest = json!({});
    let source = json!({ "a": { "b": 1 } });
    assert_eq!(update(&mut dest, &source, "a.b"), None);
    assert_eq!(dest, json!({}));
}

#[test]
fn does_nothing_without_a_destination() {
    let mut dest = json!(null);
    let source = json!({ "hello": "world" });
    assert_eq!(update(&mut dest, &source, "hello"), None);
    assert_eq!(dest, json!(null));
}

#[test]
fn does_nothing_without_a_source() {
    let mut dest = json!({ "hello": null });
    assert_eq!(update(&mut dest, &json!(null), "hello"), None);
    assert_eq!(dest, json!({ "hello": null }));
}

#[test]
fn does_nothing_without_a_path() {
    let mut dest = json!({ "hello": null });
    let source = json!({ "hello": "world" });
    assert_eq!(update(&mut dest, &source, ""), None);
    assert_eq!(dest, json!({ "hello": null }));
}

#[test]
fn missing_top_level_source_key_is_a_no_op() {
    let mut dest = json!({ "hello": "keep" });
    let source = json!({ "other": 1 });
    assert_eq!(update(&mut dest, &source, "hello"), None);
    assert_eq!(dest, json!({ "hello": "keep" }));
}
