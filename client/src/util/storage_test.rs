use std::collections::BTreeMap;

use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_json_is_none_outside_the_browser() {
    assert_eq!(load_json::<String>("realestate_test_key"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_and_remove_are_noops_but_callable() {
    save_json("realestate_test_key", &"value");
    remove("realestate_test_key");
    assert_eq!(load_json::<String>("realestate_test_key"), None);
}

#[test]
fn encode_json_produces_stored_text() {
    assert_eq!(encode_json("k", &vec![1, 2]).as_deref(), Some("[1,2]"));
}

#[test]
fn encode_json_reports_unencodable_values_as_none() {
    let mut by_pair = BTreeMap::new();
    by_pair.insert((1, 2), "tuple keys are not JSON object keys");
    assert_eq!(encode_json("k", &by_pair), None);
}

#[test]
fn save_json_skips_unencodable_values() {
    let mut by_pair = BTreeMap::new();
    by_pair.insert((1, 2), 3);
    save_json("realestate_test_key", &by_pair);
}
