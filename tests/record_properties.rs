use proptest::prelude::*;
use reshape::{clone_object, filter_object, has_valid_property, merge_objects, Record};
use serde_json::Value;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec(("[a-e]{1,2}", scalar()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn merge_keeps_every_key_and_second_wins(first in record(), second in record()) {
        let merged = merge_objects(&first, &second);

        for key in first.keys().chain(second.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        for (key, value) in &second {
            prop_assert_eq!(&merged[key], value);
        }
        let only_second = second.keys().filter(|k| !first.contains_key(*k)).count();
        prop_assert_eq!(merged.len(), first.len() + only_second);
    }

    #[test]
    fn clone_is_idempotent(input in record()) {
        let once = clone_object(&input);
        prop_assert_eq!(&clone_object(&once), &once);
        prop_assert_eq!(&once, &input);
    }

    #[test]
    fn filter_agrees_with_has_valid_property(input in record()) {
        let is_string = |_: &str, v: &Value| v.is_string();

        let kept = filter_object(&input, is_string);

        prop_assert_eq!(!kept.is_empty(), has_valid_property(&input, is_string));
        prop_assert!(kept.values().all(Value::is_string));
    }
}
