//! One-level merge of YAML mappings.
//!
//! Semantics:
//! - Keys only present in the target are left untouched
//! - Incoming values replace target values
//! - When both sides hold a mapping, the two mappings merge key-by-key
//!   (incoming wins per key); values nested below that level are replaced
//!   wholesale, not merged

use serde_yaml::{Mapping, Value};

/// Merge `patch` into `target` in place.
///
/// # Examples
/// ```
/// use carthage_cache_config::merge::merge_one_level;
/// use serde_yaml::Mapping;
///
/// let mut target: Mapping = serde_yaml::from_str("a: 1\nb: {c: 2}").unwrap();
/// let patch: Mapping = serde_yaml::from_str("b: {d: 3}\ne: 4").unwrap();
/// merge_one_level(&mut target, patch);
///
/// let expected: Mapping = serde_yaml::from_str("a: 1\nb: {c: 2, d: 3}\ne: 4").unwrap();
/// assert_eq!(target, expected);
/// ```
pub fn merge_one_level(target: &mut Mapping, patch: Mapping) {
    for (key, incoming) in patch {
        match (target.get_mut(&key), incoming) {
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                for (inner_key, inner_value) in incoming {
                    existing.insert(inner_key, inner_value);
                }
            }
            (Some(slot), incoming) => *slot = incoming,
            (None, incoming) => {
                target.insert(key, incoming);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn yaml(text: &str) -> Mapping {
        serde_yaml::from_str(text).unwrap()
    }

    fn merged(target: &str, patch: &str) -> Mapping {
        let mut target = yaml(target);
        merge_one_level(&mut target, yaml(patch));
        target
    }

    #[test]
    fn test_merge_disjoint_mappings() {
        assert_eq!(merged("a: 1", "b: 2"), yaml("{a: 1, b: 2}"));
    }

    #[test]
    fn test_merge_overlapping_mappings() {
        assert_eq!(merged("{a: 1, b: 2}", "{b: 3, c: 4}"), yaml("{a: 1, b: 3, c: 4}"));
    }

    #[test]
    fn test_nested_mappings_merge_by_key() {
        assert_eq!(
            merged("a: {x: 1, y: 2}", "a: {y: 3, z: 4}"),
            yaml("a: {x: 1, y: 3, z: 4}")
        );
    }

    #[test]
    fn test_second_level_is_replaced_not_merged() {
        assert_eq!(
            merged("a: {inner: {x: 1, y: 2}}", "a: {inner: {z: 3}}"),
            yaml("a: {inner: {z: 3}}")
        );
    }

    #[test]
    fn test_null_overwrites() {
        assert_eq!(merged("{a: 1, b: 2}", "b: ~"), yaml("{a: 1, b: ~}"));
    }

    #[test]
    fn test_sequence_replaces() {
        assert_eq!(merged("a: [1, 2, 3]", "a: [4, 5]"), yaml("a: [4, 5]"));
    }

    #[test]
    fn test_scalar_replaces_mapping() {
        assert_eq!(merged("a: {nested: true}", "a: 42"), yaml("a: 42"));
    }

    #[test]
    fn test_mapping_replaces_scalar() {
        assert_eq!(merged("a: 42", "a: {nested: true}"), yaml("a: {nested: true}"));
    }

    #[test]
    fn test_empty_patch_is_identity() {
        assert_eq!(merged("{a: 1, b: {c: 2}}", "{}"), yaml("{a: 1, b: {c: 2}}"));
    }

    proptest! {
        #[test]
        fn prop_empty_patch_is_identity(target in arb_mapping()) {
            let mut result = target.clone();
            merge_one_level(&mut result, Mapping::new());
            prop_assert_eq!(result, target);
        }

        #[test]
        fn prop_idempotent_merge(target in arb_mapping(), patch in arb_mapping()) {
            let mut once = target;
            merge_one_level(&mut once, patch.clone());
            let mut twice = once.clone();
            merge_one_level(&mut twice, patch);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_patch_scalars_win(target in arb_mapping(), patch in arb_mapping()) {
            let mut result = target;
            merge_one_level(&mut result, patch.clone());
            for (key, value) in &patch {
                if !value.is_mapping() {
                    prop_assert_eq!(result.get(key), Some(value));
                }
            }
        }
    }

    fn arb_mapping() -> impl Strategy<Value = Mapping> {
        prop::collection::hash_map("[a-z]{1,3}", arb_value(), 0..5).prop_map(|m| {
            m.into_iter()
                .map(|(k, v)| (Value::String(k), v))
                .collect()
        })
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            arb_leaf(),
            prop::collection::hash_map("[a-z]{1,2}", arb_leaf(), 0..3).prop_map(|m| {
                Value::Mapping(
                    m.into_iter()
                        .map(|(k, v)| (Value::String(k), v))
                        .collect(),
                )
            }),
        ]
    }

    fn arb_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z]{0,10}".prop_map(Value::String),
        ]
    }
}
