//! Flat serializer: selected tags back into prompt text.

use tagweave_core::{DEFAULT_WEIGHT, Weighted};

/// Join entries as `name` / `name:weight`, separated by `", "`.
///
/// Groups are never reconstructed; every tag carries its own effective
/// weight.
pub fn serialize<T: Weighted>(entries: &[T]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single entry: the bare name when the weight is exactly `1.0`,
/// otherwise `name:weight` with two decimals.
pub fn format_entry<T: Weighted>(entry: &T) -> String {
    let weight = entry.weight();
    if weight == DEFAULT_WEIGHT {
        entry.name().to_string()
    } else {
        format!("{}:{:.2}", entry.name(), weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use proptest::prelude::*;
    use tagweave_core::WeightedTag;

    fn tag(name: &str, weight: f64) -> WeightedTag {
        WeightedTag::new(name, weight)
    }

    #[test]
    fn empty_list_is_empty_string() {
        assert_eq!(serialize::<WeightedTag>(&[]), "");
    }

    #[test]
    fn unit_weight_is_bare() {
        assert_eq!(serialize(&[tag("a", 1.0), tag("b", 1.0)]), "a, b");
    }

    #[test]
    fn other_weights_get_two_decimals() {
        assert_eq!(
            serialize(&[tag("a", 1.5), tag("b", 0.8), tag("c", 2.0)]),
            "a:1.50, b:0.80, c:2.00"
        );
    }

    #[test]
    fn near_unit_weight_is_not_bare() {
        assert_eq!(format_entry(&tag("a", 1.000_000_1)), "a:1.00");
        assert_eq!(format_entry(&tag("a", 0.999_999_9)), "a:1.00");
    }

    #[test]
    fn groups_flatten_on_the_way_back() {
        assert_eq!(serialize(&parse("(a,b):2")), "a:2.00, b:2.00");
    }

    #[test]
    fn reparse_of_serialized_group_is_stable() {
        let once = serialize(&parse("((x:1.5), y):2, z"));
        assert_eq!(once, "x:3.00, y:2.00, z");
        assert_eq!(serialize(&parse(&once)), once);
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9_]{1,6}( [a-z0-9_]{1,6})?"
    }

    proptest! {
        #[test]
        fn flat_round_trip_is_lossless(
            entries in prop::collection::vec((name_strategy(), 0u32..=1000), 0..12)
        ) {
            let entries: Vec<WeightedTag> = entries
                .into_iter()
                .map(|(name, cents)| WeightedTag::new(name, f64::from(cents) / 100.0))
                .collect();

            let text = serialize(&entries);
            let reparsed = parse(&text);

            prop_assert_eq!(serialize(&reparsed), text);
            prop_assert_eq!(reparsed.len(), entries.len());
            for (got, want) in reparsed.iter().zip(&entries) {
                prop_assert_eq!(&got.name, &want.name);
                prop_assert!((got.weight - want.weight).abs() < 1e-9);
            }
        }
    }
}
