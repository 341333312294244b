//! Property-based tests for the term codec.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{FormalKey, FormalSymbol, IndexSet, Pack, PackedWord, MAX_INDEX};

    // Strategy for generating valid (possibly degenerate) index lists
    fn index_list() -> impl Strategy<Value = Vec<usize>> {
        proptest::collection::vec(1..=MAX_INDEX, 0..=6)
    }

    fn formal_symbol() -> impl Strategy<Value = FormalSymbol> {
        (0u32..4, proptest::collection::vec((1u32..8, proptest::collection::vec(-50i32..50, 0..4)), 0..4))
            .prop_map(|(fw, parts)| {
                let (weights, points) = parts.into_iter().unzip();
                FormalSymbol::new(fw, weights, points)
            })
    }

    proptest! {
        #[test]
        fn index_set_round_trip(indices in index_list()) {
            let set = IndexSet::new(&indices);
            let mut unique = indices.clone();
            unique.sort_unstable();
            unique.dedup();
            if unique.len() == indices.len() && !indices.is_empty() {
                prop_assert_eq!(set.indices().collect::<Vec<_>>(), unique);
            } else {
                prop_assert!(set.is_nil());
            }
        }

        #[test]
        fn index_set_order_matches_bits(a in index_list(), b in index_list()) {
            let a = IndexSet::new(&a);
            let b = IndexSet::new(&b);
            prop_assert_eq!(a.cmp(&b), a.bits().cmp(&b.bits()));
        }

        #[test]
        fn word_round_trip(letters in proptest::collection::vec(any::<i32>(), 0..40)) {
            let word: PackedWord<i32> = PackedWord::from_slice(&letters);
            prop_assert_eq!(word.into_vec(), letters);
        }

        #[test]
        fn word_order_is_lexicographic(
            a in proptest::collection::vec(0i32..4, 0..6),
            b in proptest::collection::vec(0i32..4, 0..6)
        ) {
            let wa: PackedWord<i32> = PackedWord::from_slice(&a);
            let wb: PackedWord<i32> = PackedWord::from_slice(&b);
            prop_assert_eq!(wa.cmp(&wb), a.cmp(&b));
        }

        #[test]
        fn formal_key_round_trip(symbol in formal_symbol()) {
            let key = FormalKey::encode(&symbol);
            prop_assert_eq!(key.total_weight(), symbol.total_weight());
            prop_assert_eq!(key.decode(), symbol);
        }

        #[test]
        fn pack_round_trip(letters in proptest::collection::vec(1i32..9, 0..12), symbol in formal_symbol()) {
            let product = Pack::Product(letters);
            let formal: Pack<i32> = Pack::Formal(symbol);
            prop_assert_eq!(product.encode().decode(), product);
            prop_assert_eq!(formal.encode().decode(), formal);
        }
    }
}
