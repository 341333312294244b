//! Property-based tests for linear expressions and the Lyndon layer.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::linear::tensor_product;
    use crate::lyndon::{is_lyndon, lyndon_factorize, min_rotation, shuffle, to_lyndon_basis};
    use crate::parallel::{par_mapped_expanding, ParallelConfig};
    use crate::param::Param;
    use crate::words::{word, SimpleExpr, Words};

    // Strategy for generating short words over a small alphabet
    fn small_word() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(1i32..5, 1..=4)
    }

    // Strategy for generating small expressions of mixed weight
    fn small_expr() -> impl Strategy<Value = SimpleExpr> {
        proptest::collection::vec((small_word(), -5i64..5), 0..6)
            .prop_map(SimpleExpr::from_terms)
    }

    // Strategy for generating expressions whose terms all have weight `n`
    fn weight_expr(n: usize) -> impl Strategy<Value = SimpleExpr> {
        proptest::collection::vec((proptest::collection::vec(1i32..4, n), -5i64..5), 0..6)
            .prop_map(SimpleExpr::from_terms)
    }

    fn natural(a: &i32, b: &i32) -> std::cmp::Ordering {
        a.cmp(b)
    }

    proptest! {
        #[test]
        fn key_round_trip(w in proptest::collection::vec(any::<i32>(), 0..30)) {
            let key = Words::<i32>::object_to_key(&w);
            prop_assert_eq!(Words::<i32>::key_to_object(&key), w);
        }

        #[test]
        fn add_commutative(a in small_expr(), b in small_expr()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn additive_inverse(a in small_expr()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn scalar_distributes(a in small_expr(), b in small_expr(), k in -4i64..4) {
            prop_assert_eq!(&(&a + &b) * k, &(&a * k) + &(&b * k));
        }

        #[test]
        fn tensor_product_bilinear(a in small_expr(), b in small_expr(), c in small_expr(), k in -3i64..3) {
            let left = tensor_product(&(&a + &(&b * k)), &c);
            let right = &tensor_product(&a, &c) + &(&tensor_product(&b, &c) * k);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn tensor_product_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
            prop_assert_eq!(
                tensor_product(&tensor_product(&a, &b), &c),
                tensor_product(&a, &tensor_product(&b, &c))
            );
        }

        #[test]
        fn merge_order_independent(a in small_expr(), assignment in proptest::collection::vec(0usize..3, 6)) {
            let transform = |w: &Vec<i32>| word(w) * 2 - word(&w.iter().rev().copied().collect::<Vec<_>>());
            let whole = a.mapped_expanding(transform);

            let mut groups = vec![SimpleExpr::new(), SimpleExpr::new(), SimpleExpr::new()];
            for (i, (key, coeff)) in a.sorted_keys().into_iter().enumerate() {
                groups[assignment[i % assignment.len()]].add_to_key(key.clone(), coeff);
            }
            let forward: SimpleExpr = groups.iter().map(|g| g.mapped_expanding(transform)).sum();
            let backward: SimpleExpr = groups.iter().rev().map(|g| g.mapped_expanding(transform)).sum();
            let parallel = par_mapped_expanding(&a, transform, &ParallelConfig::always());

            prop_assert_eq!(&forward, &whole);
            prop_assert_eq!(&backward, &whole);
            prop_assert_eq!(&parallel, &whole);
        }

        #[test]
        fn factorization_concatenates_to_word(w in proptest::collection::vec(1i32..4, 0..10)) {
            let factors = lyndon_factorize(&w, natural);
            prop_assert_eq!(factors.concat(), w.clone());
            for f in &factors {
                prop_assert!(is_lyndon(f, natural));
            }
            for pair in factors.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
            }
        }

        #[test]
        fn min_rotation_is_minimal(w in proptest::collection::vec(1i32..4, 1..9)) {
            let r = min_rotation(&w, natural);
            let n = w.len();
            let rotated: Vec<i32> = (0..n).map(|i| w[(r.offset + i) % n]).collect();
            let brute = (0..n)
                .map(|s| (0..n).map(|i| w[(s + i) % n]).collect::<Vec<i32>>())
                .min()
                .unwrap();
            prop_assert_eq!(rotated, brute.clone());
            let periodic = (1..n).any(|d| n % d == 0 && (0..n).all(|i| w[i] == w[(i + d) % n]));
            prop_assert_eq!(r.primitive, !periodic);
        }

        #[test]
        fn lyndon_basis_is_idempotent(a in small_expr()) {
            let once = to_lyndon_basis(&a);
            prop_assert_eq!(to_lyndon_basis(&once), once.clone());
            for (w, _) in once.terms() {
                prop_assert!(is_lyndon(&w, natural));
            }
        }

        #[test]
        fn lyndon_basis_kills_shuffles(a in weight_expr(2), b in weight_expr(1)) {
            prop_assert!(to_lyndon_basis(&shuffle(&a, &b)).is_zero());
        }

        #[test]
        fn lyndon_basis_reversal_sign(w in proptest::collection::vec(1i32..5, 1..=5)) {
            let n = w.len();
            let reversed: Vec<i32> = w.iter().rev().copied().collect();
            let sign = if n % 2 == 1 { 1 } else { -1 };
            prop_assert_eq!(
                to_lyndon_basis(&word(&reversed)),
                &to_lyndon_basis(&word(&w)) * sign
            );
        }
    }
}
