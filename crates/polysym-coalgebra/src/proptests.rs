//! Property-based tests for the coproduct engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use polysym_linear::{ParallelConfig, SimpleExpr, Words};

    use crate::coexpr::{HopfCo, ICo, NCo};
    use crate::coproduct::{comultiply, comultiply_parallel, coproduct};

    // Strategy for generating expressions whose terms all have weight `n`
    fn weight_expr(n: usize) -> impl Strategy<Value = SimpleExpr> {
        proptest::collection::vec((proptest::collection::vec(1i32..5, n), -4i64..4), 0..6)
            .prop_map(SimpleExpr::from_terms)
    }

    proptest! {
        #[test]
        fn coproduct_bilinear_left(a in weight_expr(2), b in weight_expr(2), c in weight_expr(1), k in -3i64..3) {
            let left = coproduct::<ICo<Words<i32>>>(&(&a + &(&b * k)), &c);
            let right = coproduct::<ICo<Words<i32>>>(&a, &c) + coproduct::<ICo<Words<i32>>>(&b, &c) * k;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn coproduct_bilinear_right(a in weight_expr(1), b in weight_expr(3), c in weight_expr(3), k in -3i64..3) {
            let left = coproduct::<HopfCo<Words<i32>>>(&a, &(&b + &(&c * k)));
            let right = coproduct::<HopfCo<Words<i32>>>(&a, &b) + coproduct::<HopfCo<Words<i32>>>(&a, &c) * k;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn lie_coproduct_antisymmetric(a in weight_expr(2), b in weight_expr(1)) {
            let ab = coproduct::<ICo<Words<i32>>>(&a, &b);
            let ba = coproduct::<ICo<Words<i32>>>(&b, &a);
            prop_assert!((&ab + &ba).is_zero());
        }

        #[test]
        fn comultiply_linear(a in weight_expr(4), b in weight_expr(4), k in -3i64..3) {
            let left = comultiply::<NCo<Words<i32>>>(&(&a + &(&b * k)), &[2, 2]);
            let right = comultiply::<NCo<Words<i32>>>(&a, &[2, 2]) + comultiply::<NCo<Words<i32>>>(&b, &[2, 2]) * k;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn comultiply_parallel_merge_order(a in weight_expr(3), chunk_size in 1usize..4) {
            let config = ParallelConfig { parallel_threshold: 0, chunk_size };
            prop_assert_eq!(
                comultiply_parallel::<ICo<Words<i32>>>(&a, &[1, 2], &config),
                comultiply::<ICo<Words<i32>>>(&a, &[1, 2])
            );
        }
    }
}
