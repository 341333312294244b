//! Parallel batch transforms.
//!
//! Mapping a transform over the terms of a large expression is
//! embarrassingly parallel: the terms are split into chunks, every rayon
//! worker builds its own local expression, and the partial results are
//! merged by addition. Addition is commutative and associative, so the
//! merge order never affects the result.

use rayon::prelude::*;

use crate::linear::Linear;
use crate::param::Param;

/// Configuration for parallel transforms.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of terms to enable parallelism.
    pub parallel_threshold: usize,
    /// Number of terms handed to a worker at a time.
    pub chunk_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 512,
            chunk_size: 128,
        }
    }
}

impl ParallelConfig {
    /// A configuration that always takes the parallel path.
    #[must_use]
    pub fn always() -> Self {
        Self {
            parallel_threshold: 0,
            chunk_size: 1,
        }
    }
}

/// Replaces every key by a linear combination, in parallel.
///
/// Falls back to the sequential path below the configured threshold.
#[tracing::instrument(level = "debug", skip_all, fields(terms = expr.len()))]
pub fn par_mapped_expanding_key<P, Q, F>(expr: &Linear<P>, f: F, config: &ParallelConfig) -> Linear<Q>
where
    P: Param,
    Q: Param,
    F: Fn(&P::Key) -> Linear<Q> + Sync,
{
    if expr.len() < config.parallel_threshold {
        return expr.mapped_expanding_key(f);
    }
    let terms: Vec<_> = expr.iter().collect();
    let chunk_size = config.chunk_size.max(1);
    tracing::debug!(chunks = terms.len().div_ceil(chunk_size), "parallel expansion");
    terms
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut local = Linear::new();
            for &(key, coeff) in chunk {
                local.add_scaled(&f(key), coeff);
            }
            local
        })
        .reduce(Linear::new, |mut acc, part| {
            acc.add_scaled(&part, 1);
            acc
        })
}

/// Replaces every term by a linear combination, in parallel.
pub fn par_mapped_expanding<P, Q, F>(expr: &Linear<P>, f: F, config: &ParallelConfig) -> Linear<Q>
where
    P: Param,
    Q: Param,
    F: Fn(&P::Object) -> Linear<Q> + Sync,
{
    par_mapped_expanding_key(expr, |key| f(&P::key_to_object(key)), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{word, SimpleExpr};

    fn big_expr() -> SimpleExpr {
        let mut expr = SimpleExpr::new();
        for a in 1..=12 {
            for b in 1..=12 {
                expr.add_to(&vec![a, b], i64::from(a - b));
            }
        }
        expr
    }

    fn swap(w: &Vec<i32>) -> SimpleExpr {
        word(&[w[1], w[0]]) - word(w) * 2
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let expr = big_expr();
        let sequential = expr.mapped_expanding(swap);
        let parallel = par_mapped_expanding(&expr, swap, &ParallelConfig::always());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_chunk_size_does_not_matter() {
        let expr = big_expr();
        let results: Vec<SimpleExpr> = [1, 7, 64, 1000]
            .iter()
            .map(|&chunk_size| {
                let config = ParallelConfig {
                    parallel_threshold: 0,
                    chunk_size,
                };
                par_mapped_expanding(&expr, swap, &config)
            })
            .collect();
        for r in &results[1..] {
            assert_eq!(r, &results[0]);
        }
    }

    #[test]
    fn test_below_threshold_is_sequential() {
        let expr = word(&[1, 2]);
        let config = ParallelConfig::default();
        assert_eq!(par_mapped_expanding(&expr, swap, &config), word(&[2, 1]) - word(&[1, 2]) * 2);
    }
}
