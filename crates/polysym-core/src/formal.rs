//! Formal symbols.
//!
//! A formal symbol is a term that does not decompose into letters: a named
//! special function identified by a foreweight, a list of weights and one
//! list of points per weight. Its weight is the foreweight plus the sum of
//! the weights.

use std::fmt;

use crate::error::CodecError;
use crate::word::PackedWord;

/// Inline capacity of a formal symbol key.
const FORMAL_INLINE: usize = 16;

/// A formal (non-decomposable) symbol.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FormalSymbol {
    foreweight: u32,
    weights: Vec<u32>,
    points: Vec<Vec<i32>>,
}

impl FormalSymbol {
    /// Creates a formal symbol.
    ///
    /// # Panics
    ///
    /// Panics if `weights` and `points` have different lengths.
    #[must_use]
    pub fn new(foreweight: u32, weights: Vec<u32>, points: Vec<Vec<i32>>) -> Self {
        assert_eq!(
            weights.len(),
            points.len(),
            "formal symbol needs one point list per weight: {weights:?} vs {points:?}"
        );
        Self {
            foreweight,
            weights,
            points,
        }
    }

    /// Returns the foreweight.
    #[must_use]
    pub fn foreweight(&self) -> u32 {
        self.foreweight
    }

    /// Returns the weights.
    #[must_use]
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Returns the point lists, one per weight.
    #[must_use]
    pub fn points(&self) -> &[Vec<i32>] {
        &self.points
    }

    /// Returns the total weight: foreweight plus all weights.
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.foreweight as usize + self.weights.iter().map(|&w| w as usize).sum::<usize>()
    }
}

impl fmt::Display for FormalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weights: Vec<String> = self.weights.iter().map(ToString::to_string).collect();
        let points: Vec<String> = self
            .points
            .iter()
            .map(|p| p.iter().map(ToString::to_string).collect::<Vec<_>>().join(","))
            .collect();
        write!(
            f,
            "Sym_{}_{}({})",
            self.foreweight,
            weights.join("_"),
            points.join(" | ")
        )
    }
}

/// Compressed key of a [`FormalSymbol`].
///
/// Layout: `[foreweight, n, w_1..w_n, len_1, points_1.., len_n, points_n..]`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FormalKey(PackedWord<i16, FORMAL_INLINE>);

fn pack_component(value: i64) -> Result<i16, CodecError> {
    i16::try_from(value).map_err(|_| CodecError::ComponentOverflow { value })
}

impl FormalKey {
    /// Encodes a formal symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ComponentOverflow`] if any component exceeds
    /// the `i16` range.
    pub fn try_encode(symbol: &FormalSymbol) -> Result<Self, CodecError> {
        let mut key = PackedWord::new();
        key.push(pack_component(i64::from(symbol.foreweight))?);
        key.push(pack_component(symbol.weights.len() as i64)?);
        for &w in &symbol.weights {
            key.push(pack_component(i64::from(w))?);
        }
        for points in &symbol.points {
            key.push(pack_component(points.len() as i64)?);
            for &p in points {
                key.push(pack_component(i64::from(p))?);
            }
        }
        Ok(Self(key))
    }

    /// Encodes a formal symbol, failing fast on overflow.
    ///
    /// # Panics
    ///
    /// Panics if any component exceeds the `i16` range.
    #[must_use]
    pub fn encode(symbol: &FormalSymbol) -> Self {
        match Self::try_encode(symbol) {
            Ok(key) => key,
            Err(err) => panic!("cannot pack {symbol}: {err}"),
        }
    }

    /// Decodes the symbol.
    #[must_use]
    pub fn decode(&self) -> FormalSymbol {
        let raw = self.0.as_slice();
        let foreweight = raw[0] as u32;
        let n = raw[1] as usize;
        let weights: Vec<u32> = raw[2..2 + n].iter().map(|&w| w as u32).collect();
        let mut pos = 2 + n;
        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            let len = raw[pos] as usize;
            points.push(raw[pos + 1..pos + 1 + len].iter().map(|&p| i32::from(p)).collect());
            pos += 1 + len;
        }
        FormalSymbol::new(foreweight, weights, points)
    }

    /// Returns the total weight without decoding the points.
    #[must_use]
    pub fn total_weight(&self) -> usize {
        let raw = self.0.as_slice();
        let n = raw[1] as usize;
        raw[0] as usize + raw[2..2 + n].iter().map(|&w| w as usize).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_weight() {
        let s = FormalSymbol::new(1, vec![5], vec![vec![1, 2]]);
        assert_eq!(s.total_weight(), 6);
        assert_eq!(FormalKey::encode(&s).total_weight(), 6);
    }

    #[test]
    fn test_round_trip() {
        let s = FormalSymbol::new(2, vec![1, 3], vec![vec![1], vec![2, 3, 4]]);
        assert_eq!(FormalKey::encode(&s).decode(), s);
    }

    #[test]
    fn test_overflow() {
        let s = FormalSymbol::new(0, vec![1], vec![vec![40_000]]);
        assert_eq!(
            FormalKey::try_encode(&s),
            Err(CodecError::ComponentOverflow { value: 40_000 })
        );
    }

    #[test]
    #[should_panic(expected = "one point list per weight")]
    fn test_mismatched_points() {
        let _ = FormalSymbol::new(0, vec![1, 2], vec![vec![1]]);
    }

    #[test]
    fn test_display() {
        let s = FormalSymbol::new(1, vec![5], vec![vec![1, 2]]);
        assert_eq!(s.to_string(), "Sym_1_5(1,2)");
    }
}
