//! Word orderings.
//!
//! Canonical representatives and the Lyndon layer are defined relative to
//! a total order on words. Two policies are used: plain lexicographic
//! order, and length-first order for comparing co-term parts.

use std::cmp::Ordering;

/// A total order on words.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum WordOrder {
    /// Lexicographic order over letters.
    ///
    /// The first differing letter decides; a proper prefix precedes its
    /// extensions.
    #[default]
    Lexicographic,

    /// Length-first order.
    ///
    /// Shorter words precede longer ones; words of equal length are
    /// compared lexicographically.
    LengthFirst,
}

impl WordOrder {
    /// Compares two words with a letter comparator.
    pub fn compare_by<T>(&self, a: &[T], b: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
        match self {
            WordOrder::Lexicographic => cmp_lex_by(a, b, cmp),
            WordOrder::LengthFirst => cmp_length_first_by(a, b, cmp),
        }
    }

    /// Compares two words with the letters' natural order.
    pub fn compare<T: Ord>(&self, a: &[T], b: &[T]) -> Ordering {
        self.compare_by(a, b, T::cmp)
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            WordOrder::Lexicographic => "lex",
            WordOrder::LengthFirst => "length-first",
        }
    }
}

impl std::fmt::Display for WordOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compares two words lexicographically.
pub fn cmp_lex_by<T>(a: &[T], b: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match cmp(x, y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Compares two words by length, then lexicographically.
pub fn cmp_length_first_by<T>(a: &[T], b: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => cmp_lex_by(a, b, cmp),
        ord => ord,
    }
}

/// Direction of the measure in [`cmp_measure_first`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MeasureOrder {
    /// Lighter items first.
    #[default]
    Ascending,
    /// Heavier items first.
    Descending,
}

/// Compares two items by a measure, then by their natural order.
///
/// This is the length-first order for items that are not letter words,
/// such as co-term parts, where a formal symbol has a weight but no
/// letters. With [`MeasureOrder::Ascending`] and the word length as the
/// measure it agrees with [`WordOrder::LengthFirst`].
pub fn cmp_measure_first<T: Ord>(a: &T, b: &T, measure: impl Fn(&T) -> usize, order: MeasureOrder) -> Ordering {
    let by_measure = measure(a).cmp(&measure(b));
    let by_measure = match order {
        MeasureOrder::Ascending => by_measure,
        MeasureOrder::Descending => by_measure.reverse(),
    };
    by_measure.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_order() {
        let order = WordOrder::Lexicographic;

        assert_eq!(order.compare(&[1, 2], &[1, 3]), Ordering::Less);
        // prefix first
        assert_eq!(order.compare(&[1, 2], &[1, 2, 0]), Ordering::Less);
        // first letter dominates length
        assert_eq!(order.compare(&[2], &[1, 9, 9]), Ordering::Greater);
        assert_eq!(order.compare::<i32>(&[], &[]), Ordering::Equal);
    }

    #[test]
    fn test_length_first_order() {
        let order = WordOrder::LengthFirst;

        assert_eq!(order.compare(&[2], &[1, 9, 9]), Ordering::Less);
        assert_eq!(order.compare(&[1, 3], &[2, 1]), Ordering::Less);
        assert_eq!(order.compare(&[5, 5], &[5, 5]), Ordering::Equal);
    }

    #[test]
    fn test_custom_letter_order() {
        let order = WordOrder::Lexicographic;
        let rev = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(order.compare_by(&[1, 2], &[1, 3], rev), Ordering::Greater);
    }

    #[test]
    fn test_measure_first() {
        let a = vec![9];
        let b = vec![1, 1];
        assert_eq!(cmp_measure_first(&a, &b, Vec::len, MeasureOrder::Ascending), Ordering::Less);
        assert_eq!(cmp_measure_first(&a, &b, Vec::len, MeasureOrder::Descending), Ordering::Greater);
        assert_eq!(
            cmp_measure_first(&a, &b, Vec::len, MeasureOrder::Ascending),
            WordOrder::LengthFirst.compare(&a, &b)
        );
        // equal measures fall back to the natural order
        assert_eq!(
            cmp_measure_first(&vec![2], &vec![1], Vec::len, MeasureOrder::Descending),
            Ordering::Greater
        );
    }
}
