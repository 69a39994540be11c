use std::{fmt::Display, str::FromStr};

use crate::{errors::HeapError, numeric::Numeric};

/// Which extreme a heap keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Min,
    Max,
}

impl Polarity {
    /// Is `a` strictly better than `b`?
    ///
    /// Better means smaller for a min-heap and larger for a max-heap. Equal
    /// (or unordered) values are never better than one another, so ties
    /// do not cause swaps.
    pub fn prefers<T: PartialOrd>(&self, a: &T, b: &T) -> bool {
        match self {
            Polarity::Min => a < b,
            Polarity::Max => a > b,
        }
    }

    /// Does a `parent` over `child` satisfy the heap property?
    pub fn ordered<T: PartialOrd>(&self, parent: &T, child: &T) -> bool {
        !self.prefers(child, parent)
    }

    /// The value that beats every other value, and so sifts to the root.
    pub fn sentinel<T: Numeric>(&self) -> T {
        match self {
            Polarity::Min => T::LOWEST,
            Polarity::Max => T::HIGHEST,
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Min => write!(f, "min_heap"),
            Polarity::Max => write!(f, "max_heap"),
        }
    }
}

impl FromStr for Polarity {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "min_heap" => Ok(Polarity::Min),
            "max" | "max_heap" => Ok(Polarity::Max),
            _ => Err(HeapError::BadPolarity(String::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers() {
        assert!(Polarity::Min.prefers(&1, &2));
        assert!(!Polarity::Min.prefers(&2, &1));
        assert!(!Polarity::Min.prefers(&2, &2));
        assert!(Polarity::Max.prefers(&2.5, &1.0));
        assert!(!Polarity::Max.prefers(&1.0, &1.0));
    }

    #[test]
    fn test_ordered_allows_ties() {
        assert!(Polarity::Min.ordered(&3, &3));
        assert!(Polarity::Max.ordered(&3, &3));
        assert!(Polarity::Min.ordered(&3, &4));
        assert!(!Polarity::Max.ordered(&3, &4));
    }

    #[test]
    fn test_sentinel() {
        let s: f64 = Polarity::Min.sentinel();
        assert_eq!(s, f64::NEG_INFINITY);
        let s: f64 = Polarity::Max.sentinel();
        assert_eq!(s, f64::INFINITY);
        let s: i16 = Polarity::Max.sentinel();
        assert_eq!(s, i16::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!("min".parse::<Polarity>(), Ok(Polarity::Min));
        assert_eq!("MAX_HEAP".parse::<Polarity>(), Ok(Polarity::Max));
        assert_eq!(" max ".parse::<Polarity>(), Ok(Polarity::Max));
        assert_eq!(
            "median".parse::<Polarity>(),
            Err(HeapError::BadPolarity(String::from("median")))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for p in [Polarity::Min, Polarity::Max] {
            assert_eq!(p.to_string().parse::<Polarity>(), Ok(p));
        }
    }
}
