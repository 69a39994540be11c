use std::fmt::Debug;

/// Bare numeric values that can be stored in a [`Heap`](crate::heap::Heap).
///
/// Besides ordering, a numeric type must name its two extremes. They are
/// used as sentinels when deleting: for floats they are the infinities,
/// for integers the representable minimum and maximum.
pub trait Numeric: Copy + PartialOrd + Debug {
    /// No value of the type compares below this one.
    const LOWEST: Self;

    /// No value of the type compares above this one.
    const HIGHEST: Self;
}

macro_rules! numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const LOWEST: Self = <$t>::NEG_INFINITY;
                const HIGHEST: Self = <$t>::INFINITY;
            }
        )*
    };
}

macro_rules! numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
            }
        )*
    };
}

numeric_float!(f32, f64);
numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_extremes() {
        assert_eq!(f64::LOWEST, f64::NEG_INFINITY);
        assert_eq!(<f32 as Numeric>::HIGHEST, f32::INFINITY);
        assert!(f64::LOWEST < f64::MIN);
    }

    #[test]
    fn test_int_extremes() {
        assert_eq!(<i32 as Numeric>::LOWEST, i32::MIN);
        assert_eq!(<u8 as Numeric>::LOWEST, 0);
        assert_eq!(<u64 as Numeric>::HIGHEST, u64::MAX);
    }
}
