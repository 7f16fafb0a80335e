//! Capabilities required of the values stored in a graph.

use nalgebra::Scalar;
use num_traits::{AsPrimitive, CheckedAdd};

/// A value that can be stored in a graph cell.
///
/// The `Default` value is the "no edge" sentinel a freshly sized matrix is filled with: zero for
/// the numeric primitives, `false` for `bool`.
pub trait Element: Scalar + Copy + Default {}

impl<T> Element for T where T: Scalar + Copy + Default {}

/// Addition that reports overflow instead of panicking or wrapping.
pub trait Accumulate: Sized {
    /// Returns `self + value`, or `None` if the sum isn't representable.
    ///
    /// Floats overflow when two finite values sum to an infinity.
    fn accumulate(self, value: Self) -> Option<Self>;
}

macro_rules! accumulate_integer {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                fn accumulate(self, value: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &value)
                }
            }
        )*
    };
}

macro_rules! accumulate_float {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                fn accumulate(self, value: Self) -> Option<Self> {
                    let sum = self + value;

                    if sum.is_infinite() && self.is_finite() && value.is_finite() {
                        return None;
                    }

                    Some(sum)
                }
            }
        )*
    };
}

accumulate_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
accumulate_float!(f32, f64);

/// A numeric edge weight, can be accumulated, ordered and rescaled into an `f64`.
pub trait Weight: Element + PartialOrd + Accumulate + AsPrimitive<f64> {}

impl<T> Weight for T where T: Element + PartialOrd + Accumulate + AsPrimitive<f64> {}
