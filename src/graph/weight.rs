use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Edge weight and path distance type.
///
/// `infinity()` doubles as the "unreachable" distance. Addition must never wrap:
/// integer impls saturate at `MAX`, which is also their infinity.
pub trait Weight: Copy + Ord + Hash + Debug + Zero + Send + Sync {
    /// The unreachable sentinel
    fn infinity() -> Self;

    /// `self + rhs`, clamped to `infinity()`
    fn saturating_add(self, rhs: Self) -> Self;

    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u32, u64, usize, i32, i64);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn infinity() -> Self {
                    OrderedFloat(<$t>::INFINITY)
                }

                fn saturating_add(self, rhs: Self) -> Self {
                    // IEEE addition already overflows to +inf
                    self + rhs
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
