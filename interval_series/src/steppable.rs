use crate::errors::{Error, Result};
use std::fmt::Debug;

/// A totally ordered type in which every value has at most one immediate
/// successor and one immediate predecessor.  This is what makes two closed
/// intervals `[A, B]` and `[B + 1, C]` adjacent, with no value left between
/// them.
///
/// Both `successor` and `predecessor` return None at the extreme values of
/// the type, rather than wrapping around.
pub trait Steppable: Ord + Clone + Debug {
    fn successor(&self) -> Option<Self>;
    fn predecessor(&self) -> Option<Self>;

    /// The value immediately after self, or an error if self is already
    /// the largest value of the type.
    fn next(&self) -> Result<Self> {
        self.successor().ok_or_else(|| {
            Error::BoundaryOverflow(format!("no key after {self:?}"))
        })
    }

    /// The value immediately before self, or an error if self is already
    /// the smallest value of the type.
    fn previous(&self) -> Result<Self> {
        self.predecessor().ok_or_else(|| {
            Error::BoundaryOverflow(format!("no key before {self:?}"))
        })
    }

    /// Whether other immediately follows self.
    /// This never fails: nothing follows the largest value.
    fn precedes(&self, other: &Self) -> bool {
        self.successor().is_some_and(|s| s == *other)
    }
}

macro_rules! impl_steppable_int {
    ($($t:ty),*) => {
        $(
            impl Steppable for $t {
                fn successor(&self) -> Option<$t> {
                    self.checked_add(1)
                }
                fn predecessor(&self) -> Option<$t> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_steppable_int!(i8, i16, i32, i64, i128, isize);
impl_steppable_int!(u8, u16, u32, u64, u128, usize);

/// Calendar dates, with a granularity of one day
#[cfg(feature = "chrono")]
impl Steppable for chrono::NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }
    fn predecessor(&self) -> Option<Self> {
        self.pred_opt()
    }
}
