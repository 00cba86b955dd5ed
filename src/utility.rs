//! Miscellaneous generic utilities.

use crate::Year;

/// Did the results of the last operation (narrowing a wide year for example), saturate or not.
///
/// This is supposed to behave like `Option<T>` of `checked_*` operations but more concrete and
/// uniquely defined for better usage in const-context.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "c", repr(C))]
pub struct DidSaturate<T> {
    /// Whether the result was clamped to the nearest representable value.
    pub did_saturate: bool,
    /// The result of the operation.
    pub result: T,
}

impl<T> DidSaturate<T> {
    /// Create an instance with [`Self::did_saturate`] set to true.
    pub const fn saturated(result: T) -> Self {
        Self::new(true, result)
    }

    /// Create an instance with [`Self::did_saturate`] set to false.
    pub const fn not_saturated(result: T) -> Self {
        Self::new(false, result)
    }

    /// A shorthand for creation.
    //
    // Sometimes the results are passed and did_saturate may use it, having did_saturate at the
    // start makes that possible without an extra binding/variable
    pub const fn new(did_saturate: bool, result: T) -> Self {
        Self {
            did_saturate,
            result,
        }
    }
}

impl DidSaturate<Year> {
    /// Narrow a year (or month or day) computed in `i64` back to 32 bits, clamping at the bounds.
    pub const fn narrow(wide: i64) -> Self {
        if wide > Year::MAX as i64 {
            Self::saturated(Year::MAX)
        } else if wide < Year::MIN as i64 {
            Self::saturated(Year::MIN)
        } else {
            Self::not_saturated(wide as Year)
        }
    }
}

impl<T> From<DidSaturate<T>> for Option<T> {
    fn from(value: DidSaturate<T>) -> Self {
        match value.did_saturate {
            true => None,
            false => Some(value.result),
        }
    }
}

impl<T> PartialEq<T> for DidSaturate<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &T) -> bool {
        self.result.eq(other)
    }
}
