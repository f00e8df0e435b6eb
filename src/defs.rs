//! Definitions.

use core::fmt::Display;
use primitive_types::U256;

/// Fixed-point scaling exponent. A fixed-point value with precision `p` represents
/// the real number `value / 2^p`.
pub type Precision = usize;

/// Highest supported precision.
pub const MAX_PRECISION: Precision = 62;

/// Precision at which the exponential input bound is anchored. This is also the lowest
/// precision [`calculate_best_precision`](crate::calculate_best_precision) returns.
pub const BASE_PRECISION: Precision = 32;

/// Largest input [`fixed_exp`](crate::fixed_exp) accepts at precision 32.
pub const MAX_FIXED_EXP_32: U256 = U256([0x386bfdba29, 0, 0, 0]);

/// Possible errors.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Error {
    /// An input violates a precondition of the operation: a ratio below one where at least
    /// one is required, a zero numerator or denominator, a precision outside the supported
    /// range, or a value too large to shift left within 256 bits.
    Domain,

    /// A computed product, or an exponential input, exceeds the safe bound for the
    /// given precision.
    Overflow,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::Domain => "argument outside of the valid domain",
            Error::Overflow => "256-bit overflow",
        };
        f.write_str(repr)
    }
}
