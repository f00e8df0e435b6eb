//! Auxiliary functions.

use crate::defs::Error;
use primitive_types::U256;
use primitive_types::U512;

/// Returns the largest integer smaller than or equal to the binary logarithm of `n`,
/// i.e. `floor(log2(n))`, by probing 8 descending power-of-two shift amounts.
/// The cost is 8 comparisons regardless of the magnitude of `n`.
///
/// The domain is `n >= 1`. For `n = 0` the function degenerately returns 0, which is not
/// a valid logarithm; callers must guard against zero.
pub fn floor_log2(mut n: U256) -> u32 {
    let mut t = 0u32;
    let mut s = 128u32;

    while s > 0 {
        if n >= U256::one() << s {
            n >>= s;
            t |= s;
        }
        s >>= 1;
    }

    t
}

/// Multiplies `x` by `y`, failing explicitly when the product does not fit 256 bits.
///
/// ## Errors
///
///  - Overflow: the mathematical product of `x` and `y` requires more than 256 bits.
pub fn checked_mul(x: U256, y: U256) -> Result<U256, Error> {
    U256::try_from(x.full_mul(y)).map_err(|_| Error::Overflow)
}

/// The low 256 bits of a 512-bit scratch value.
pub(crate) fn low_u256(v: U512) -> U256 {
    let w = v.0;
    U256([w[0], w[1], w[2], w[3]])
}
