//! Natural and binary logarithm estimation.

use crate::common::util::floor_log2;
use crate::defs::Error;
use crate::defs::Precision;
use crate::defs::MAX_PRECISION;
use crate::ops::consts::E1_SCALED;
use crate::ops::consts::E2_SCALED;
use crate::ops::consts::E3_SCALED;
use crate::ops::consts::LN2_CEIL_32;
use crate::ops::consts::LN2_SCALE_56;
use crate::ops::consts::RATIO_SCALE;
use primitive_types::U256;

/// Computes `log2(x >> precision) << precision`, i.e. the binary logarithm of a fixed-point
/// value as a fixed-point value at the same precision. The returned number is always lower
/// than or equal to the actual logarithm, never above it.
///
/// For inputs in `[2^32, 2^256)` at precision 32 the output lies in `[0, 0xdfffffffff]`.
///
/// ## Errors
///
///  - Domain: `x` is below `2^precision` (the represented value is below one, and its
///    logarithm would be negative), or the precision is out of range.
pub fn fixed_log2(x: U256, precision: Precision) -> Result<U256, Error> {
    if precision > MAX_PRECISION {
        return Err(Error::Domain);
    }

    let fixed_one = U256::one() << precision;
    let fixed_two = fixed_one << 1;

    // numbers below 1 have a negative logarithm
    if x < fixed_one {
        return Err(Error::Domain);
    }

    let mut x = x;
    let mut hi = U256::zero();

    // integer part: every halving above 2 contributes one whole bit
    while x >= fixed_two {
        x >>= 1;
        hi += fixed_one;
    }

    // fractional part: each squaring refines the estimate by one bit
    for i in 0..precision {
        // x < 2^(precision + 1) here, so the square fits 256 bits
        x = (x * x) >> precision;
        if x >= fixed_two {
            x >>= 1;
            hi += U256::one() << (precision - 1 - i);
        }
    }

    Ok(hi)
}

/// Computes the natural logarithm of a fixed-point value by rescaling the binary
/// logarithm with `ln(2) * 2^56`. The 56-bit constant is the largest scale whose
/// product with the binary logarithm stays inside 256 bits.
///
/// ## Errors
///
///  - Domain: `x` is below `2^precision`, or the precision is out of range.
pub fn fixed_loge(x: U256, precision: Precision) -> Result<U256, Error> {
    let log2 = fixed_log2(x, precision)?;

    Ok((log2 * U256::from(LN2_SCALE_56)) >> 56)
}

/// Computes the natural logarithm of the rational `numerator / denominator` as a
/// fixed-point value at `precision`. The ratio must be at least one; logarithms of
/// values below one are negative and not representable.
///
/// For valid inputs the output lies in `[0, 0x9b43d4f8d6]`. The division rescaling
/// the numerator is the one place where a fractional remainder is discarded.
///
/// ## Errors
///
///  - Domain: `denominator` exceeds `numerator`, either operand is zero, either operand
///    is `2^(256 - precision)` or more (no headroom for the fixed-point shift), or the
///    precision is out of range.
pub fn ln(numerator: U256, denominator: U256, precision: Precision) -> Result<U256, Error> {
    if precision > MAX_PRECISION {
        return Err(Error::Domain);
    }

    // ratios below one yield negative values; log(1) is the lowest we can go
    if numerator.is_zero() || denominator.is_zero() || denominator > numerator {
        return Err(Error::Domain);
    }

    // the upper bits are taken by the precision shift
    if numerator.bits() + precision > 256 || denominator.bits() + precision > 256 {
        return Err(Error::Domain);
    }

    fixed_loge((numerator << precision) / denominator, precision)
}

/// Returns an integer upper bound of the natural logarithm of `base_n / base_d`
/// scaled by `2^32`, computed as `(floor_log2((base_n - 1) / base_d) + 1) * ceil(ln(2) * 2^32)`.
///
/// Ratios below `e^3` would get a too coarse estimate from `floor_log2` and are bounded
/// manually, comparing the ratio against `100000`-scaled powers of e by cross
/// multiplication in 512 bits.
///
/// The bound is provable: it is never below the true value. It serves precision
/// planning only and is not a substitute for [`ln`].
///
/// ## Errors
///
///  - Domain: `base_n` does not strictly exceed `base_d`, or `base_d` is zero.
pub fn ln_upper_bound_32(base_n: U256, base_d: U256) -> Result<U256, Error> {
    if base_d.is_zero() || base_n <= base_d {
        return Err(Error::Domain);
    }

    let scaled = base_n.full_mul(U256::from(RATIO_SCALE));

    // base_n / base_d < e^1; floor_log2 would return 0 for ratios below 2
    if scaled <= base_d.full_mul(U256::from(E1_SCALED)) {
        return Ok(U256::one() << 32);
    }
    // base_n / base_d < e^2; floor_log2 would return 1 for ratios below 4
    if scaled <= base_d.full_mul(U256::from(E2_SCALED)) {
        return Ok(U256::from(2u8) << 32);
    }
    // base_n / base_d < e^3; floor_log2 would return 2 for ratios below 8
    if scaled <= base_d.full_mul(U256::from(E3_SCALED)) {
        return Ok(U256::from(3u8) << 32);
    }

    let log2_bound = floor_log2((base_n - U256::one()) / base_d) + 1;

    Ok(U256::from(log2_bound) * U256::from(LN2_CEIL_32))
}
