//! Maclaurin-series exponentiation.

use crate::common::util::low_u256;
use crate::defs::Error;
use crate::defs::Precision;
use crate::defs::BASE_PRECISION;
use crate::defs::MAX_FIXED_EXP_32;
use crate::defs::MAX_PRECISION;
use crate::ops::consts::EXP_COEFFS;
use crate::ops::consts::MAX_EXP_GROWTH;
use crate::ops::consts::MAX_EXP_GROWTH_SHIFT;
use primitive_types::U256;
use primitive_types::U512;

// Largest input the series evaluator accepts at the given precision, derived from the
// bound at precision 32 by geometric scaling rather than a per-precision table.
fn max_fixed_exp(precision: Precision) -> U256 {
    let mut max_exp = MAX_FIXED_EXP_32;
    let mut p = BASE_PRECISION;

    while p < precision {
        max_exp = (max_exp * U256::from(MAX_EXP_GROWTH)) >> MAX_EXP_GROWTH_SHIFT;
        p += 2;
    }

    max_exp
}

/// Computes `e^(x >> precision) << precision` after asserting that `x` does not exceed
/// the largest input permitted at `precision`. At precision 32 the bound is
/// [`MAX_FIXED_EXP_32`]; each two units of added precision raise it by a factor of
/// roughly 3.61.
///
/// ## Errors
///
///  - Overflow: `x` exceeds the largest permitted input at `precision`.
///  - Domain: the precision is out of range.
pub fn fixed_exp(x: U256, precision: Precision) -> Result<U256, Error> {
    if precision > MAX_PRECISION {
        return Err(Error::Domain);
    }

    if x > max_fixed_exp(precision) {
        return Err(Error::Overflow);
    }

    Ok(fixed_exp_unchecked(x, precision))
}

/// Evaluates `e^(x >> precision) << precision` as a 33-term Maclaurin summation
///
/// `e^x = 1 + x + x^2/2! + ... + x^n/n!`
///
/// over factorial-derived integer coefficients, reproducing the truncating division of
/// the fixed-point representation at every step. Visible for test harnesses; no bounds
/// are checked here, and inputs beyond the limit enforced by [`fixed_exp`] produce
/// meaningless results. Intermediate terms are carried in 512 bits: near the input
/// bound the accumulated sum needs temporary headroom beyond 256 bits, even though
/// the final quotient fits.
pub fn fixed_exp_unchecked(x: U256, precision: Precision) -> U256 {
    let x = U512::from(x);
    let scale = U512::from(EXP_COEFFS[0]);

    let mut xi = x;
    let mut res = (scale << precision) + xi * scale;

    for c in &EXP_COEFFS[1..] {
        xi = (xi * x) >> precision;
        res += xi * U512::from(*c);
    }

    low_u256(res / scale)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_max_fixed_exp() {
        assert_eq!(max_fixed_exp(32), MAX_FIXED_EXP_32);

        // spot values of the dynamically approximated bound table
        assert_eq!(max_fixed_exp(34), U256::from(0xcf8014760eu64));
        assert_eq!(max_fixed_exp(48), U256::from(0x1ccf4b44bb20d0u64));
        assert_eq!(max_fixed_exp(62), U256::from(0x3fffffffffffe6652u128));
    }

    #[test]
    fn test_fixed_exp_bounds() {
        // largest valid input at precision 32, and the first invalid one
        let max = U256::from(242329958953u64);
        assert_eq!(max, MAX_FIXED_EXP_32);
        assert_eq!(
            fixed_exp(max, 32),
            Ok(U256::from(0x59ce8876bf3a3b1b396ae19c95u128))
        );
        assert_eq!(fixed_exp(max + U256::one(), 32), Err(Error::Overflow));

        // same at the highest precision
        let max = max_fixed_exp(62);
        assert!(fixed_exp(max, 62).is_ok());
        assert_eq!(fixed_exp(max + U256::one(), 62), Err(Error::Overflow));

        assert_eq!(fixed_exp(U256::zero(), 63), Err(Error::Domain));
    }

    #[test]
    fn test_fixed_exp_unchecked() {
        // e^0 = 1
        assert_eq!(fixed_exp_unchecked(U256::zero(), 32), U256::one() << 32);

        // e^1 in 32-bit fixed point, truncated
        assert_eq!(
            fixed_exp_unchecked(U256::one() << 32, 32),
            U256::from(0x2b7e15162u64)
        );
    }
}
