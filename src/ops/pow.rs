//! Power evaluation and precision planning.

use crate::common::util::checked_mul;
use crate::defs::Error;
use crate::defs::Precision;
use crate::defs::BASE_PRECISION;
use crate::defs::MAX_FIXED_EXP_32;
use crate::defs::MAX_PRECISION;
use crate::ops::consts::MAX_EXP_GROWTH;
use crate::ops::consts::MAX_EXP_GROWTH_SHIFT;
use crate::ops::exp::fixed_exp;
use crate::ops::log::ln;
use crate::ops::log::ln_upper_bound_32;
use primitive_types::U256;
use primitive_types::U512;

/// Computes `(base_n / base_d) ^ (exp_n / exp_d)` scaled by `2^precision`, as
/// `e ^ (ln(base_n / base_d) * exp_n / exp_d)`.
///
/// The division by `exp_d` is a plain integer division: the precision loss there is
/// unavoidable and not an overflow concern, since both the logarithm and the
/// exponentiation are overflow-safe on their own.
///
/// ## Errors
///
///  - Domain: the base ratio is below one, an operand is zero, or the precision is
///    out of range (see [`ln`]).
///  - Overflow: the logarithm product does not fit 256 bits, or the exponential input
///    exceeds the bound for `precision` (see [`fixed_exp`]).
pub fn power(
    base_n: U256,
    base_d: U256,
    exp_n: U256,
    exp_d: U256,
    precision: Precision,
) -> Result<U256, Error> {
    if exp_d.is_zero() {
        return Err(Error::Domain);
    }

    let logbase = ln(base_n, base_d, precision)?;
    let scaled_exp = checked_mul(logbase, exp_n)? / exp_d;

    fixed_exp(scaled_exp, precision)
}

/// Predicts the highest precision at which `power` can evaluate `base ^ exp` without
/// the exponential input exceeding its bound, so the result is as accurate as possible.
///
/// An upper bound of `ln(base) * exp` is weighed against the largest permitted
/// exponential input, scaling the latter by `~1.9^2` per two candidate precision units.
/// The outcome only affects accuracy: `fixed_exp` still asserts the bound for whatever
/// precision is used. The result is always one of `{32, 34, ..., 62}`.
///
/// ## Errors
///
///  - Domain: `base_n` does not strictly exceed `base_d` (for a ratio of exactly one
///    the logarithm is zero and no planning is needed), or a denominator is zero.
pub fn calculate_best_precision(
    base_n: U256,
    base_d: U256,
    exp_n: U256,
    exp_d: U256,
) -> Result<Precision, Error> {
    if exp_d.is_zero() {
        return Err(Error::Domain);
    }

    // the products below reach past 256 bits for large exponent numerators
    let max_val = ln_upper_bound_32(base_n, base_d)?.full_mul(exp_n);
    let exp_d = U512::from(exp_d);
    let growth = U512::from(MAX_EXP_GROWTH);

    let mut max_exp = U512::from(MAX_FIXED_EXP_32);
    let mut found = None;
    let mut p = 0;

    while p < BASE_PRECISION {
        if max_exp < (max_val << p) / exp_d {
            found = Some(p);
            break;
        }
        max_exp = (max_exp * growth) >> MAX_EXP_GROWTH_SHIFT;
        p += 2;
    }

    Ok(match found {
        // every candidate was safe
        None => MAX_PRECISION,
        // not even the first improvement was safe
        Some(0) => BASE_PRECISION,
        // the last precision that was still safe
        Some(p) => p + BASE_PRECISION - 2,
    })
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_power_of_one() {
        // 1 to any power is 1 at every precision
        for p in [32usize, 40, 62] {
            assert_eq!(
                power(U256::one(), U256::one(), U256::from(7u8), U256::from(3u8), p),
                Ok(U256::one() << p)
            );
        }

        assert_eq!(
            power(U256::one(), U256::one(), U256::one(), U256::one(), 32),
            Ok(U256::from(0x100000000u64))
        );
    }

    #[test]
    fn test_power_values() {
        // sqrt(4) and cbrt(8), both just under 2 in 32-bit fixed point
        assert_eq!(
            power(U256::from(4u8), U256::one(), U256::one(), U256::from(2u8), 32),
            Ok(U256::from(0x1fffffffdu64))
        );
        assert_eq!(
            power(U256::from(8u8), U256::one(), U256::one(), U256::from(3u8), 32),
            Ok(U256::from(0x1fffffffdu64))
        );

        // 2^3
        assert_eq!(
            power(U256::from(2u8), U256::one(), U256::from(3u8), U256::one(), 32),
            Ok(U256::from(0x7ffffffecu64))
        );

        // (3/2)^(5/7) at the highest precision
        assert_eq!(
            power(U256::from(3u8), U256::from(2u8), U256::from(5u8), U256::from(7u8), 62),
            Ok(U256::from(0x557fa9f18a48c803u64))
        );
    }

    #[test]
    fn test_power_errors() {
        // base below one
        assert_eq!(
            power(U256::one(), U256::from(2u8), U256::one(), U256::one(), 32),
            Err(Error::Domain)
        );

        // zero exponent denominator
        assert_eq!(
            power(U256::from(2u8), U256::one(), U256::one(), U256::zero(), 32),
            Err(Error::Domain)
        );

        // unsupported precision
        assert_eq!(
            power(U256::from(2u8), U256::one(), U256::one(), U256::one(), 63),
            Err(Error::Domain)
        );

        // logarithm product past 256 bits
        assert_eq!(
            power(U256::from(4u8), U256::one(), U256::MAX, U256::one(), 32),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn test_calculate_best_precision() {
        let cbp = |bn: u64, bd: u64, en: u64, ed: u64| {
            calculate_best_precision(
                U256::from(bn),
                U256::from(bd),
                U256::from(en),
                U256::from(ed),
            )
        };

        // a huge exponent leaves no room for improvement past the baseline
        assert_eq!(cbp(1_000_000, 1, 1_000_000, 1), Ok(32));

        // small expressions allow the ceiling
        assert_eq!(cbp(2, 1, 1, 1), Ok(62));
        assert_eq!(cbp(4, 1, 1, 2), Ok(62));
        assert_eq!(cbp(3, 2, 5, 7), Ok(62));

        // intermediate stops of the search
        assert_eq!(cbp(u64::MAX, 1, 3, 5), Ok(48));
        assert_eq!(cbp(100, 1, 7, 2), Ok(60));

        // a ratio of one needs no planning and is rejected
        assert_eq!(cbp(5, 5, 1, 1), Err(Error::Domain));
        assert_eq!(cbp(1, 2, 1, 1), Err(Error::Domain));
        assert_eq!(cbp(2, 1, 1, 0), Err(Error::Domain));

        // the result is always an even precision in [32, 62]
        for _ in 0..1000 {
            let base_d = random::<u64>() | 1;
            let base_n = base_d as u128 + random::<u64>() as u128 + 1;
            let p = calculate_best_precision(
                U256::from(base_n),
                U256::from(base_d),
                U256::from(random::<u64>()),
                U256::from(random::<u64>() | 1),
            )
            .unwrap();

            assert!((32..=62).contains(&p));
            assert_eq!(p % 2, 0);
        }
    }

    #[test]
    fn test_planned_precision_never_overflows_power() {
        // above the baseline the chosen precision is accepted by the whole pipeline
        for (bn, bd, en, ed) in [
            (2u64, 1u64, 1u64, 1u64),
            (7, 3, 2, 5),
            (1_000, 999, 1, 1),
            (u64::MAX, 1, 3, 5),
            (100, 1, 7, 2),
            (5, 4, 11, 3),
        ] {
            let (bn, bd, en, ed) = (
                U256::from(bn),
                U256::from(bd),
                U256::from(en),
                U256::from(ed),
            );
            let p = calculate_best_precision(bn, bd, en, ed).unwrap();
            assert!(power(bn, bd, en, ed, p).is_ok());
        }
    }
}
