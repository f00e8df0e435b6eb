//! Mathematical constants.

use primitive_types::U256;

/// `ln(2) * 2^56`, the largest `ln(2)` scale that keeps the product with the binary
/// logarithm (at most 71 bits for any supported precision) well inside 256 bits.
pub(crate) const LN2_SCALE_56: u64 = 0xb17217f7d1cf78;

/// `ceil(ln(2) * 2^32)`, used for coarse natural-log upper bounds.
pub(crate) const LN2_CEIL_32: u64 = 0xb17217f8;

/// Scale for cross-multiplied ratio comparisons against the powers of e below.
pub(crate) const RATIO_SCALE: u64 = 100_000;

/// `e^1` scaled by 100000.
pub(crate) const E1_SCALED: u64 = 271_828;

/// `e^2` scaled by 100000.
pub(crate) const E2_SCALED: u64 = 738_905;

/// `e^3` scaled by 100000.
pub(crate) const E3_SCALED: u64 = 2_008_553;

/// `0xeb5ec5975959c565 / 2^62 ~ 1.9^2`: how much the largest safe exponential input grows
/// per two units of added precision.
pub(crate) const MAX_EXP_GROWTH: u64 = 0xeb5ec5975959c565;

/// Shift normalizing a product with [`MAX_EXP_GROWTH`].
pub(crate) const MAX_EXP_GROWTH_SHIFT: usize = 62;

/// Maclaurin coefficients of the exponential evaluator: `34!`, followed by `34! / n!` for
/// `n = 2..=33`, each obtained from its predecessor by one truncating integer division.
/// The first entry doubles as the scale the accumulated sum is normalized by.
pub(crate) const EXP_COEFFS: [U256; 33] = [
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0x0, 0x0]),
    U256([0x222ed3ad80000000, 0x6f0de268cf7e5641, 0x0, 0x0]),
    U256([0xb60f9be480000000, 0x2504a0cd9a7f7215, 0x0, 0x0]),
    U256([0x6d83e6f920000000, 0x9412833669fdc85, 0x0, 0x0]),
    U256([0xe2b3fafea0000000, 0x1d9d4d714865f4d, 0x0, 0x0]),
    U256([0xfb1dff2a70000000, 0x4ef8ce836bba8c, 0x0, 0x0]),
    U256([0x6d04490610000000, 0xb481d807d1aa6, 0x0, 0x0]),
    U256([0xcda08920c2000000, 0x16903b00fa354, 0x0, 0x0]),
    U256([0x334ab9e732000000, 0x281cdaac677b, 0x0, 0x0]),
    U256([0xeb8778fd85000000, 0x402e2aad725, 0x0, 0x0]),
    U256([0xfe2396a2af000000, 0x5d5a6c9f31, 0x0, 0x0]),
    U256([0x2a82f73839400000, 0x7c7890d44, 0x0, 0x0]),
    U256([0x34526b58e400000, 0x9931ed54, 0x0, 0x0]),
    U256([0x24ce150cf7e00000, 0xaf147cf, 0x0, 0x0]),
    U256([0x46b867cdaa200000, 0xbac085, 0x0, 0x0]),
    U256([0x546b867cdaa20000, 0xbac08, 0x0, 0x0]),
    U256([0x41338061b2820000, 0xafc4, 0x0, 0x0]),
    U256([0xcabbc0056d790000, 0x9c3, 0x0, 0x0]),
    U256([0x9168328705c30000, 0x83, 0x0, 0x0]),
    U256([0x94120286c049c000, 0x6, 0x0, 0x0]),
    U256([0x50319e98b3d2c000, 0x0, 0x0, 0x0]),
    U256([0x3a52a1e36b82000, 0x0, 0x0, 0x0]),
    U256([0x289286e0fce000, 0x0, 0x0, 0x0]),
    U256([0x1b0c59eb53400, 0x0, 0x0, 0x0]),
    U256([0x114f95b55400, 0x0, 0x0, 0x0]),
    U256([0xaa7210d200, 0x0, 0x0, 0x0]),
    U256([0x650139600, 0x0, 0x0, 0x0]),
    U256([0x39b78e80, 0x0, 0x0, 0x0]),
    U256([0x1fd8080, 0x0, 0x0, 0x0]),
    U256([0x10fbc0, 0x0, 0x0, 0x0]),
    U256([0x8c40, 0x0, 0x0, 0x0]),
    U256([0x462, 0x0, 0x0, 0x0]),
    U256([0x22, 0x0, 0x0, 0x0]),
];

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_exp_coeffs_regenerate() {
        // 34! fits 128 bits
        assert_eq!(
            EXP_COEFFS[0],
            U256::from(295232799039604140847618609643520000000u128)
        );

        let mut acc = EXP_COEFFS[0];
        for (i, c) in EXP_COEFFS.iter().enumerate().skip(1) {
            acc = acc / U256::from((i + 1) as u64);
            assert_eq!(acc, *c);
        }
    }
}
