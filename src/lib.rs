//! Fixed-power is a deterministic, overflow-safe fixed-point power engine for 256-bit unsigned integers.
//!
//! The crate computes `(base_n / base_d) ^ (exp_n / exp_d)` for unsigned rational inputs and
//! returns the result scaled by `2^precision`. Instead of raising the base to the power directly,
//! the engine evaluates `e ^ (ln(base_n / base_d) * exp_n / exp_d)`: the natural logarithm is
//! estimated with a bit-by-bit binary logarithm, and the exponential with a 33-term Maclaurin
//! series over fixed-point integers. Every operation either produces a value representable in
//! 256 bits or fails, never silently wrapping. This allows integer-only environments, such as
//! bonding-curve pricing contracts, to evaluate power and root expressions safely.
//!
//! The precision can be chosen by the caller, or [`calculate_best_precision`] can be used to find
//! the highest precision for which the exponentiation is guaranteed not to exceed its input bound.
//!
//! ```rust
//! use fixed_power::{calculate_best_precision, power, Error, U256};
//!
//! fn main() -> Result<(), Error> {
//!     // square root of 4, i.e. (4 / 1) ^ (1 / 2)
//!     let (base_n, base_d) = (U256::from(4u32), U256::from(1u32));
//!     let (exp_n, exp_d) = (U256::from(1u32), U256::from(2u32));
//!
//!     let precision = calculate_best_precision(base_n, base_d, exp_n, exp_d)?;
//!     let result = power(base_n, base_d, exp_n, exp_d, precision)?;
//!
//!     // the result is slightly below 2 * 2^62: the logarithm estimate never overestimates
//!     assert_eq!(precision, 62);
//!     assert_eq!(result, U256::from(0x7fffffffffffff29u64));
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]

mod common;
mod defs;
mod ops;

pub use crate::common::util::checked_mul;
pub use crate::common::util::floor_log2;
pub use crate::defs::Error;
pub use crate::defs::Precision;
pub use crate::defs::BASE_PRECISION;
pub use crate::defs::MAX_FIXED_EXP_32;
pub use crate::defs::MAX_PRECISION;
pub use crate::ops::calculate_best_precision;
pub use crate::ops::fixed_exp;
pub use crate::ops::fixed_exp_unchecked;
pub use crate::ops::fixed_log2;
pub use crate::ops::fixed_loge;
pub use crate::ops::ln;
pub use crate::ops::ln_upper_bound_32;
pub use crate::ops::power;

pub use primitive_types::U256;
pub use primitive_types::U512;
