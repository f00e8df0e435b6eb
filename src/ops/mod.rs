//! High-level operations of the engine.

pub(crate) mod consts;
mod exp;
mod log;
mod pow;

pub use exp::fixed_exp;
pub use exp::fixed_exp_unchecked;
pub use log::fixed_log2;
pub use log::fixed_loge;
pub use log::ln;
pub use log::ln_upper_bound_32;
pub use pow::calculate_best_precision;
pub use pow::power;
