//! Common utilities.

pub mod util;
