//! Caesar cipher text encoder/decoder.
//!
//! The core lives in [`algos::caesar`]: a pure shift transform that preserves
//! case, leaves non-letters untouched, and treats shifts mod 26. Everything
//! is total; malformed shift input normalizes to 0 instead of failing.

pub mod algos;
pub mod traits;
pub mod utils;
