// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Checked narrowing conversions between primitive numeric types.
//!
//! [`narrow`] converts a value of one arithmetic type into another and succeeds
//! only if the destination represents the exact same value. It never rounds,
//! truncates, wraps or saturates; a conversion that would change the value
//! fails with [`LossyConversionError`].
//!
//! ```
//! use reifydb_narrow::narrow;
//!
//! assert_eq!(narrow::<i8, _>(127i32), Ok(127i8));
//! assert!(narrow::<i8, _>(128i32).is_err());
//! assert!(narrow::<u32, _>(-1i64).is_err());
//!
//! assert_eq!(narrow::<f32, _>(1u64 << 59), Ok(576460752303423488.0f32));
//! assert!(narrow::<f32, _>(16777217i32).is_err());
//!
//! assert_eq!(narrow::<u8, _>(255.0f64), Ok(255u8));
//! assert!(narrow::<u8, _>(2.5f64).is_err());
//!
//! assert!(narrow::<f32, _>(0.1f64).is_err());
//! ```
//!
//! Only conversions between distinct arithmetic types exist. Converting a type
//! into itself does not compile:
//!
//! ```compile_fail
//! use reifydb_narrow::narrow;
//!
//! let _ = narrow::<u8, _>(1u8);
//! ```

mod bits;
mod error;
mod limits;
mod narrow;

pub use bits::BitSpan;
pub use error::LossyConversionError;
pub use narrow::Narrow;

/// Converts `x` into `To` if `To` can represent the exact value of `x`.
///
/// Shorthand for [`Narrow::narrow`] that lets the destination be named at the
/// call site: `narrow::<u16, _>(x)`.
#[inline]
pub fn narrow<To, From>(x: From) -> Result<To, LossyConversionError>
where
	From: Narrow<To>,
{
	x.narrow()
}
