// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::{any::type_name, fmt::Display};

use tracing::trace;

use crate::LossyConversionError;

/// Lossless conversion into `To`.
///
/// Implemented for every ordered pair of distinct primitive arithmetic types.
/// There is no `Narrow<T> for T`.
pub trait Narrow<To>: Sized {
	/// Returns `self` as `To`, or [`LossyConversionError`] if `To` cannot
	/// represent the exact value of `self`.
	fn narrow(self) -> Result<To, LossyConversionError>;
}

#[cold]
#[inline(never)]
fn lossy<From: Display, To>(value: From) -> LossyConversionError {
	trace!(
		target: "reifydb_narrow",
		from = type_name::<From>(),
		to = type_name::<To>(),
		%value,
		"rejected lossy conversion"
	);
	LossyConversionError
}

// Signed integer into any integer. Negative values never reach an unsigned
// destination; a destination with at least as many value bits takes every
// remaining value, anything narrower is bounds checked.
macro_rules! impl_narrow_signed_to_int {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl $crate::Narrow<$dst> for $src {
                #[inline]
                fn narrow(self) -> Result<$dst, $crate::LossyConversionError> {
                    use $crate::{limits::Limits, narrow::lossy};

                    if !<$dst as Limits>::SIGNED && self < 0 {
                        return Err(lossy::<$src, $dst>(self));
                    }

                    if <$dst as Limits>::DIGITS >= <$src as Limits>::DIGITS
                        || (self >= <$dst>::MIN as $src && self <= <$dst>::MAX as $src)
                    {
                        Ok(self as $dst)
                    } else {
                        Err(lossy::<$src, $dst>(self))
                    }
                }
            }
        )*
    };
}

// Unsigned integer into any integer; only the upper bound can be exceeded.
macro_rules! impl_narrow_unsigned_to_int {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl $crate::Narrow<$dst> for $src {
                #[inline]
                fn narrow(self) -> Result<$dst, $crate::LossyConversionError> {
                    use $crate::{limits::Limits, narrow::lossy};

                    if <$dst as Limits>::DIGITS >= <$src as Limits>::DIGITS
                        || self <= <$dst>::MAX as $src
                    {
                        Ok(self as $dst)
                    } else {
                        Err(lossy::<$src, $dst>(self))
                    }
                }
            }
        )*
    };
}

// Integer into float. Exact iff the significant bit run of |self| fits the
// mantissa, wherever that run sits.
macro_rules! impl_narrow_int_to_float {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl $crate::Narrow<$dst> for $src {
                #[inline]
                fn narrow(self) -> Result<$dst, $crate::LossyConversionError> {
                    use $crate::{BitSpan, limits::Limits, narrow::lossy};

                    if <$dst as Limits>::DIGITS >= <$src as Limits>::DIGITS
                        || BitSpan::bit_span(self) <= <$dst as Limits>::DIGITS
                    {
                        Ok(self as $dst)
                    } else {
                        Err(lossy::<$src, $dst>(self))
                    }
                }
            }
        )*
    };
}

// Float into integer. The value has to be whole and inside [MIN, 2^DIGITS).
// Both bounds are powers of two and therefore exact in the source float;
// 2^128 overflows f32 to +inf, which still bounds correctly. For whole numbers
// `< 2^DIGITS` is the same as `<= MAX`.
macro_rules! impl_narrow_float_to_int {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl $crate::Narrow<$dst> for $src {
                #[inline]
                fn narrow(self) -> Result<$dst, $crate::LossyConversionError> {
                    use ::num_traits::float::FloatCore;
                    use $crate::{limits::Limits, narrow::lossy};

                    let two: $src = 2.0;
                    let lower = <$dst>::MIN as $src;
                    let upper = FloatCore::powi(two, <$dst as Limits>::DIGITS as i32);

                    if FloatCore::trunc(self) == self && self >= lower && self < upper {
                        Ok(self as $dst)
                    } else {
                        Err(lossy::<$src, $dst>(self))
                    }
                }
            }
        )*
    };
}

// Float into float. Widening is exact; narrowing must survive the round trip.
macro_rules! impl_narrow_float_to_float {
    ($src:ty => $($dst:ty),*) => {
        $(
            impl $crate::Narrow<$dst> for $src {
                #[inline]
                fn narrow(self) -> Result<$dst, $crate::LossyConversionError> {
                    use $crate::{limits::Limits, narrow::lossy};

                    let narrowed = self as $dst;

                    if <$dst as Limits>::DIGITS >= <$src as Limits>::DIGITS
                        || narrowed as $src == self
                    {
                        Ok(narrowed)
                    } else {
                        Err(lossy::<$src, $dst>(self))
                    }
                }
            }
        )*
    };
}

mod f32;
mod f64;
mod i128;
mod i16;
mod i32;
mod i64;
mod i8;
mod isize;
mod u128;
mod u16;
mod u32;
mod u64;
mod u8;
mod usize;
