// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Numeric limits of a primitive arithmetic type.
pub(crate) trait Limits: Copy {
	/// Number of value bits. Integers exclude the sign bit, floats count the
	/// mantissa including its implicit leading bit.
	const DIGITS: u32;
	const SIGNED: bool;
}

macro_rules! impl_limits_int {
    ($($t:ty),*) => {
        $(
            impl Limits for $t {
                const DIGITS: u32 = <$t>::BITS - Self::SIGNED as u32;
                const SIGNED: bool = <$t>::MIN != 0;
            }
        )*
    };
}

macro_rules! impl_limits_float {
    ($($t:ty),*) => {
        $(
            impl Limits for $t {
                const DIGITS: u32 = <$t>::MANTISSA_DIGITS;
                const SIGNED: bool = true;
            }
        )*
    };
}

impl_limits_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_limits_float!(f32, f64);
