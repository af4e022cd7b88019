// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Length of the run of significant bits in the magnitude of an integer.
pub trait BitSpan: Copy {
	/// Number of bit positions from the highest set bit down to the lowest set
	/// bit of `|self|`, inclusive. Zero for zero.
	///
	/// A binary float with a `p` bit mantissa represents an integer exactly iff
	/// its bit span is at most `p`; trailing zeros go into the exponent.
	fn bit_span(self) -> u32;
}

macro_rules! impl_bit_span_unsigned {
    ($($t:ty),*) => {
        $(
            impl BitSpan for $t {
                #[inline]
                fn bit_span(self) -> u32 {
                    if self == 0 {
                        0
                    } else {
                        <$t>::BITS - self.leading_zeros() - self.trailing_zeros()
                    }
                }
            }
        )*
    };
}

macro_rules! impl_bit_span_signed {
    ($($t:ty),*) => {
        $(
            impl BitSpan for $t {
                #[inline]
                fn bit_span(self) -> u32 {
                    self.unsigned_abs().bit_span()
                }
            }
        )*
    };
}

impl_bit_span_unsigned!(u8, u16, u32, u64, u128, usize);
impl_bit_span_signed!(i8, i16, i32, i64, i128, isize);
