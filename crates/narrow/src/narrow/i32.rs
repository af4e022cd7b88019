// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

impl_narrow_signed_to_int!(i32 => i8, i16, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_narrow_int_to_float!(i32 => f32, f64);

#[cfg(test)]
mod tests {
	mod i8 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<i8>::narrow(127i32), Ok(127));
			assert_eq!(Narrow::<i8>::narrow(1i32), Ok(1));
			assert_eq!(Narrow::<i8>::narrow(0i32), Ok(0));
			assert_eq!(Narrow::<i8>::narrow(-1i32), Ok(-1));
			assert_eq!(Narrow::<i8>::narrow(-128i32), Ok(-128));
		}

		#[test]
		fn test_narrow_unhappy() {
			assert!(Narrow::<i8>::narrow(200i32).is_err());
			assert!(Narrow::<i8>::narrow(128i32).is_err());
			assert!(Narrow::<i8>::narrow(-129i32).is_err());
			assert!(Narrow::<i8>::narrow(-300i32).is_err());
		}
	}

	mod u8 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<u8>::narrow(255i32), Ok(255));
			assert_eq!(Narrow::<u8>::narrow(0i32), Ok(0));
		}

		#[test]
		fn test_narrow_unhappy() {
			assert!(Narrow::<u8>::narrow(700i32).is_err());
			assert!(Narrow::<u8>::narrow(256i32).is_err());
			assert!(Narrow::<u8>::narrow(-1i32).is_err());
			assert!(Narrow::<u8>::narrow(-100i32).is_err());
		}
	}

	mod u32 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<u32>::narrow(127i32), Ok(127));
			assert_eq!(Narrow::<u32>::narrow(i32::MAX), Ok(2147483647));
		}

		#[test]
		fn test_narrow_unhappy() {
			assert!(Narrow::<u32>::narrow(-1i32).is_err());
			assert!(Narrow::<u32>::narrow(-100i32).is_err());
		}
	}

	mod f32 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<f32>::narrow(1i32 << 24), Ok(16777216.0));
			assert_eq!(Narrow::<f32>::narrow(16777218i32), Ok(16777218.0));
			assert_eq!(Narrow::<f32>::narrow(123456792i32), Ok(123456792.0));
			assert_eq!(Narrow::<f32>::narrow(i32::MIN), Ok(-2147483648.0));
		}

		#[test]
		fn test_narrow_unhappy() {
			assert!(Narrow::<f32>::narrow((1i32 << 24) + 1).is_err());
			assert!(Narrow::<f32>::narrow(-((1i32 << 24) + 1)).is_err());
			assert!(Narrow::<f32>::narrow(123456791i32).is_err());
			assert!(Narrow::<f32>::narrow(123456793i32).is_err());
			assert!(Narrow::<f32>::narrow(i32::MAX).is_err());
		}
	}

	mod f64 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<f64>::narrow(i32::MAX), Ok(2147483647.0));
			assert_eq!(Narrow::<f64>::narrow(123456791i32), Ok(123456791.0));
		}
	}
}
