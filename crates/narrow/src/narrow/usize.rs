// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

impl_narrow_unsigned_to_int!(usize => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128);
impl_narrow_int_to_float!(usize => f32, f64);

#[cfg(test)]
mod tests {
	mod u8 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<u8>::narrow(255usize), Ok(255));
		}

		#[test]
		fn test_narrow_unhappy() {
			assert!(Narrow::<u8>::narrow(256usize).is_err());
		}
	}

	mod u128 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<u128>::narrow(usize::MAX), Ok(usize::MAX as u128));
		}
	}

	mod isize {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<isize>::narrow(isize::MAX as usize), Ok(isize::MAX));
		}

		#[test]
		fn test_narrow_unhappy() {
			assert!(Narrow::<isize>::narrow(isize::MAX as usize + 1).is_err());
		}
	}

	mod f64 {
		use crate::Narrow;

		#[test]
		fn test_narrow_happy() {
			assert_eq!(Narrow::<f64>::narrow(1usize << 31), Ok(2147483648.0));
		}
	}
}
