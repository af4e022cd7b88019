// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

impl_narrow_unsigned_to_int!(u128 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_narrow_int_to_float!(u128 => f32, f64);
