// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

impl_narrow_unsigned_to_int!(u8 => i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);
impl_narrow_int_to_float!(u8 => f32, f64);
