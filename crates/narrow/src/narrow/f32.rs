// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

impl_narrow_float_to_int!(f32 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_narrow_float_to_float!(f32 => f64);
