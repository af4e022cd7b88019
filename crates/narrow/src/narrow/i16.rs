// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

impl_narrow_signed_to_int!(i16 => i8, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_narrow_int_to_float!(i16 => f32, f64);
