// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::num::TryFromIntError;

/// A narrowing conversion was rejected because the destination type cannot
/// represent the source value exactly.
///
/// Carries no payload: retrying the same conversion can never succeed, the
/// caller has to pick a wider destination or treat the value as invalid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("lossy conversion")]
pub struct LossyConversionError;

impl From<TryFromIntError> for LossyConversionError {
	fn from(_: TryFromIntError) -> Self {
		LossyConversionError
	}
}
