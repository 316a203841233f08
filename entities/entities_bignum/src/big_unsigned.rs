//! Unsigned Magnitude Module
//!
//! Provides [`BigUnsigned`], a non-negative integer of unbounded size stored
//! as a canonical little-endian limb sequence with copy-on-write sharing.
//!
//! This file holds the type itself, its storage-facing API, construction
//! from machine integers and the numeric ordering. The algorithms live in
//! sibling modules:
//!
//! - [`arith`](crate::arith): add, subtract, multiply, divide-with-remainder
//! - [`bitwise`](crate::bitwise): AND, OR, XOR, NOT and shifts
//! - [`ops`](crate::ops): `std::ops` operator forms
//! - [`narrowing`](crate::narrowing): range-checked conversion to machine integers
//!
//! ## Examples
//!
//! ```rust
//! use entities_bignum::BigUnsigned;
//!
//! let a = BigUnsigned::from(u64::MAX);
//! let b = &a + &BigUnsigned::from(1u8);
//! assert_eq!(b.bit_length(), 65);
//! assert!(b > a);
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::fmt;

use crate::error::BigNumError;
use crate::limbs::{cmp_limbs, Limb, LimbBuffer, LIMB_BITS};

/// Unbounded non-negative integer
///
/// Cloning is cheap: the clone shares the limb vector with the original and
/// the first mutation through either handle gives it a private copy.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    pub(crate) limbs: LimbBuffer,
}

impl BigUnsigned {
    /// Create a zero value
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the value one
    pub fn one() -> Self {
        Self::from_limbs(vec![1])
    }

    /// Create a value from little-endian limbs
    ///
    /// Trailing zero limbs are removed, so any vector is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::BigUnsigned;
    ///
    /// let value = BigUnsigned::from_limbs(vec![5, 0, 0]);
    /// assert_eq!(value.limbs(), &[5]);
    /// ```
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        Self {
            limbs: LimbBuffer::from_vec(limbs),
        }
    }

    /// Little-endian limbs of the value (empty for zero)
    pub fn limbs(&self) -> &[Limb] {
        self.limbs.as_slice()
    }

    /// Consume the value and return its limbs
    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs.into_vec()
    }

    /// Number of stored limbs
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.limbs.is_zero()
    }

    /// Reset the value to zero
    ///
    /// Other values sharing this one's storage keep their contents.
    pub fn clear(&mut self) {
        self.limbs.clear();
    }

    /// Check whether `self` and `other` currently share one limb vector
    pub fn shares_storage_with(&self, other: &BigUnsigned) -> bool {
        self.limbs.shares_with(&other.limbs)
    }

    /// Number of significant bits (0 for zero)
    pub fn bit_length(&self) -> u64 {
        match self.limbs().last() {
            Some(&top) => {
                (self.limb_count() as u64 - 1) * LIMB_BITS as u64
                    + (LIMB_BITS - top.leading_zeros()) as u64
            }
            None => 0,
        }
    }

    /// Value of bit `index` (bit 0 is the least significant)
    pub fn bit(&self, index: u64) -> bool {
        let limb = (index / LIMB_BITS as u64) as usize;
        let offset = (index % LIMB_BITS as u64) as u32;
        self.limbs()
            .get(limb)
            .map_or(false, |&value| (value >> offset) & 1 == 1)
    }

    /// Check if the value is odd
    pub fn is_odd(&self) -> bool {
        self.limbs().first().map_or(false, |&low| low & 1 == 1)
    }

    /// Limb vector ready for writing
    ///
    /// Copies the vector first if another value shares it.
    pub(crate) fn limbs_mut(&mut self) -> &mut Vec<Limb> {
        self.limbs.make_exclusive()
    }

    /// Re-establish the canonical form after a shrinking operation
    pub(crate) fn trim(&mut self) {
        self.limbs.trim_leading_zeros();
    }

    /// Low limb of a value known to fit in one limb
    pub(crate) fn low_limb(&self) -> Limb {
        self.limbs().first().copied().unwrap_or(0)
    }

    fn from_u128(mut value: u128) -> Self {
        let mut limbs = Vec::with_capacity((128 / LIMB_BITS) as usize);
        while value != 0 {
            limbs.push(value as Limb);
            value = value.checked_shr(LIMB_BITS).unwrap_or(0);
        }
        Self::from_limbs(limbs)
    }

    #[cfg(test)]
    pub(crate) fn from_raw_limbs(limbs: Vec<Limb>) -> Self {
        Self {
            limbs: LimbBuffer::from_raw(limbs),
        }
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BigUnsigned").field(&self.limbs()).finish()
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.shares_storage_with(other) {
            return Ordering::Equal;
        }
        cmp_limbs(self.limbs(), other.limbs())
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<bool> for BigUnsigned {
    fn from(value: bool) -> Self {
        if value {
            Self::one()
        } else {
            Self::new()
        }
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigUnsigned {
                fn from(value: $t) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! try_from_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for BigUnsigned {
                type Error = BigNumError;

                fn try_from(value: $t) -> Result<Self, BigNumError> {
                    if value < 0 {
                        tracing::debug!(value = %value, "negative value for unsigned magnitude");
                        return Err(BigNumError::InvalidArgument(format!(
                            "cannot set an unsigned value from negative {}",
                            value
                        )));
                    }
                    Ok(Self::from_u128(value as u128))
                }
            }
        )*
    };
}

try_from_signed!(i8, i16, i32, i64, i128, isize);
