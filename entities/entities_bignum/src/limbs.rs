//! Limb Storage Module
//!
//! Provides the backing store of a magnitude: a little-endian sequence of
//! fixed-width limbs held behind a reference-counted handle.
//!
//! ## Canonical Form
//!
//! The sequence never ends in a zero limb. The empty sequence is the one and
//! only representation of zero. Operations that can shrink a value call
//! [`LimbBuffer::trim_leading_zeros`] before returning.
//!
//! ## Sharing
//!
//! Cloning a buffer is O(1): both clones point at the same vector. Before any
//! limb is written, [`LimbBuffer::make_exclusive`] gives the writer a private
//! copy if somebody else still holds the vector, so a write is never visible
//! through another handle.
//!
//! ## Limb Width
//!
//! Limbs are 64-bit by default. Building with the `u32-limbs` feature switches
//! to 32-bit limbs; every algorithm is written against [`LIMB_BITS`].

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
use std::sync::Arc;

/// One positional digit of a magnitude
#[cfg(not(feature = "u32-limbs"))]
pub type Limb = u64;

/// One positional digit of a magnitude
#[cfg(feature = "u32-limbs")]
pub type Limb = u32;

/// Number of bits in a [`Limb`]
pub const LIMB_BITS: u32 = Limb::BITS;

/// Shared, copy-on-write limb sequence
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct LimbBuffer {
    data: Arc<Vec<Limb>>,
}

impl LimbBuffer {
    /// Create an empty (zero) buffer
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `limbs` and bring them into canonical form
    pub(crate) fn from_vec(mut limbs: Vec<Limb>) -> Self {
        trim_vec(&mut limbs);
        Self {
            data: Arc::new(limbs),
        }
    }

    /// Wrap `limbs` as-is, without trimming
    ///
    /// Only used to build deliberately non-canonical values in tests.
    #[cfg(test)]
    pub(crate) fn from_raw(limbs: Vec<Limb>) -> Self {
        Self {
            data: Arc::new(limbs),
        }
    }

    /// True iff the sequence is empty
    pub(crate) fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_slice(&self) -> &[Limb] {
        &self.data
    }

    /// True iff another handle references the same vector
    pub(crate) fn is_shared(&self) -> bool {
        Arc::strong_count(&self.data) > 1
    }

    /// True iff both handles reference the same vector
    pub(crate) fn shares_with(&self, other: &LimbBuffer) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Reset to zero without disturbing other holders of the vector
    pub(crate) fn clear(&mut self) {
        match Arc::get_mut(&mut self.data) {
            Some(limbs) => limbs.clear(),
            None => self.data = Arc::new(Vec::new()),
        }
    }

    /// Obtain a privately owned vector, copying it if it is shared
    pub(crate) fn make_exclusive(&mut self) -> &mut Vec<Limb> {
        Arc::make_mut(&mut self.data)
    }

    /// Drop trailing zero limbs until the canonical form holds
    pub(crate) fn trim_leading_zeros(&mut self) {
        if self.data.last() == Some(&0) {
            trim_vec(self.make_exclusive());
        }
    }

    /// Replace the contents with a freshly computed sequence
    pub(crate) fn replace(&mut self, limbs: Vec<Limb>) {
        *self = Self::from_vec(limbs);
    }

    /// Extract the vector, copying only if it is still shared
    pub(crate) fn into_vec(self) -> Vec<Limb> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

/// Remove trailing zero limbs from a raw vector
pub(crate) fn trim_vec(limbs: &mut Vec<Limb>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Numeric comparison of two canonical limb sequences
///
/// Longer sequences are larger; equal lengths compare from the most
/// significant limb down.
pub(crate) fn cmp_limbs(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_zero() {
        let buffer = LimbBuffer::new();
        assert!(buffer.is_zero());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_from_vec_trims() {
        let buffer = LimbBuffer::from_vec(vec![7, 0, 0]);
        assert_eq!(buffer.as_slice(), &[7]);

        let zero = LimbBuffer::from_vec(vec![0, 0]);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_clone_shares_until_write() {
        let original = LimbBuffer::from_vec(vec![1, 2, 3]);
        let mut copy = original.clone();
        assert!(copy.shares_with(&original));
        assert!(original.is_shared());

        copy.make_exclusive()[0] = 9;
        assert!(!copy.shares_with(&original));
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[9, 2, 3]);
    }

    #[test]
    fn test_make_exclusive_sole_owner_no_copy() {
        let mut buffer = LimbBuffer::from_vec(vec![4, 5]);
        let before = buffer.as_slice().as_ptr();
        buffer.make_exclusive()[0] = 6;
        assert_eq!(buffer.as_slice(), &[6, 5]);
        assert_eq!(buffer.as_slice().as_ptr(), before);
    }

    #[test]
    fn test_clear_shared_detaches() {
        let original = LimbBuffer::from_vec(vec![1, 2]);
        let mut copy = original.clone();
        copy.clear();
        assert!(copy.is_zero());
        assert_eq!(original.as_slice(), &[1, 2]);
        assert!(!original.is_shared());
    }

    #[test]
    fn test_clear_sole_owner_in_place() {
        let mut buffer = LimbBuffer::from_vec(vec![1, 2]);
        buffer.clear();
        assert!(buffer.is_zero());
    }

    #[test]
    fn test_trim_leading_zeros() {
        let mut buffer = LimbBuffer::from_raw(vec![3, 0, 0]);
        buffer.trim_leading_zeros();
        assert_eq!(buffer.as_slice(), &[3]);

        let mut all_zero = LimbBuffer::from_raw(vec![0]);
        all_zero.trim_leading_zeros();
        assert!(all_zero.is_zero());
    }

    #[test]
    fn test_trim_does_not_touch_shared_canonical_buffer() {
        let original = LimbBuffer::from_vec(vec![1, 2]);
        let mut copy = original.clone();
        copy.trim_leading_zeros();
        assert!(copy.shares_with(&original));
    }

    #[test]
    fn test_into_vec() {
        let original = LimbBuffer::from_vec(vec![1, 2]);
        let copy = original.clone();
        assert_eq!(copy.into_vec(), vec![1, 2]);
        assert_eq!(original.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_cmp_limbs() {
        assert_eq!(cmp_limbs(&[], &[]), Ordering::Equal);
        assert_eq!(cmp_limbs(&[], &[1]), Ordering::Less);
        assert_eq!(cmp_limbs(&[5, 1], &[9]), Ordering::Greater);
        assert_eq!(cmp_limbs(&[9, 1], &[5, 1]), Ordering::Greater);
        assert_eq!(cmp_limbs(&[5, 2], &[9, 1]), Ordering::Greater);
        assert_eq!(cmp_limbs(&[5, 1], &[5, 1]), Ordering::Equal);
    }
}
