//! Magnitude Arithmetic Module
//!
//! Addition, subtraction, multiplication and division with remainder on
//! [`BigUnsigned`]. All results are exact; the limb sequence grows as needed.
//!
//! ## Algorithms
//!
//! - **Add**: limb-wise with carry propagation.
//! - **Subtract**: adds the limb-wise complement of the subtrahend plus one and
//!   drops the outgoing carry. Only defined when the result is non-negative.
//! - **Multiply**: shift-and-add over the set bits of the multiplier.
//! - **Divide**: bit-serial shift-and-subtract long division producing the
//!   quotient and the remainder together.
//!
//! ## Aliasing
//!
//! `x += &x` cannot be written in Rust; the equivalent `x += &x.clone()` is
//! cheap because the clone shares storage, and the first write to `x`
//! detaches it from the snapshot.

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
use std::ops::{AddAssign, MulAssign};

use crate::big_unsigned::BigUnsigned;
use crate::error::BigNumError;
use crate::limbs::{cmp_limbs, trim_vec, Limb, LIMB_BITS};

impl AddAssign<&BigUnsigned> for BigUnsigned {
    fn add_assign(&mut self, rhs: &BigUnsigned) {
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = rhs.clone();
            return;
        }
        add_limbs(self.limbs_mut(), rhs.limbs());
    }
}

impl MulAssign<&BigUnsigned> for BigUnsigned {
    fn mul_assign(&mut self, rhs: &BigUnsigned) {
        if self.is_zero() {
            return;
        }
        if rhs.is_zero() {
            self.clear();
            return;
        }
        self.multiply(rhs);
    }
}

impl BigUnsigned {
    /// Subtract `rhs` in place
    ///
    /// # Errors
    ///
    /// [`BigNumError::Underflow`] if `rhs > self`; `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::{BigNumError, BigUnsigned};
    ///
    /// let mut a = BigUnsigned::from(9u32);
    /// a.checked_sub_assign(&BigUnsigned::from(4u32)).unwrap();
    /// assert_eq!(a, BigUnsigned::from(5u32));
    ///
    /// let err = a.checked_sub_assign(&BigUnsigned::from(6u32)).unwrap_err();
    /// assert_eq!(err, BigNumError::Underflow);
    /// ```
    pub fn checked_sub_assign(&mut self, rhs: &BigUnsigned) -> Result<(), BigNumError> {
        if rhs.is_zero() {
            return Ok(());
        }
        match (*self).cmp(rhs) {
            Ordering::Less => {
                tracing::debug!(
                    lhs_limbs = self.limb_count(),
                    rhs_limbs = rhs.limb_count(),
                    "unsigned subtraction underflow"
                );
                Err(BigNumError::Underflow)
            }
            Ordering::Equal => {
                self.clear();
                Ok(())
            }
            Ordering::Greater => {
                self.sub_assign_smaller(rhs);
                Ok(())
            }
        }
    }

    /// `self - rhs` as a new value
    pub fn checked_sub(&self, rhs: &BigUnsigned) -> Result<BigUnsigned, BigNumError> {
        let mut result = self.clone();
        result.checked_sub_assign(rhs)?;
        Ok(result)
    }

    /// Subtract a value known not to exceed `self`
    pub(crate) fn sub_assign_smaller(&mut self, rhs: &BigUnsigned) {
        debug_assert!(*self >= *rhs);
        if rhs.is_zero() {
            return;
        }
        sub_limbs(self.limbs_mut(), rhs.limbs());
        self.trim();
    }

    /// Divide in place, leaving the quotient in `self` and returning the remainder
    ///
    /// # Errors
    ///
    /// [`BigNumError::DivideByZero`] if `divisor` is zero; `self` is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::BigUnsigned;
    ///
    /// let mut value = BigUnsigned::from(1000u32);
    /// let remainder = value.divide_with_remainder(&BigUnsigned::from(7u32)).unwrap();
    /// assert_eq!(value, BigUnsigned::from(142u32));
    /// assert_eq!(remainder, BigUnsigned::from(6u32));
    /// ```
    pub fn divide_with_remainder(
        &mut self,
        divisor: &BigUnsigned,
    ) -> Result<BigUnsigned, BigNumError> {
        if divisor.is_zero() {
            tracing::debug!(dividend_limbs = self.limb_count(), "division by zero");
            return Err(BigNumError::DivideByZero);
        }

        match (*self).cmp(divisor) {
            Ordering::Equal => {
                *self = BigUnsigned::one();
                Ok(BigUnsigned::new())
            }
            Ordering::Less => Ok(std::mem::take(self)),
            Ordering::Greater => {
                let (quotient, remainder) = long_divide(self.limbs(), divisor.limbs());
                self.limbs.replace(quotient);
                Ok(BigUnsigned::from_limbs(remainder))
            }
        }
    }

    /// Quotient and remainder as new values
    pub fn div_rem(&self, divisor: &BigUnsigned) -> Result<(BigUnsigned, BigUnsigned), BigNumError> {
        let mut quotient = self.clone();
        let remainder = quotient.divide_with_remainder(divisor)?;
        Ok((quotient, remainder))
    }

    /// Replace `self` with `self / divisor`
    pub fn checked_div_assign(&mut self, divisor: &BigUnsigned) -> Result<(), BigNumError> {
        self.divide_with_remainder(divisor).map(|_| ())
    }

    /// Replace `self` with `self % divisor`
    pub fn checked_rem_assign(&mut self, divisor: &BigUnsigned) -> Result<(), BigNumError> {
        let remainder = self.divide_with_remainder(divisor)?;
        *self = remainder;
        Ok(())
    }

    /// `self / divisor` as a new value
    pub fn checked_div(&self, divisor: &BigUnsigned) -> Result<BigUnsigned, BigNumError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// `self % divisor` as a new value
    pub fn checked_rem(&self, divisor: &BigUnsigned) -> Result<BigUnsigned, BigNumError> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Add one
    pub fn increment(&mut self) {
        *self += &BigUnsigned::one();
    }

    /// Subtract one
    ///
    /// # Errors
    ///
    /// [`BigNumError::Underflow`] when `self` is zero.
    pub fn checked_decrement(&mut self) -> Result<(), BigNumError> {
        self.checked_sub_assign(&BigUnsigned::one())
    }

    /// Shift-and-add multiplication, both operands non-zero
    fn multiply(&mut self, rhs: &BigUnsigned) {
        let mut shifted = std::mem::take(self);
        let mut result = BigUnsigned::new();
        let mut pending_shift = 0usize;

        for &limb in rhs.limbs() {
            for bit in 0..LIMB_BITS {
                if (limb >> bit) & 1 == 1 {
                    shifted.shift_left_bits(pending_shift);
                    result += &shifted;
                    pending_shift = 0;
                }
                pending_shift += 1;
            }
        }

        *self = result;
    }
}

/// `lhs += rhs` on raw limb vectors
pub(crate) fn add_limbs(lhs: &mut Vec<Limb>, rhs: &[Limb]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }

    let mut carry = false;
    for (index, limb) in lhs.iter_mut().enumerate() {
        let addend = match rhs.get(index) {
            Some(&value) => value,
            None if carry => 0,
            None => break,
        };
        let (sum, overflow_a) = limb.overflowing_add(addend);
        let (sum, overflow_b) = sum.overflowing_add(carry as Limb);
        *limb = sum;
        carry = overflow_a || overflow_b;
    }

    if carry {
        lhs.push(1);
    }
}

/// `lhs -= rhs` on raw limb slices, requires `lhs >= rhs`
///
/// Computes `lhs + !rhs + 1` where `!rhs` is taken over the width of `lhs`,
/// then discards the carry out of the top limb. The result may carry
/// trailing zero limbs.
pub(crate) fn sub_limbs(lhs: &mut [Limb], rhs: &[Limb]) {
    let mut carry = true;
    for (index, limb) in lhs.iter_mut().enumerate() {
        let complement = match rhs.get(index) {
            Some(&value) => !value,
            // all-ones plus a carry leaves every remaining limb unchanged
            None if carry => break,
            None => Limb::MAX,
        };
        let (sum, overflow_a) = limb.overflowing_add(complement);
        let (sum, overflow_b) = sum.overflowing_add(carry as Limb);
        *limb = sum;
        carry = overflow_a || overflow_b;
    }
}

/// Shift a canonical limb vector left by one bit, filling bit 0 with `inject`
fn shift_left_one(limbs: &mut Vec<Limb>, inject: bool) {
    let mut carry = inject as Limb;
    for limb in limbs.iter_mut() {
        let next_carry = *limb >> (LIMB_BITS - 1);
        *limb = (*limb << 1) | carry;
        carry = next_carry;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

/// Bit-serial long division of canonical sequences, `dividend > divisor > 0`
///
/// Walks the dividend from its most significant bit down. Each step shifts
/// the next dividend bit into the running remainder; whenever the remainder
/// reaches the divisor it is reduced and the matching quotient bit is set.
fn long_divide(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    tracing::trace!(
        dividend_limbs = dividend.len(),
        divisor_limbs = divisor.len(),
        "shift-and-subtract division"
    );

    let mut quotient = vec![0 as Limb; dividend.len()];
    let mut remainder: Vec<Limb> = Vec::with_capacity(divisor.len() + 1);

    for (index, &limb) in dividend.iter().enumerate().rev() {
        for bit in (0..LIMB_BITS).rev() {
            shift_left_one(&mut remainder, (limb >> bit) & 1 == 1);
            if cmp_limbs(&remainder, divisor) != Ordering::Less {
                sub_limbs(&mut remainder, divisor);
                trim_vec(&mut remainder);
                quotient[index] |= (1 as Limb) << bit;
            }
        }
    }

    trim_vec(&mut quotient);
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u128) -> BigUnsigned {
        BigUnsigned::from(value)
    }

    #[test]
    fn test_add_with_carry_chain() {
        let mut a = BigUnsigned::from_limbs(vec![Limb::MAX, Limb::MAX]);
        a += &big(1);
        assert_eq!(a.limbs(), &[0, 0, 1]);
    }

    #[test]
    fn test_add_shorter_to_longer_and_back() {
        let long = BigUnsigned::from_limbs(vec![Limb::MAX, 5]);
        let short = big(1);

        let mut a = long.clone();
        a += &short;
        assert_eq!(a.limbs(), &[0, 6]);

        let mut b = short.clone();
        b += &long;
        assert_eq!(b.limbs(), &[0, 6]);
    }

    #[test]
    fn test_add_zero_cases() {
        let mut a = big(5);
        a += &BigUnsigned::new();
        assert_eq!(a, big(5));

        let mut zero = BigUnsigned::new();
        zero += &a;
        assert_eq!(zero, big(5));
        assert!(zero.shares_storage_with(&a));
    }

    #[test]
    fn test_add_self_snapshot() {
        let mut x = BigUnsigned::from_limbs(vec![Limb::MAX, 3]);
        let snapshot = x.clone();
        x += &snapshot;
        assert_eq!(x.limbs(), &[Limb::MAX - 1, 7]);
        assert_eq!(snapshot.limbs(), &[Limb::MAX, 3]);
    }

    #[test]
    fn test_sub_borrow_chain() {
        let mut a = BigUnsigned::from_limbs(vec![0, 0, 1]);
        a.checked_sub_assign(&big(1)).unwrap();
        assert_eq!(a.limbs(), &[Limb::MAX, Limb::MAX]);
    }

    #[test]
    fn test_sub_trims_result() {
        let mut a = BigUnsigned::from_limbs(vec![5, 1]);
        a.checked_sub_assign(&BigUnsigned::from_limbs(vec![2, 1])).unwrap();
        assert_eq!(a.limbs(), &[3]);
    }

    #[test]
    fn test_sub_equal_is_zero() {
        let mut x = big(12345);
        let snapshot = x.clone();
        x.checked_sub_assign(&snapshot).unwrap();
        assert!(x.is_zero());
        assert_eq!(snapshot, big(12345));
    }

    #[test]
    fn test_sub_underflow_leaves_value() {
        let mut a = big(5);
        assert_eq!(a.checked_sub_assign(&big(9)), Err(BigNumError::Underflow));
        assert_eq!(a, big(5));
        assert_eq!(big(5).checked_sub(&big(9)), Err(BigNumError::Underflow));
    }

    #[test]
    fn test_multiply_small() {
        let mut a = big(12);
        a *= &big(34);
        assert_eq!(a, big(408));
    }

    #[test]
    fn test_multiply_by_zero_and_one() {
        let mut a = big(77);
        a *= &BigUnsigned::one();
        assert_eq!(a, big(77));
        a *= &BigUnsigned::new();
        assert!(a.is_zero());

        let mut zero = BigUnsigned::new();
        zero *= &big(3);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_multiply_multi_limb() {
        let mut a = big(u64::MAX as u128);
        a *= &big(u64::MAX as u128);
        assert_eq!(a, big((u64::MAX as u128) * (u64::MAX as u128)));
    }

    #[test]
    fn test_multiply_self_snapshot() {
        let mut x = big(0xFFFF_FFFF_FFFF);
        let snapshot = x.clone();
        x *= &snapshot;
        assert_eq!(x, big(0xFFFF_FFFF_FFFF * 0xFFFF_FFFF_FFFF));
        assert_eq!(snapshot, big(0xFFFF_FFFF_FFFF));
    }

    #[test]
    fn test_divide_with_remainder() {
        let mut value = big(1000);
        let remainder = value.divide_with_remainder(&big(7)).unwrap();
        assert_eq!(value, big(142));
        assert_eq!(remainder, big(6));
    }

    #[test]
    fn test_divide_short_circuits() {
        let mut equal = big(42);
        let remainder = equal.divide_with_remainder(&big(42)).unwrap();
        assert_eq!(equal, BigUnsigned::one());
        assert!(remainder.is_zero());

        let mut smaller = big(3);
        let remainder = smaller.divide_with_remainder(&big(42)).unwrap();
        assert!(smaller.is_zero());
        assert_eq!(remainder, big(3));
    }

    #[test]
    fn test_divide_by_zero() {
        let mut value = big(10);
        assert_eq!(
            value.divide_with_remainder(&BigUnsigned::new()),
            Err(BigNumError::DivideByZero)
        );
        assert_eq!(value, big(10));
        assert_eq!(big(1).checked_div(&BigUnsigned::new()), Err(BigNumError::DivideByZero));
        assert_eq!(big(1).checked_rem(&BigUnsigned::new()), Err(BigNumError::DivideByZero));
    }

    #[test]
    fn test_divide_multi_limb() {
        let dividend = u128::MAX - 12345;
        let divisor = (u64::MAX as u128) + 17;
        let (quotient, remainder) = big(dividend).div_rem(&big(divisor)).unwrap();
        assert_eq!(quotient, big(dividend / divisor));
        assert_eq!(remainder, big(dividend % divisor));
    }

    #[test]
    fn test_div_and_rem_assign() {
        let mut a = big(100);
        a.checked_div_assign(&big(9)).unwrap();
        assert_eq!(a, big(11));

        let mut b = big(100);
        b.checked_rem_assign(&big(9)).unwrap();
        assert_eq!(b, big(1));
    }

    #[test]
    fn test_increment_decrement() {
        let mut value = BigUnsigned::from_limbs(vec![Limb::MAX]);
        value.increment();
        assert_eq!(value.limbs(), &[0, 1]);
        value.checked_decrement().unwrap();
        assert_eq!(value.limbs(), &[Limb::MAX]);

        let mut zero = BigUnsigned::new();
        assert_eq!(zero.checked_decrement(), Err(BigNumError::Underflow));
        zero.increment();
        assert_eq!(zero, BigUnsigned::one());
    }

    #[test]
    fn test_subtraction_removes_synthetic_trailing_zero() {
        let mut value = BigUnsigned::from_raw_limbs(vec![10, 0]);
        value.checked_sub_assign(&big(3)).unwrap();
        assert_eq!(value.limbs(), &[7]);
    }

    #[test]
    fn test_shift_left_one_injects_bit() {
        let mut limbs = Vec::new();
        shift_left_one(&mut limbs, false);
        assert!(limbs.is_empty());
        shift_left_one(&mut limbs, true);
        assert_eq!(limbs, vec![1]);

        let mut top: Vec<Limb> = vec![1 << (LIMB_BITS - 1)];
        shift_left_one(&mut top, true);
        assert_eq!(top, vec![1, 1]);
    }
}
