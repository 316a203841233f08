//! Magnitude Bitwise Module
//!
//! Bitwise AND, OR, XOR, NOT and left/right shifts on [`BigUnsigned`].
//!
//! ## NOT Is Width-Dependent
//!
//! An unbounded complement would be an infinite run of ones, so
//! [`BigUnsigned::not_within_width`] only inverts the limbs that are currently
//! stored. The result depends on how many limbs the operand occupies: `!1`
//! with 64-bit limbs is `2^64 - 2`, not a negative number. Callers that need
//! a complement over a fixed width should mask the result themselves.
//!
//! ## Shifts
//!
//! A shift amount splits into a whole-limb count (limbs inserted at or removed
//! from the low end) and a sub-limb bit count (bits carried across limb
//! boundaries). Amounts given as a [`BigUnsigned`] are split with
//! divide-with-remainder by the limb width.

use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, ShlAssign, ShrAssign};

use crate::big_unsigned::BigUnsigned;
use crate::error::BigNumError;
use crate::limbs::{Limb, LIMB_BITS};

impl BitAndAssign<&BigUnsigned> for BigUnsigned {
    fn bitand_assign(&mut self, rhs: &BigUnsigned) {
        if self.is_zero() {
            return;
        }
        if rhs.is_zero() {
            self.clear();
            return;
        }
        let limbs = self.limbs_mut();
        limbs.truncate(rhs.limb_count());
        for (limb, &other) in limbs.iter_mut().zip(rhs.limbs()) {
            *limb &= other;
        }
        self.trim();
    }
}

impl BitOrAssign<&BigUnsigned> for BigUnsigned {
    fn bitor_assign(&mut self, rhs: &BigUnsigned) {
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = rhs.clone();
            return;
        }
        let limbs = self.limbs_mut();
        let common = limbs.len().min(rhs.limb_count());
        for (limb, &other) in limbs.iter_mut().zip(rhs.limbs()) {
            *limb |= other;
        }
        limbs.extend_from_slice(&rhs.limbs()[common..]);
    }
}

impl BitXorAssign<&BigUnsigned> for BigUnsigned {
    fn bitxor_assign(&mut self, rhs: &BigUnsigned) {
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = rhs.clone();
            return;
        }
        let limbs = self.limbs_mut();
        let common = limbs.len().min(rhs.limb_count());
        for (limb, &other) in limbs.iter_mut().zip(rhs.limbs()) {
            *limb ^= other;
        }
        limbs.extend_from_slice(&rhs.limbs()[common..]);
        self.trim();
    }
}

impl ShlAssign<usize> for BigUnsigned {
    fn shl_assign(&mut self, amount: usize) {
        self.shift_left_bits(amount);
    }
}

impl ShrAssign<usize> for BigUnsigned {
    fn shr_assign(&mut self, amount: usize) {
        self.shift_right_bits(amount);
    }
}

impl BigUnsigned {
    /// Complement every stored limb
    ///
    /// The complement covers the current limb width only (see the module
    /// documentation). The result is trimmed back to canonical form, so
    /// `!!x` is not `x` when the top limb of `x` has leading zero bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::{BigUnsigned, Limb};
    ///
    /// let value = BigUnsigned::from(1u8);
    /// assert_eq!(value.not_within_width().limbs(), &[Limb::MAX - 1]);
    /// assert!(BigUnsigned::new().not_within_width().is_zero());
    /// ```
    pub fn not_within_width(&self) -> BigUnsigned {
        let mut result = self.clone();
        if result.is_zero() {
            return result;
        }
        for limb in result.limbs_mut().iter_mut() {
            *limb = !*limb;
        }
        result.trim();
        result
    }

    /// Shift left by a big shift amount
    ///
    /// # Errors
    ///
    /// [`BigNumError::InvalidArgument`] when the whole-limb part of the amount
    /// does not fit in `usize`.
    pub fn checked_shl_assign(&mut self, amount: &BigUnsigned) -> Result<(), BigNumError> {
        if self.is_zero() || amount.is_zero() {
            return Ok(());
        }
        let (whole, bits) = split_shift_amount(amount)?;
        let whole = usize::try_from(&whole).map_err(|_| {
            tracing::debug!(amount_limbs = amount.limb_count(), "shift amount too large");
            BigNumError::InvalidArgument("shift amount exceeds addressable limbs".to_string())
        })?;
        self.shift_left_parts(whole, bits);
        Ok(())
    }

    /// Shift right by a big shift amount
    ///
    /// Amounts beyond the value's width produce zero.
    pub fn checked_shr_assign(&mut self, amount: &BigUnsigned) -> Result<(), BigNumError> {
        if self.is_zero() || amount.is_zero() {
            return Ok(());
        }
        let (whole, bits) = split_shift_amount(amount)?;
        match usize::try_from(&whole) {
            Ok(whole) => self.shift_right_parts(whole, bits),
            Err(_) => self.clear(),
        }
        Ok(())
    }

    /// Shift left by `amount` bits
    pub(crate) fn shift_left_bits(&mut self, amount: usize) {
        let bits_per_limb = LIMB_BITS as usize;
        self.shift_left_parts(amount / bits_per_limb, (amount % bits_per_limb) as u32);
    }

    /// Shift right by `amount` bits
    pub(crate) fn shift_right_bits(&mut self, amount: usize) {
        let bits_per_limb = LIMB_BITS as usize;
        self.shift_right_parts(amount / bits_per_limb, (amount % bits_per_limb) as u32);
    }

    fn shift_left_parts(&mut self, whole: usize, bits: u32) {
        if self.is_zero() || (whole == 0 && bits == 0) {
            return;
        }
        let limbs = self.limbs_mut();
        if whole > 0 {
            limbs.splice(0..0, std::iter::repeat(0).take(whole));
        }
        if bits != 0 {
            let mut carried: Limb = 0;
            for limb in limbs[whole..].iter_mut() {
                let shifted = (*limb << bits) | carried;
                carried = *limb >> (LIMB_BITS - bits);
                *limb = shifted;
            }
            if carried != 0 {
                limbs.push(carried);
            }
        }
    }

    fn shift_right_parts(&mut self, whole: usize, bits: u32) {
        if self.is_zero() || (whole == 0 && bits == 0) {
            return;
        }
        if whole >= self.limb_count() {
            self.clear();
            return;
        }
        let limbs = self.limbs_mut();
        limbs.drain(0..whole);
        if bits != 0 {
            let mut carried: Limb = 0;
            for limb in limbs.iter_mut().rev() {
                let shifted = (*limb >> bits) | carried;
                carried = *limb << (LIMB_BITS - bits);
                *limb = shifted;
            }
        }
        self.trim();
    }
}

/// Split a shift amount into whole limbs and leftover bits
fn split_shift_amount(amount: &BigUnsigned) -> Result<(BigUnsigned, u32), BigNumError> {
    let mut whole = amount.clone();
    let bits = whole.divide_with_remainder(&BigUnsigned::from(LIMB_BITS))?;
    Ok((whole, bits.low_limb() as u32))
}
