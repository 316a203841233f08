//! Signed Integer Module
//!
//! Provides [`BigInteger`], an unbounded signed integer stored as a
//! [`BigUnsigned`] magnitude plus a sign flag.
//!
//! ## Sign Model
//!
//! Values are magnitude-plus-sign, not two's complement. Arithmetic follows
//! the usual integer rules (division truncates toward zero, the remainder
//! takes the sign of the dividend). The bitwise operators act on magnitudes
//! and combine the signs as booleans:
//!
//! | Operator | Magnitude | Sign (when the result is non-zero) |
//! |----------|-----------|------------------------------------|
//! | `&`      | `a & b`   | `neg(a) && neg(b)`                 |
//! | `\|`     | `a \| b`  | `neg(a) \|\| neg(b)`               |
//! | `^`      | `a ^ b`   | `neg(a) != neg(b)`                 |
//! | `!`      | `!a`      | `!neg(a)`                          |
//!
//! Zero is never negative. Every operation that can produce a zero magnitude
//! resets the flag.
//!
//! ## Examples
//!
//! ```rust
//! use entities_bignum::BigInteger;
//!
//! let a = BigInteger::from(-7i32);
//! let b = BigInteger::from(3i32);
//! assert_eq!(&a / &b, BigInteger::from(-2i32));
//! assert_eq!(&a % &b, BigInteger::from(-1i32));
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
use std::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, MulAssign, ShlAssign, ShrAssign,
    SubAssign,
};

use crate::big_unsigned::BigUnsigned;
use crate::error::BigNumError;

/// Unbounded signed integer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInteger {
    magnitude: BigUnsigned,
    negative: bool,
}

impl BigInteger {
    /// Create a zero value
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the value one
    pub fn one() -> Self {
        Self::from(BigUnsigned::one())
    }

    /// Build a value from a magnitude and a sign
    ///
    /// A zero magnitude is always non-negative, whatever `negative` says.
    pub fn from_parts(magnitude: BigUnsigned, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            magnitude,
            negative,
        }
    }

    /// Split into magnitude and sign
    pub fn into_parts(self) -> (BigUnsigned, bool) {
        (self.magnitude, self.negative)
    }

    /// Absolute value
    pub fn magnitude(&self) -> &BigUnsigned {
        &self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Reset to zero
    pub fn clear(&mut self) {
        self.magnitude.clear();
        self.negative = false;
    }

    /// Absolute value as a signed integer
    pub fn abs(&self) -> BigInteger {
        Self::from(self.magnitude.clone())
    }

    /// -1, 0 or 1 according to the sign
    pub fn signum(&self) -> i8 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Flip the sign in place (zero stays zero)
    pub fn negate(&mut self) {
        self.negative = !self.negative && !self.is_zero();
    }

    /// Add one
    pub fn increment(&mut self) {
        *self += &BigInteger::one();
    }

    /// Subtract one
    pub fn decrement(&mut self) {
        *self -= &BigInteger::one();
    }

    /// Divide in place, leaving the quotient in `self` and returning the remainder
    ///
    /// The quotient truncates toward zero; the remainder has the sign of the
    /// dividend.
    ///
    /// # Errors
    ///
    /// [`BigNumError::DivideByZero`] if `divisor` is zero; `self` is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::BigInteger;
    ///
    /// let mut value = BigInteger::from(-7i32);
    /// let remainder = value.divide_with_remainder(&BigInteger::from(3i32)).unwrap();
    /// assert_eq!(value, BigInteger::from(-2i32));
    /// assert_eq!(remainder, BigInteger::from(-1i32));
    /// ```
    pub fn divide_with_remainder(
        &mut self,
        divisor: &BigInteger,
    ) -> Result<BigInteger, BigNumError> {
        let remainder = self.magnitude.divide_with_remainder(&divisor.magnitude)?;
        let dividend_negative = self.negative;
        self.negative = self.negative != divisor.negative;
        self.normalize_sign();
        Ok(BigInteger::from_parts(remainder, dividend_negative))
    }

    /// Quotient and remainder as new values
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger), BigNumError> {
        let mut quotient = self.clone();
        let remainder = quotient.divide_with_remainder(divisor)?;
        Ok((quotient, remainder))
    }

    pub fn checked_div_assign(&mut self, divisor: &BigInteger) -> Result<(), BigNumError> {
        self.divide_with_remainder(divisor).map(|_| ())
    }

    pub fn checked_rem_assign(&mut self, divisor: &BigInteger) -> Result<(), BigNumError> {
        let remainder = self.divide_with_remainder(divisor)?;
        *self = remainder;
        Ok(())
    }

    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger, BigNumError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger, BigNumError> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Width-dependent complement of the magnitude
    ///
    /// The magnitude is complemented as [`BigUnsigned::not_within_width`] does
    /// and the sign flips when the result is non-zero.
    pub fn not_within_width(&self) -> BigInteger {
        Self::from_parts(self.magnitude.not_within_width(), !self.negative)
    }

    /// Shift left by a big amount; a negative amount shifts right
    ///
    /// # Errors
    ///
    /// [`BigNumError::InvalidArgument`] when a left shift amount cannot be
    /// addressed.
    pub fn checked_shl_assign(&mut self, amount: &BigInteger) -> Result<(), BigNumError> {
        if amount.negative {
            self.magnitude.checked_shr_assign(&amount.magnitude)?;
            self.normalize_sign();
            Ok(())
        } else {
            self.magnitude.checked_shl_assign(&amount.magnitude)
        }
    }

    /// Shift right by a big amount; a negative amount shifts left
    ///
    /// # Errors
    ///
    /// [`BigNumError::InvalidArgument`] when a negative amount asks for a left
    /// shift that cannot be addressed.
    pub fn checked_shr_assign(&mut self, amount: &BigInteger) -> Result<(), BigNumError> {
        if amount.negative {
            self.magnitude.checked_shl_assign(&amount.magnitude)
        } else {
            self.magnitude.checked_shr_assign(&amount.magnitude)?;
            self.normalize_sign();
            Ok(())
        }
    }

    fn shift_left_by(&mut self, amount: usize) {
        self.magnitude.shift_left_bits(amount);
    }

    fn shift_right_by(&mut self, amount: usize) {
        self.magnitude.shift_right_bits(amount);
        self.normalize_sign();
    }

    fn normalize_sign(&mut self) {
        if self.magnitude.is_zero() {
            self.negative = false;
        }
    }

    fn from_i128(value: i128) -> Self {
        Self::from_parts(BigUnsigned::from(value.unsigned_abs()), value < 0)
    }
}

impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        if self.negative == rhs.negative {
            self.magnitude += &rhs.magnitude;
            return;
        }
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Greater => self.magnitude.sub_assign_smaller(&rhs.magnitude),
            Ordering::Less => {
                let mut larger = rhs.magnitude.clone();
                larger.sub_assign_smaller(&self.magnitude);
                self.magnitude = larger;
                self.negative = rhs.negative;
            }
            Ordering::Equal => self.clear(),
        }
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        let mut negated = rhs.clone();
        negated.negate();
        *self += &negated;
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        self.magnitude *= &rhs.magnitude;
        self.negative = self.negative != rhs.negative;
        self.normalize_sign();
    }
}

impl BitAndAssign<&BigInteger> for BigInteger {
    fn bitand_assign(&mut self, rhs: &BigInteger) {
        self.magnitude &= &rhs.magnitude;
        self.negative = self.negative && rhs.negative;
        self.normalize_sign();
    }
}

impl BitOrAssign<&BigInteger> for BigInteger {
    fn bitor_assign(&mut self, rhs: &BigInteger) {
        self.magnitude |= &rhs.magnitude;
        self.negative = self.negative || rhs.negative;
        self.normalize_sign();
    }
}

impl BitXorAssign<&BigInteger> for BigInteger {
    fn bitxor_assign(&mut self, rhs: &BigInteger) {
        self.magnitude ^= &rhs.magnitude;
        self.negative = self.negative != rhs.negative;
        self.normalize_sign();
    }
}

impl ShlAssign<isize> for BigInteger {
    fn shl_assign(&mut self, amount: isize) {
        if amount < 0 {
            self.shift_right_by(amount.unsigned_abs());
        } else {
            self.shift_left_by(amount.unsigned_abs());
        }
    }
}

impl ShrAssign<isize> for BigInteger {
    fn shr_assign(&mut self, amount: isize) {
        if amount < 0 {
            self.shift_left_by(amount.unsigned_abs());
        } else {
            self.shift_right_by(amount.unsigned_abs());
        }
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<BigUnsigned> for BigInteger {
    fn from(magnitude: BigUnsigned) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }
}

impl TryFrom<BigInteger> for BigUnsigned {
    type Error = BigNumError;

    fn try_from(value: BigInteger) -> Result<Self, BigNumError> {
        if value.negative {
            tracing::debug!(
                magnitude_limbs = value.magnitude.limb_count(),
                "negative value for unsigned magnitude"
            );
            return Err(BigNumError::InvalidArgument(
                "cannot convert a negative integer to an unsigned value".to_string(),
            ));
        }
        Ok(value.magnitude)
    }
}

impl From<bool> for BigInteger {
    fn from(value: bool) -> Self {
        Self::from(BigUnsigned::from(value))
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from(BigUnsigned::from(value))
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_i128(value as i128)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, i128, isize);
