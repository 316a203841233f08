//! Decimal Digit-Space Conversion
//!
//! Base-10 conversion carried out on decimal digit vectors instead of through
//! big division:
//!
//! - [`render_by_doubling`]: keeps a decimal accumulator for `2^i`, doubling
//!   it once per bit, and adds it into the result for every set bit.
//! - [`parse_by_halving`]: halves the decimal digit string repeatedly; the
//!   remainder of each halving is the next bit from the bottom.
//!
//! Digit vectors here are little-endian (`digits[0]` is the units digit).

use entities_bignum::{BigUnsigned, Limb, LIMB_BITS};

use crate::common::NumeralError;

/// Render a magnitude in base 10 by doubling in decimal digit space
///
/// # Examples
///
/// ```rust
/// use entities_bignum::BigUnsigned;
/// use infrastructure_bignum_encoding::decimal::render_by_doubling;
///
/// assert_eq!(render_by_doubling(&BigUnsigned::from(1234u32)), "1234");
/// assert_eq!(render_by_doubling(&BigUnsigned::new()), "0");
/// ```
pub fn render_by_doubling(value: &BigUnsigned) -> String {
    let bits = value.bit_length();
    let mut result: Vec<u8> = vec![0];
    let mut power: Vec<u8> = vec![1];

    for index in 0..bits {
        if value.bit(index) {
            add_digits(&mut result, &power);
        }
        if index + 1 < bits {
            double_digits(&mut power);
        }
    }

    tracing::trace!(bits, digits = result.len(), "rendered by decimal doubling");
    result.iter().rev().map(|&digit| char::from(b'0' + digit)).collect()
}

/// Parse a string of decimal digits by repeated halving
///
/// Leading zeros are accepted. No sign or prefix is allowed.
///
/// # Errors
///
/// [`NumeralError::Empty`] for an empty string and
/// [`NumeralError::InvalidDigit`] for anything but `0-9`.
pub fn parse_by_halving(text: &str) -> Result<BigUnsigned, NumeralError> {
    if text.is_empty() {
        return Err(NumeralError::Empty);
    }

    // Most significant digit first while halving.
    let mut digits = Vec::with_capacity(text.len());
    for (position, digit) in text.char_indices() {
        match digit.to_digit(10) {
            Some(value) => digits.push(value as u8),
            None => {
                tracing::debug!(position, %digit, "invalid decimal digit");
                return Err(NumeralError::InvalidDigit {
                    digit,
                    position,
                    radix: 10,
                });
            }
        }
    }
    strip_leading_zeros(&mut digits);

    let mut limbs = Vec::new();
    let mut current: Limb = 0;
    let mut filled = 0;
    while !digits.is_empty() {
        if halve_digits(&mut digits) {
            current |= (1 as Limb) << filled;
        }
        filled += 1;
        if filled == LIMB_BITS {
            limbs.push(current);
            current = 0;
            filled = 0;
        }
    }
    if filled != 0 {
        limbs.push(current);
    }

    Ok(BigUnsigned::from_limbs(limbs))
}

/// `lhs += rhs` on little-endian decimal digits
fn add_digits(lhs: &mut Vec<u8>, rhs: &[u8]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    let mut carry = 0;
    for (index, digit) in lhs.iter_mut().enumerate() {
        let sum = *digit + rhs.get(index).copied().unwrap_or(0) + carry;
        *digit = sum % 10;
        carry = sum / 10;
        if carry == 0 && index >= rhs.len() {
            break;
        }
    }
    if carry != 0 {
        lhs.push(carry);
    }
}

/// `digits *= 2` on little-endian decimal digits
fn double_digits(digits: &mut Vec<u8>) {
    let mut carry = 0;
    for digit in digits.iter_mut() {
        let doubled = *digit * 2 + carry;
        *digit = doubled % 10;
        carry = doubled / 10;
    }
    if carry != 0 {
        digits.push(carry);
    }
}

/// Halve big-endian decimal digits in place, returning the remainder bit
fn halve_digits(digits: &mut Vec<u8>) -> bool {
    let mut remainder = 0;
    for digit in digits.iter_mut() {
        let current = remainder * 10 + *digit;
        *digit = current / 2;
        remainder = current % 2;
    }
    strip_leading_zeros(digits);
    remainder == 1
}

fn strip_leading_zeros(digits: &mut Vec<u8>) {
    let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
    digits.drain(..zeros);
}
