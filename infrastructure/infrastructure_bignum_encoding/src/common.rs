//! Common Encoding/Decoding Utilities
//!
//! Shared types for the numeral codecs: the error type, radix selection for
//! parsing, formatting options for rendering, and digit/chunk helpers used
//! by every renderer.
//!
//! ## Digit Alphabet
//!
//! Digits are `0-9` followed by `a-z`, so base 36 uses the whole alphabet.
//! Parsing accepts letters in either case; rendering emits lowercase unless
//! [`FormatOptions::uppercase`] is set.

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

use std::fmt;

use entities_bignum::{BigNumError, Limb};

/// Smallest supported base
pub const MIN_RADIX: u32 = 2;

/// Largest supported base
pub const MAX_RADIX: u32 = 36;

/// Numeral parsing and rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// No digits: empty input, or only a sign and/or base prefix
    Empty,
    /// Character outside the alphabet of the base
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },
    /// Sign character anywhere but the first position
    MisplacedSign { position: usize },
    /// Base outside 2..=36
    InvalidRadix(u32),
    /// Negative numeral parsed into an unsigned value
    NegativeUnsigned,
    /// Error raised by the arithmetic engine
    Arithmetic(BigNumError),
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::Empty => write!(f, "Numeral has no digits"),
            NumeralError::InvalidDigit {
                digit,
                position,
                radix,
            } => write!(
                f,
                "Invalid digit '{}' at position {} for base {}",
                digit, position, radix
            ),
            NumeralError::MisplacedSign { position } => {
                write!(f, "Misplaced sign at position {}", position)
            }
            NumeralError::InvalidRadix(radix) => write!(
                f,
                "Invalid argument: base {} is outside {}..={}",
                radix, MIN_RADIX, MAX_RADIX
            ),
            NumeralError::NegativeUnsigned => write!(
                f,
                "Invalid argument: cannot convert a negative numeral to an unsigned value"
            ),
            NumeralError::Arithmetic(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for NumeralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumeralError::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BigNumError> for NumeralError {
    fn from(err: BigNumError) -> Self {
        NumeralError::Arithmetic(err)
    }
}

/// Base selection for parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// Detect from the numeral: `0x`/`0X` is hexadecimal, a leading `0`
    /// followed by more digits is octal, anything else is decimal
    Auto,
    /// Fixed base in 2..=36 (base 16 still accepts a `0x` prefix)
    Base(u32),
}

impl Default for Radix {
    fn default() -> Self {
        Radix::Base(10)
    }
}

/// Rendering options
///
/// # Examples
///
/// ```rust
/// use infrastructure_bignum_encoding::FormatOptions;
///
/// let options = FormatOptions::new().radix(16).show_base(true).uppercase(true);
/// assert_eq!(options.radix, 16);
/// assert!(!options.show_sign);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Output base (2..=36)
    pub radix: u32,
    /// Print `+` before non-negative values
    pub show_sign: bool,
    /// Print `0x` (base 16) or `0` (base 8) before non-zero values
    pub show_base: bool,
    /// Upper-case letter digits and the hex marker
    pub uppercase: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            radix: 10,
            show_sign: false,
            show_base: false,
            uppercase: false,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    pub fn show_sign(mut self, show_sign: bool) -> Self {
        self.show_sign = show_sign;
        self
    }

    pub fn show_base(mut self, show_base: bool) -> Self {
        self.show_base = show_base;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

/// Reject bases outside 2..=36
pub(crate) fn check_radix(radix: u32) -> Result<(), NumeralError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        tracing::debug!(radix, "unsupported base");
        Err(NumeralError::InvalidRadix(radix))
    }
}

/// Lowercase character for a digit value below 36
pub(crate) fn digit_char(value: u32) -> char {
    debug_assert!(value < MAX_RADIX, "digit value {value} out of range");
    char::from_digit(value, MAX_RADIX).unwrap_or('?')
}

/// Largest digit count `k` such that `radix^k` fits in a limb, with `radix^k`
pub(crate) fn chunk_width(radix: u32) -> (usize, Limb) {
    let mut width = 0;
    let mut power: Limb = 1;
    while let Some(next) = power.checked_mul(Limb::from(radix)) {
        power = next;
        width += 1;
    }
    (width, power)
}

/// Bits per digit when `radix` is a power of two
pub(crate) fn bits_per_digit(radix: u32) -> Option<u32> {
    if radix >= MIN_RADIX && radix.is_power_of_two() {
        Some(radix.trailing_zeros())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bignum::LIMB_BITS;

    #[test]
    fn test_check_radix_bounds() {
        assert!(check_radix(2).is_ok());
        assert!(check_radix(36).is_ok());
        assert_eq!(check_radix(1), Err(NumeralError::InvalidRadix(1)));
        assert_eq!(check_radix(37), Err(NumeralError::InvalidRadix(37)));
    }

    #[test]
    fn test_digit_char() {
        assert_eq!(digit_char(0), '0');
        assert_eq!(digit_char(9), '9');
        assert_eq!(digit_char(10), 'a');
        assert_eq!(digit_char(35), 'z');
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "digit value 36 out of range")]
    fn test_digit_char_rejects_value_past_base_36() {
        digit_char(36);
    }

    #[test]
    fn test_chunk_width_fits_limb() {
        let (width, power) = chunk_width(10);
        assert_eq!(width, if LIMB_BITS == 64 { 19 } else { 9 });
        assert_eq!(power, (10 as Limb).pow(width as u32));

        let (binary_width, _) = chunk_width(2);
        assert_eq!(binary_width, LIMB_BITS as usize - 1);

        for radix in MIN_RADIX..=MAX_RADIX {
            let (width, power) = chunk_width(radix);
            assert!(width >= 1);
            assert!(power.checked_mul(Limb::from(radix)).is_none());
        }
    }

    #[test]
    fn test_bits_per_digit() {
        assert_eq!(bits_per_digit(2), Some(1));
        assert_eq!(bits_per_digit(8), Some(3));
        assert_eq!(bits_per_digit(16), Some(4));
        assert_eq!(bits_per_digit(32), Some(5));
        assert_eq!(bits_per_digit(10), None);
        assert_eq!(bits_per_digit(1), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Radix::default(), Radix::Base(10));
        let options = FormatOptions::default();
        assert_eq!(options.radix, 10);
        assert!(!options.show_sign && !options.show_base && !options.uppercase);
    }

    #[test]
    fn test_error_display() {
        let err = NumeralError::InvalidDigit {
            digit: 'g',
            position: 3,
            radix: 16,
        };
        assert_eq!(err.to_string(), "Invalid digit 'g' at position 3 for base 16");
        assert_eq!(
            NumeralError::from(BigNumError::DivideByZero).to_string(),
            "Division by zero"
        );
        assert_eq!(NumeralError::Empty.to_string(), "Numeral has no digits");
    }
}
