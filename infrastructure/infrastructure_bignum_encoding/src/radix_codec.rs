//! Radix Codec Module
//!
//! Converts between numerals in base 2..36 and [`BigUnsigned`] /
//! [`BigInteger`] values.
//!
//! ## Numeral Grammar
//!
//! ```text
//! numeral := [ '+' | '-' ] [ prefix ] digit+
//! prefix  := '0x' | '0X'     (auto-detect, or explicit base 16)
//!          | '0'             (auto-detect only, when more digits follow)
//! ```
//!
//! ## Parsing
//!
//! Digits are consumed most significant first in chunks of as many digits as
//! fit in one limb, so the big value sees one multiply and one add per chunk
//! rather than per digit.
//!
//! ## Rendering
//!
//! The renderer depends on the base:
//!
//! | Base               | Renderer                                             |
//! |--------------------|------------------------------------------------------|
//! | 2, 4, 8, 16, 32    | [`render_bit_groups`](crate::power_of_two::render_bit_groups) |
//! | 10                 | [`render_by_doubling`](crate::decimal::render_by_doubling)     |
//! | anything else      | [`RadixCodec::render_by_division`]                  |
//!
//! ## Examples
//!
//! ```rust
//! use infrastructure_bignum_encoding::{FormatOptions, Radix, RadixCodec};
//!
//! let value = RadixCodec::parse_unsigned("FF", Radix::Base(16)).unwrap();
//! assert_eq!(RadixCodec::render_unsigned(&value, 10).unwrap(), "255");
//!
//! let negative = RadixCodec::parse_signed("-0x1f", Radix::Auto).unwrap();
//! let options = FormatOptions::new().radix(16).show_base(true);
//! assert_eq!(RadixCodec::format_signed(&negative, &options).unwrap(), "-0x1f");
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

use entities_bignum::{BigInteger, BigUnsigned, Limb};

use crate::common::{
    bits_per_digit, check_radix, chunk_width, digit_char, FormatOptions, NumeralError, Radix,
};
use crate::decimal::render_by_doubling;
use crate::power_of_two::render_bit_groups;

/// Numeral codec
pub struct RadixCodec;

impl RadixCodec {
    /// Parse a numeral into an unsigned value
    ///
    /// # Errors
    ///
    /// - [`NumeralError::NegativeUnsigned`] for a numeral starting with `-`
    /// - [`NumeralError::InvalidRadix`] for an explicit base outside 2..=36
    /// - [`NumeralError::Empty`], [`NumeralError::InvalidDigit`] or
    ///   [`NumeralError::MisplacedSign`] for malformed input
    pub fn parse_unsigned(text: &str, radix: Radix) -> Result<BigUnsigned, NumeralError> {
        let (negative, magnitude) = Self::parse_parts(text, radix)?;
        if negative {
            tracing::debug!(len = text.len(), "negative numeral for unsigned value");
            return Err(NumeralError::NegativeUnsigned);
        }
        Ok(magnitude)
    }

    /// Parse a numeral into a signed value
    ///
    /// `"-0"` parses as zero, which is never negative.
    ///
    /// # Errors
    ///
    /// As [`RadixCodec::parse_unsigned`], except that `-` is accepted.
    pub fn parse_signed(text: &str, radix: Radix) -> Result<BigInteger, NumeralError> {
        let (negative, magnitude) = Self::parse_parts(text, radix)?;
        Ok(BigInteger::from_parts(magnitude, negative))
    }

    /// Render a magnitude in `radix` with lowercase digits and no decoration
    ///
    /// # Errors
    ///
    /// [`NumeralError::InvalidRadix`] for a base outside 2..=36.
    pub fn render_unsigned(value: &BigUnsigned, radix: u32) -> Result<String, NumeralError> {
        check_radix(radix)?;
        if value.is_zero() {
            return Ok("0".to_string());
        }

        if let Some(bits) = bits_per_digit(radix) {
            tracing::trace!(radix, limbs = value.limb_count(), "bit group renderer");
            render_bit_groups(value, bits)
        } else if radix == 10 {
            tracing::trace!(limbs = value.limb_count(), "decimal doubling renderer");
            Ok(render_by_doubling(value))
        } else {
            tracing::trace!(radix, limbs = value.limb_count(), "division renderer");
            Self::render_by_division(value, radix)
        }
    }

    /// Render a signed value in `radix`, prefixing `-` when negative
    pub fn render_signed(value: &BigInteger, radix: u32) -> Result<String, NumeralError> {
        let digits = Self::render_unsigned(value.magnitude(), radix)?;
        if value.is_negative() {
            Ok(format!("-{}", digits))
        } else {
            Ok(digits)
        }
    }

    /// Render a magnitude with formatting options
    pub fn format_unsigned(
        value: &BigUnsigned,
        options: &FormatOptions,
    ) -> Result<String, NumeralError> {
        Self::format_parts(value, false, options)
    }

    /// Render a signed value with formatting options
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bignum::BigInteger;
    /// use infrastructure_bignum_encoding::{FormatOptions, RadixCodec};
    ///
    /// let options = FormatOptions::new().radix(16).show_sign(true).uppercase(true);
    /// assert_eq!(RadixCodec::format_signed(&BigInteger::from(255i32), &options).unwrap(), "+FF");
    /// assert_eq!(RadixCodec::format_signed(&BigInteger::from(-255i32), &options).unwrap(), "-FF");
    /// ```
    pub fn format_signed(
        value: &BigInteger,
        options: &FormatOptions,
    ) -> Result<String, NumeralError> {
        Self::format_parts(value.magnitude(), value.is_negative(), options)
    }

    /// Render by repeated division, several digits per division
    ///
    /// Works for every base; [`RadixCodec::render_unsigned`] only uses it when
    /// no specialised renderer applies.
    pub fn render_by_division(value: &BigUnsigned, radix: u32) -> Result<String, NumeralError> {
        check_radix(radix)?;
        if value.is_zero() {
            return Ok("0".to_string());
        }

        let (width, power) = chunk_width(radix);
        let divisor = BigUnsigned::from(power);
        let mut quotient = value.clone();
        // Least significant digit first, reversed at the end.
        let mut reversed = String::new();

        while !quotient.is_zero() {
            let remainder = quotient.divide_with_remainder(&divisor)?;
            let mut chunk = Limb::try_from(&remainder)?;
            let last = quotient.is_zero();
            let mut emitted = 0;
            while emitted < width && !(last && chunk == 0) {
                reversed.push(digit_char((chunk % Limb::from(radix)) as u32));
                chunk /= Limb::from(radix);
                emitted += 1;
            }
        }

        Ok(reversed.chars().rev().collect())
    }

    fn format_parts(
        magnitude: &BigUnsigned,
        negative: bool,
        options: &FormatOptions,
    ) -> Result<String, NumeralError> {
        let mut digits = Self::render_unsigned(magnitude, options.radix)?;
        if options.uppercase {
            digits.make_ascii_uppercase();
        }

        let base_marker = match options.radix {
            _ if !options.show_base || magnitude.is_zero() => "",
            16 if options.uppercase => "0X",
            16 => "0x",
            8 => "0",
            _ => "",
        };
        let sign = if negative {
            "-"
        } else if options.show_sign {
            "+"
        } else {
            ""
        };

        Ok(format!("{}{}{}", sign, base_marker, digits))
    }

    /// Split a numeral into its sign and magnitude
    fn parse_parts(text: &str, radix: Radix) -> Result<(bool, BigUnsigned), NumeralError> {
        if text.is_empty() {
            tracing::debug!("empty numeral");
            return Err(NumeralError::Empty);
        }

        let (negative, sign_len) = match text.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };
        let body = &text[sign_len..];
        if let Some(offset) = body.find(['+', '-']) {
            let position = sign_len + offset;
            tracing::debug!(position, "misplaced sign");
            return Err(NumeralError::MisplacedSign { position });
        }

        let (radix, prefix_len) = Self::resolve_radix(body, radix)?;
        let digits = &body[prefix_len..];
        if digits.is_empty() {
            tracing::debug!(radix, "numeral has no digits");
            return Err(NumeralError::Empty);
        }

        let offset = sign_len + prefix_len;
        let mut values = Vec::with_capacity(digits.len());
        for (index, digit) in digits.char_indices() {
            match digit.to_digit(radix) {
                Some(value) => values.push(value),
                None => {
                    let position = offset + index;
                    tracing::debug!(position, radix, %digit, "invalid digit");
                    return Err(NumeralError::InvalidDigit {
                        digit,
                        position,
                        radix,
                    });
                }
            }
        }

        Ok((negative, Self::accumulate(&values, radix)))
    }

    /// Pick the base and the length of the base prefix to skip
    fn resolve_radix(body: &str, radix: Radix) -> Result<(u32, usize), NumeralError> {
        let hex_prefix = body.starts_with("0x") || body.starts_with("0X");
        let resolved = match radix {
            Radix::Auto if hex_prefix => (16, 2),
            Radix::Auto if body.len() > 1 && body.starts_with('0') => (8, 1),
            Radix::Auto => (10, 0),
            Radix::Base(16) if hex_prefix => (16, 2),
            Radix::Base(base) => {
                check_radix(base)?;
                (base, 0)
            }
        };
        tracing::trace!(radix = resolved.0, prefix_len = resolved.1, "resolved numeral base");
        Ok(resolved)
    }

    /// `value = value * radix^k + chunk` over limb-sized chunks of digits
    fn accumulate(values: &[u32], radix: u32) -> BigUnsigned {
        let (width, _) = chunk_width(radix);
        let base = Limb::from(radix);
        let head = values.len() % width;
        let (first, rest) = values.split_at(head);

        let mut result = BigUnsigned::new();
        for chunk in std::iter::once(first)
            .filter(|chunk| !chunk.is_empty())
            .chain(rest.chunks(width))
        {
            let scale = base.pow(chunk.len() as u32);
            let chunk_value = chunk
                .iter()
                .fold(0 as Limb, |acc, &digit| acc * base + Limb::from(digit));
            result *= &BigUnsigned::from(scale);
            result += &BigUnsigned::from(chunk_value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<BigUnsigned, NumeralError> {
        RadixCodec::parse_unsigned(text, Radix::default())
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse("0").unwrap(), BigUnsigned::new());
        assert_eq!(parse("255").unwrap(), BigUnsigned::from(255u32));
        assert_eq!(parse("+42").unwrap(), BigUnsigned::from(42u32));
        assert_eq!(parse("007").unwrap(), BigUnsigned::from(7u32));
        assert_eq!(
            parse("340282366920938463463374607431768211455").unwrap(),
            BigUnsigned::from(u128::MAX)
        );
    }

    #[test]
    fn test_parse_hex_with_and_without_prefix() {
        let expected = BigUnsigned::from(255u32);
        assert_eq!(RadixCodec::parse_unsigned("FF", Radix::Base(16)).unwrap(), expected);
        assert_eq!(RadixCodec::parse_unsigned("ff", Radix::Base(16)).unwrap(), expected);
        assert_eq!(RadixCodec::parse_unsigned("0xff", Radix::Base(16)).unwrap(), expected);
        assert_eq!(RadixCodec::parse_unsigned("0XfF", Radix::Auto).unwrap(), expected);
    }

    #[test]
    fn test_auto_detect() {
        assert_eq!(
            RadixCodec::parse_unsigned("017", Radix::Auto).unwrap(),
            BigUnsigned::from(15u32)
        );
        assert_eq!(
            RadixCodec::parse_unsigned("0", Radix::Auto).unwrap(),
            BigUnsigned::new()
        );
        assert_eq!(
            RadixCodec::parse_unsigned("17", Radix::Auto).unwrap(),
            BigUnsigned::from(17u32)
        );
        assert_eq!(
            RadixCodec::parse_unsigned("08", Radix::Auto),
            Err(NumeralError::InvalidDigit {
                digit: '8',
                position: 1,
                radix: 8
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse(""), Err(NumeralError::Empty));
        assert_eq!(parse("-"), Err(NumeralError::Empty));
        assert_eq!(
            RadixCodec::parse_unsigned("0x", Radix::Base(16)),
            Err(NumeralError::Empty)
        );
        assert_eq!(parse("12-3"), Err(NumeralError::MisplacedSign { position: 2 }));
        assert_eq!(parse("+-3"), Err(NumeralError::MisplacedSign { position: 1 }));
        assert_eq!(
            parse("12z"),
            Err(NumeralError::InvalidDigit {
                digit: 'z',
                position: 2,
                radix: 10
            })
        );
        assert!(matches!(parse(" 1"), Err(NumeralError::InvalidDigit { digit: ' ', .. })));
    }

    #[test]
    fn test_parse_radix_errors() {
        assert_eq!(
            RadixCodec::parse_unsigned("1", Radix::Base(1)),
            Err(NumeralError::InvalidRadix(1))
        );
        assert_eq!(
            RadixCodec::parse_signed("1", Radix::Base(37)),
            Err(NumeralError::InvalidRadix(37))
        );
        assert_eq!(parse("-5"), Err(NumeralError::NegativeUnsigned));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(
            RadixCodec::parse_signed("-123", Radix::default()).unwrap(),
            BigInteger::from(-123i32)
        );
        let zero = RadixCodec::parse_signed("-0", Radix::default()).unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(
            RadixCodec::parse_signed("-zz", Radix::Base(36)).unwrap(),
            BigInteger::from(-1295i32)
        );
    }

    #[test]
    fn test_render_selects_every_path() {
        let value = BigUnsigned::from(255u32);
        assert_eq!(RadixCodec::render_unsigned(&value, 16).unwrap(), "ff");
        assert_eq!(RadixCodec::render_unsigned(&value, 10).unwrap(), "255");
        assert_eq!(RadixCodec::render_unsigned(&value, 3).unwrap(), "100110");
        assert_eq!(RadixCodec::render_unsigned(&value, 36).unwrap(), "73");
        assert_eq!(RadixCodec::render_unsigned(&BigUnsigned::new(), 7).unwrap(), "0");
        assert_eq!(
            RadixCodec::render_unsigned(&value, 0),
            Err(NumeralError::InvalidRadix(0))
        );
    }

    #[test]
    fn test_render_by_division_pads_inner_chunks() {
        // 10^40 spans several chunks, most of them all zeros.
        let value = parse(&format!("1{}", "0".repeat(40))).unwrap();
        assert_eq!(
            RadixCodec::render_by_division(&value, 10).unwrap(),
            format!("1{}", "0".repeat(40))
        );
        assert_eq!(
            RadixCodec::render_by_division(&BigUnsigned::from(u128::MAX), 16).unwrap(),
            "f".repeat(32)
        );
    }

    #[test]
    fn test_render_signed() {
        assert_eq!(
            RadixCodec::render_signed(&BigInteger::from(-255i32), 16).unwrap(),
            "-ff"
        );
        assert_eq!(RadixCodec::render_signed(&BigInteger::new(), 10).unwrap(), "0");
    }

    #[test]
    fn test_format_options() {
        let value = BigUnsigned::from(255u32);
        let hex = FormatOptions::new().radix(16).show_base(true);
        assert_eq!(RadixCodec::format_unsigned(&value, &hex).unwrap(), "0xff");
        assert_eq!(
            RadixCodec::format_unsigned(&value, &hex.uppercase(true)).unwrap(),
            "0XFF"
        );

        let octal = FormatOptions::new().radix(8).show_base(true);
        assert_eq!(RadixCodec::format_unsigned(&value, &octal).unwrap(), "0377");
        assert_eq!(
            RadixCodec::format_unsigned(&BigUnsigned::new(), &octal).unwrap(),
            "0"
        );

        let signed = FormatOptions::new().show_sign(true);
        assert_eq!(RadixCodec::format_unsigned(&value, &signed).unwrap(), "+255");
        assert_eq!(
            RadixCodec::format_signed(&BigInteger::new(), &signed).unwrap(),
            "+0"
        );

        let base36 = FormatOptions::new().radix(36).uppercase(true);
        assert_eq!(
            RadixCodec::format_signed(&BigInteger::from(-1295i32), &base36).unwrap(),
            "-ZZ"
        );
    }
}
