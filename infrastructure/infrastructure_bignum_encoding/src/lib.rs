//! Infrastructure Layer: Big Number Encoding
//!
//! Provides conversion between big numbers and their textual numerals.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure
//! layer. It parses numerals in any base from 2 to 36 into the Entities
//! layer's `BigUnsigned` and `BigInteger` types and renders them back, with
//! optional sign, base marker and letter case.
//!
//! ## Codecs
//!
//! - **[`radix_codec`](radix_codec/index.html)**: Parsing, rendering and
//!   formatting for every supported base. Entry point: [`RadixCodec`].
//! - **[`decimal`](decimal/index.html)**: Base-10 conversion in decimal digit
//!   space (doubling renderer, halving parser).
//! - **[`power_of_two`](power_of_two/index.html)**: Division-free rendering for
//!   bases 2, 4, 8, 16 and 32.
//!
//! ## Architecture
//!
//! This crate only uses the public API of `entities_bignum`.
//!
//! ## See Also
//!
//! - [`entities_bignum`](../entities_bignum/index.html): BigUnsigned and BigInteger types

mod common;

pub mod decimal;
pub mod power_of_two;
pub mod radix_codec;

pub use radix_codec::RadixCodec;

// Re-export error and option types for convenience
pub use common::{FormatOptions, NumeralError, Radix, MAX_RADIX, MIN_RADIX};
