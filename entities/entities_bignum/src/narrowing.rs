//! Narrowing Conversions
//!
//! Range-checked conversion of [`BigUnsigned`] and [`BigInteger`] into the
//! fixed-width machine integers. A conversion succeeds exactly when the value
//! is representable in the target type, including the minimum of a signed
//! type (`i8::MIN` from `-128`).
//!
//! ```rust
//! use entities_bignum::{BigInteger, BigNumError};
//!
//! let value = BigInteger::from(-128i32);
//! assert_eq!(i8::try_from(&value), Ok(-128));
//! assert_eq!(
//!     u8::try_from(&value),
//!     Err(BigNumError::NarrowingUnderflow { target: "u8" })
//! );
//! ```

use crate::big_integer::BigInteger;
use crate::big_unsigned::BigUnsigned;
use crate::error::BigNumError;
use crate::limbs::LIMB_BITS;

/// Fold the magnitude into a `u128`, or `None` if it needs more bits
fn magnitude_to_u128(value: &BigUnsigned) -> Option<u128> {
    if value.bit_length() > 128 {
        return None;
    }
    Some(
        value
            .limbs()
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | limb as u128),
    )
}

fn overflow(target: &'static str, value: &BigUnsigned) -> BigNumError {
    tracing::debug!(
        target_type = target,
        bit_length = value.bit_length(),
        "narrowing overflow"
    );
    BigNumError::NarrowingOverflow { target }
}

fn underflow(target: &'static str, value: &BigUnsigned) -> BigNumError {
    tracing::debug!(
        target_type = target,
        bit_length = value.bit_length(),
        "narrowing underflow"
    );
    BigNumError::NarrowingUnderflow { target }
}

macro_rules! narrow_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&BigUnsigned> for $t {
                type Error = BigNumError;

                fn try_from(value: &BigUnsigned) -> Result<Self, BigNumError> {
                    magnitude_to_u128(value)
                        .and_then(|wide| <$t>::try_from(wide).ok())
                        .ok_or_else(|| overflow(stringify!($t), value))
                }
            }

            impl TryFrom<BigUnsigned> for $t {
                type Error = BigNumError;

                fn try_from(value: BigUnsigned) -> Result<Self, BigNumError> {
                    <$t>::try_from(&value)
                }
            }

            impl TryFrom<&BigInteger> for $t {
                type Error = BigNumError;

                fn try_from(value: &BigInteger) -> Result<Self, BigNumError> {
                    if value.is_negative() {
                        return Err(underflow(stringify!($t), value.magnitude()));
                    }
                    <$t>::try_from(value.magnitude())
                }
            }

            impl TryFrom<BigInteger> for $t {
                type Error = BigNumError;

                fn try_from(value: BigInteger) -> Result<Self, BigNumError> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

narrow_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! narrow_signed {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&BigUnsigned> for $t {
                type Error = BigNumError;

                fn try_from(value: &BigUnsigned) -> Result<Self, BigNumError> {
                    magnitude_to_u128(value)
                        .and_then(|wide| <$t>::try_from(wide).ok())
                        .ok_or_else(|| overflow(stringify!($t), value))
                }
            }

            impl TryFrom<BigUnsigned> for $t {
                type Error = BigNumError;

                fn try_from(value: BigUnsigned) -> Result<Self, BigNumError> {
                    <$t>::try_from(&value)
                }
            }

            impl TryFrom<&BigInteger> for $t {
                type Error = BigNumError;

                fn try_from(value: &BigInteger) -> Result<Self, BigNumError> {
                    let magnitude = value.magnitude();
                    if !value.is_negative() {
                        return <$t>::try_from(magnitude);
                    }
                    match magnitude_to_u128(magnitude) {
                        // Magnitude of MIN is one past MAX; the wrapping negation lands on it.
                        Some(wide) if wide <= <$t>::MIN.unsigned_abs() as u128 => {
                            Ok((wide as $t).wrapping_neg())
                        }
                        _ => Err(underflow(stringify!($t), magnitude)),
                    }
                }
            }

            impl TryFrom<BigInteger> for $t {
                type Error = BigNumError;

                fn try_from(value: BigInteger) -> Result<Self, BigNumError> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

narrow_signed!(i8, i16, i32, i64, i128, isize);
