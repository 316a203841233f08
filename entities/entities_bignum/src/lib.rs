//! Entities Layer: Big Numbers
//!
//! Provides unbounded integer arithmetic:
//! - Unsigned magnitudes with copy-on-write limb storage
//! - Signed integers (magnitude plus sign)
//! - Arithmetic, bitwise and shift operations with operator forms
//! - Range-checked narrowing to machine integers
//!
//! Text conversion lives in the infrastructure layer
//! (`infrastructure_bignum_encoding`).

pub mod arith;
pub mod big_integer;
pub mod big_unsigned;
pub mod bitwise;
pub mod error;
pub mod limbs;
pub mod narrowing;
pub mod ops;

pub use big_integer::BigInteger;
pub use big_unsigned::BigUnsigned;
pub use error::BigNumError;
pub use limbs::{Limb, LIMB_BITS};
