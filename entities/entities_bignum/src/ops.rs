//! Operator Forms
//!
//! `std::ops` implementations for [`BigUnsigned`] and [`BigInteger`].
//!
//! The arithmetic modules implement the compound `*Assign<&T>` forms. This
//! module derives every other combination from them: by-value right-hand
//! sides, and the pure binary forms over owned values and references.
//!
//! Subtraction on [`BigUnsigned`] and division/remainder on both types can
//! fail. Their operator forms panic with the error's message, the same way
//! primitive integers panic on overflow or division by zero. Use the
//! `checked_*` methods to get a `Result` instead.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};

use crate::big_integer::BigInteger;
use crate::big_unsigned::BigUnsigned;

macro_rules! forward_binop {
    ($t:ty, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $assign_imp<$t> for $t {
            fn $assign_method(&mut self, rhs: $t) {
                $assign_imp::$assign_method(self, &rhs);
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: &$t) -> $t {
                $assign_imp::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(mut self, rhs: $t) -> $t {
                $assign_imp::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $imp<&$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> $t {
                let mut result = self.clone();
                $assign_imp::$assign_method(&mut result, rhs);
                result
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                let mut result = self.clone();
                $assign_imp::$assign_method(&mut result, &rhs);
                result
            }
        }
    };
}

macro_rules! panicking_assign {
    ($t:ty, $assign_imp:ident, $assign_method:ident, $checked:ident) => {
        impl $assign_imp<&$t> for $t {
            fn $assign_method(&mut self, rhs: &$t) {
                if let Err(err) = self.$checked(rhs) {
                    panic!("{}", err);
                }
            }
        }
    };
}

macro_rules! forward_shift {
    ($t:ty, $amount:ty) => {
        impl Shl<$amount> for $t {
            type Output = $t;

            fn shl(mut self, amount: $amount) -> $t {
                self <<= amount;
                self
            }
        }

        impl Shl<$amount> for &$t {
            type Output = $t;

            fn shl(self, amount: $amount) -> $t {
                let mut result = self.clone();
                result <<= amount;
                result
            }
        }

        impl Shr<$amount> for $t {
            type Output = $t;

            fn shr(mut self, amount: $amount) -> $t {
                self >>= amount;
                self
            }
        }

        impl Shr<$amount> for &$t {
            type Output = $t;

            fn shr(self, amount: $amount) -> $t {
                let mut result = self.clone();
                result >>= amount;
                result
            }
        }
    };
}

// BigUnsigned

panicking_assign!(BigUnsigned, SubAssign, sub_assign, checked_sub_assign);
panicking_assign!(BigUnsigned, DivAssign, div_assign, checked_div_assign);
panicking_assign!(BigUnsigned, RemAssign, rem_assign, checked_rem_assign);

forward_binop!(BigUnsigned, Add, add, AddAssign, add_assign);
forward_binop!(BigUnsigned, Sub, sub, SubAssign, sub_assign);
forward_binop!(BigUnsigned, Mul, mul, MulAssign, mul_assign);
forward_binop!(BigUnsigned, Div, div, DivAssign, div_assign);
forward_binop!(BigUnsigned, Rem, rem, RemAssign, rem_assign);
forward_binop!(BigUnsigned, BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BigUnsigned, BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BigUnsigned, BitXor, bitxor, BitXorAssign, bitxor_assign);
forward_shift!(BigUnsigned, usize);

/// Width-dependent complement, see [`BigUnsigned::not_within_width`]
impl Not for &BigUnsigned {
    type Output = BigUnsigned;

    fn not(self) -> BigUnsigned {
        self.not_within_width()
    }
}

impl Not for BigUnsigned {
    type Output = BigUnsigned;

    fn not(self) -> BigUnsigned {
        self.not_within_width()
    }
}

// BigInteger

panicking_assign!(BigInteger, DivAssign, div_assign, checked_div_assign);
panicking_assign!(BigInteger, RemAssign, rem_assign, checked_rem_assign);

forward_binop!(BigInteger, Add, add, AddAssign, add_assign);
forward_binop!(BigInteger, Sub, sub, SubAssign, sub_assign);
forward_binop!(BigInteger, Mul, mul, MulAssign, mul_assign);
forward_binop!(BigInteger, Div, div, DivAssign, div_assign);
forward_binop!(BigInteger, Rem, rem, RemAssign, rem_assign);
forward_binop!(BigInteger, BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BigInteger, BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BigInteger, BitXor, bitxor, BitXorAssign, bitxor_assign);
forward_shift!(BigInteger, isize);

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        let mut result = self.clone();
        result.negate();
        result
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

/// Width-dependent complement, see [`BigInteger::not_within_width`]
impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        self.not_within_width()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        self.not_within_width()
    }
}
