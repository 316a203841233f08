//! Big Number Errors
//!
//! Error type shared by the magnitude engine, the signed wrapper and the
//! narrowing conversions. Every fallible operation checks its preconditions
//! before touching the target, so an `Err` leaves the receiver unchanged.

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

/// Big number operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumError {
    /// Argument outside the domain of the operation
    ///
    /// Raised for negative values assigned to an unsigned container and for
    /// shift amounts too large to address.
    InvalidArgument(String),
    /// Divisor magnitude is zero
    DivideByZero,
    /// Unsigned subtraction whose right-hand side exceeds the left-hand side
    Underflow,
    /// Value is too large for the requested fixed-width type
    NarrowingOverflow {
        /// Name of the target type
        target: &'static str,
    },
    /// Value is too small (or negative) for the requested fixed-width type
    NarrowingUnderflow {
        /// Name of the target type
        target: &'static str,
    },
}

impl std::fmt::Display for BigNumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BigNumError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BigNumError::DivideByZero => write!(f, "Division by zero"),
            BigNumError::Underflow => {
                write!(f, "Negative result in unsigned subtraction")
            }
            BigNumError::NarrowingOverflow { target } => {
                write!(f, "Value is too big to fit in {}", target)
            }
            BigNumError::NarrowingUnderflow { target } => {
                write!(f, "Value is too small to fit in {}", target)
            }
        }
    }
}

impl std::error::Error for BigNumError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BigNumError::DivideByZero.to_string(), "Division by zero");
        assert_eq!(
            BigNumError::Underflow.to_string(),
            "Negative result in unsigned subtraction"
        );
        assert_eq!(
            BigNumError::NarrowingOverflow { target: "u8" }.to_string(),
            "Value is too big to fit in u8"
        );
        assert_eq!(
            BigNumError::NarrowingUnderflow { target: "i16" }.to_string(),
            "Value is too small to fit in i16"
        );
        let err = BigNumError::InvalidArgument("negative value".to_string());
        assert!(err.to_string().contains("negative value"));
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(BigNumError::DivideByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }
}
