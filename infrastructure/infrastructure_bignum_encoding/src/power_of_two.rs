//! Power-of-Two Bases
//!
//! Bases 2, 4, 8, 16 and 32 map every digit onto a fixed group of bits, so
//! the digits are read straight out of the limbs without any division. A
//! group may straddle two limbs when the group width does not divide the
//! limb width (bases 8 and 32).

use entities_bignum::{BigUnsigned, Limb, LIMB_BITS};

use crate::common::{digit_char, NumeralError};

/// Render a magnitude using `bits` bits per digit
///
/// Widths outside 1..=5 have no base in 2..=36 and are rejected with
/// [`NumeralError::InvalidRadix`] carrying `2^bits`.
///
/// # Examples
///
/// ```rust
/// use entities_bignum::BigUnsigned;
/// use infrastructure_bignum_encoding::power_of_two::render_bit_groups;
///
/// assert_eq!(render_bit_groups(&BigUnsigned::from(255u32), 4).unwrap(), "ff");
/// assert_eq!(render_bit_groups(&BigUnsigned::from(8u32), 3).unwrap(), "10");
/// assert!(render_bit_groups(&BigUnsigned::from(8u32), 6).is_err());
/// ```
pub fn render_bit_groups(value: &BigUnsigned, bits: u32) -> Result<String, NumeralError> {
    if !(1..=5).contains(&bits) {
        tracing::debug!(bits, "unsupported bit group width");
        return Err(NumeralError::InvalidRadix(2u32.saturating_pow(bits)));
    }
    if value.is_zero() {
        return Ok("0".to_string());
    }
    let digits = value.bit_length().div_ceil(u64::from(bits));
    tracing::trace!(bits, digits, "rendering bit groups");

    Ok((0..digits)
        .rev()
        .map(|index| digit_char(group_at(value.limbs(), index * u64::from(bits), bits)))
        .collect())
}

/// The `width`-bit group starting at bit `start`
fn group_at(limbs: &[Limb], start: u64, width: u32) -> u32 {
    let index = (start / u64::from(LIMB_BITS)) as usize;
    let offset = (start % u64::from(LIMB_BITS)) as u32;
    let mut group = limbs.get(index).copied().unwrap_or(0) >> offset;
    if offset + width > LIMB_BITS {
        if let Some(&next) = limbs.get(index + 1) {
            group |= next << (LIMB_BITS - offset);
        }
    }
    let mask: Limb = ((1 as Limb) << width) - 1;
    (group & mask) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_at_within_limb() {
        let limbs = [0b1101_0110 as Limb];
        assert_eq!(group_at(&limbs, 0, 4), 0b0110);
        assert_eq!(group_at(&limbs, 4, 4), 0b1101);
        assert_eq!(group_at(&limbs, 8, 4), 0);
    }

    #[test]
    fn test_group_at_straddles_limbs() {
        // Top bit of limb 0 set, bottom two bits of limb 1 set.
        let limbs = [(1 as Limb) << (LIMB_BITS - 1), 0b11];
        assert_eq!(group_at(&limbs, u64::from(LIMB_BITS) - 1, 3), 0b111);
        assert_eq!(group_at(&limbs, u64::from(LIMB_BITS) - 2, 3), 0b110);
    }

    #[test]
    fn test_render_bit_groups() {
        let value = BigUnsigned::from(0o7654321u32);
        assert_eq!(render_bit_groups(&value, 3).unwrap(), "7654321");
        assert_eq!(render_bit_groups(&BigUnsigned::from(5u8), 1).unwrap(), "101");
        assert_eq!(render_bit_groups(&BigUnsigned::from(31u8), 5).unwrap(), "v");
        assert_eq!(render_bit_groups(&BigUnsigned::new(), 4).unwrap(), "0");
    }

    #[test]
    fn test_render_bit_groups_rejects_unsupported_width() {
        let value = BigUnsigned::from(255u32);
        assert_eq!(render_bit_groups(&value, 0), Err(NumeralError::InvalidRadix(1)));
        assert_eq!(render_bit_groups(&value, 6), Err(NumeralError::InvalidRadix(64)));
        assert_eq!(
            render_bit_groups(&BigUnsigned::new(), 6),
            Err(NumeralError::InvalidRadix(64))
        );
        assert!(render_bit_groups(&value, 40).is_err());
    }

    #[test]
    fn test_render_multi_limb_octal() {
        let value = BigUnsigned::from(u128::MAX);
        assert_eq!(render_bit_groups(&value, 3).unwrap(), format!("{:o}", u128::MAX));
        assert_eq!(render_bit_groups(&value, 4).unwrap(), format!("{:x}", u128::MAX));
    }
}
