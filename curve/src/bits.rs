//! Bit-level helpers for scalar arithmetic.

use num_bigint::BigUint;

/// Iterates over the bits of `n` from least to most significant.
///
/// The iterator is empty for `n = 0` and ends at the highest set bit
/// otherwise. Double-and-add consumes scalars in exactly this order.
pub fn lsb_to_msb(n: &BigUint) -> impl Iterator<Item = bool> + '_ {
    (0..n.bits()).map(move |i| n.bit(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_no_bits() {
        assert_eq!(lsb_to_msb(&BigUint::from(0u32)).count(), 0);
    }

    #[test]
    fn test_bit_order_is_lsb_first() {
        let bits: Vec<bool> = lsb_to_msb(&BigUint::from(6u32)).collect();
        assert_eq!(bits, [false, true, true]);

        let bits: Vec<bool> = lsb_to_msb(&BigUint::from(1u32)).collect();
        assert_eq!(bits, [true]);
    }

    #[test]
    fn test_ends_at_highest_set_bit() {
        assert_eq!(lsb_to_msb(&BigUint::from(1u32 << 10)).count(), 11);
    }
}
