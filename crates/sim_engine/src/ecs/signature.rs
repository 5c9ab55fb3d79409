//! Component signatures
//!
//! A signature is a fixed-width bit vector: one bit per registered component
//! type. Each living entity owns the signature describing the components
//! currently attached to it, and each system owns the immutable signature an
//! entity must cover before the system will act on it.

use bit_vec::BitVec;

/// Fixed-width bit vector over component type bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    bits: BitVec,
}

impl Signature {
    /// Create an all-zero signature with room for `width` component bits
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            bits: BitVec::from_elem(width, false),
        }
    }

    /// Number of component bits this signature can hold
    #[must_use]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Set the bit for a component type
    pub fn insert(&mut self, bit: usize) {
        debug_assert!(bit < self.bits.len(), "component bit out of signature range");
        self.bits.set(bit, true);
    }

    /// Clear the bit for a component type
    pub fn remove(&mut self, bit: usize) {
        debug_assert!(bit < self.bits.len(), "component bit out of signature range");
        self.bits.set(bit, false);
    }

    /// True if the bit for a component type is set
    #[must_use]
    pub fn test(&self, bit: usize) -> bool {
        self.bits.get(bit).unwrap_or(false)
    }

    /// Superset test: true if every bit set in `required` is also set here
    #[must_use]
    pub fn contains(&self, required: &Self) -> bool {
        debug_assert_eq!(self.width(), required.width(), "signature widths differ");
        required
            .bits
            .blocks()
            .zip(self.bits.blocks())
            .all(|(req, own)| own & req == req)
    }

    /// True if no bit is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// Clear every bit
    pub fn clear(&mut self) {
        self.bits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let signature = Signature::new(16);
        assert!(signature.is_empty());
        assert!(!signature.test(0));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut signature = Signature::new(16);
        signature.insert(3);
        assert!(signature.test(3));
        assert!(!signature.is_empty());

        signature.remove(3);
        assert!(!signature.test(3));
        assert!(signature.is_empty());
    }

    #[test]
    fn test_superset() {
        let mut entity = Signature::new(16);
        entity.insert(0);
        entity.insert(1);
        entity.insert(5);

        let mut required = Signature::new(16);
        required.insert(0);
        required.insert(5);
        assert!(entity.contains(&required));

        required.insert(7);
        assert!(!entity.contains(&required));
    }

    #[test]
    fn test_empty_required_is_subset_of_anything() {
        let entity = Signature::new(16);
        let required = Signature::new(16);
        assert!(entity.contains(&required));
    }

    #[test]
    fn test_clear() {
        let mut signature = Signature::new(16);
        signature.insert(2);
        signature.insert(9);
        signature.clear();
        assert!(signature.is_empty());
    }
}
