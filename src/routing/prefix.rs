//! Address prefixes and bit-level traversal.
//!
//! # Responsibilities
//! - Represent an IPv6 prefix as (128-bit address, length)
//! - Expose the prefix as a consumable MSB-first bit sequence
//!
//! # Design Decisions
//! - Value semantics: the trie consumes an owned copy, callers keep theirs
//! - Exhaustion is signalled with `None`, not an error (it is the designed
//!   end-of-sequence marker)
//! - Bits beyond `length` are carried but never observed

use std::fmt;
use std::net::Ipv6Addr;

/// A single address bit, used to index the two trie child slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// Child-slot index for this bit value.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// An IPv6 address prefix: a 128-bit address of which only the top
/// `length` bits are meaningful.
///
/// Doubles as the bit cursor used to walk the trie: [`pop_bit`] consumes
/// the current most-significant bit and shifts the rest up.
///
/// [`pop_bit`]: AddressPrefix::pop_bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPrefix {
    address: u128,
    length: u8,
}

impl AddressPrefix {
    /// Maximum prefix length for an IPv6 address.
    pub const MAX_LENGTH: u8 = 128;

    const HIGH_BIT: u128 = 1 << 127;

    /// Create a prefix from a raw address and length.
    ///
    /// # Panics
    /// Panics if `length > 128`.
    pub fn new(address: u128, length: u8) -> Self {
        assert!(
            length <= Self::MAX_LENGTH,
            "prefix length {length} exceeds {}",
            Self::MAX_LENGTH
        );
        Self { address, length }
    }

    /// The raw 128-bit address (top `length` bits meaningful).
    pub fn address(&self) -> u128 {
        self.address
    }

    /// Number of bits remaining in the prefix.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Consume the current most-significant bit.
    ///
    /// Returns `None` once all `length` bits have been consumed; the cursor
    /// is then exhausted and further calls keep returning `None`.
    pub fn pop_bit(&mut self) -> Option<Bit> {
        if self.length == 0 {
            return None;
        }
        self.length -= 1;

        let bit = if self.address & Self::HIGH_BIT != 0 {
            Bit::One
        } else {
            Bit::Zero
        };
        self.address <<= 1;
        Some(bit)
    }
}

impl fmt::Display for AddressPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv6Addr::from(self.address), self.length)
    }
}
