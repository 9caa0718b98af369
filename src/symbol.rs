//! Extended symbol vocabulary — known to both encoder and decoder.
//! A symbol is a byte value (0..=255) or the reserved end-of-stream
//! marker, so it needs a range wider than u8. Single source of truth
//! for the symbol space.

pub type Symbol = u32;

/// End-of-stream marker. Never a real input byte; always present in a
/// frequency table with count 1, so every encoding tree has a codeword
/// that marks the logical end of the payload independent of byte
/// padding.
pub const SYM_EOF: Symbol = 256;

/// Bytes plus the end-of-stream marker.
pub const SYMBOL_COUNT: usize = 257;

#[inline]
pub fn sym_from_byte(byte: u8) -> Symbol {
    byte as Symbol
}

#[inline]
pub fn byte_from_sym(sym: Symbol) -> u8 {
    debug_assert!(sym < 256, "symbol {} is not a byte", sym);
    sym as u8
}
