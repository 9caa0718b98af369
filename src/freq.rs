// src/freq.rs
//! Frequency counting — first pass of the two-pass scheme.

use std::collections::HashMap;

use crate::symbol::{sym_from_byte, Symbol, SYM_EOF};

pub type FreqTable = HashMap<Symbol, u64>;

/// Tally every byte of the input, then set the end-of-stream marker's
/// count to exactly 1 (overwriting — it is never a real input byte).
/// An empty input yields a table holding only the marker.
pub fn count_frequencies(input: &[u8]) -> FreqTable {
    let mut freq: FreqTable = HashMap::new();
    for &byte in input {
        *freq.entry(sym_from_byte(byte)).or_insert(0) += 1;
    }
    freq.insert(SYM_EOF, 1);
    freq
}
