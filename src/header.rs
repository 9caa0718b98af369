// src/header.rs
//! Frequency-table header at the front of a compressed file.
//!
//! Layout: decimal count of distinct non-marker symbols, one space,
//! then per symbol (ascending): 1 raw byte + decimal frequency + one
//! space. The end-of-stream marker is never written — its count is
//! always 1 and is re-inserted on read.
//!
//! Raw symbol bytes are read with a dedicated single-byte read, never
//! whitespace-tokenised, so a symbol that happens to be b' ' or b'\n'
//! is safe. The read order (count → skip one byte → [byte, decimal,
//! skip one byte] × N) must stay exactly as is for compatibility.

use crate::error::HuffError;
use crate::freq::FreqTable;
use crate::symbol::{Symbol, SYM_EOF};

pub fn write_header(freq: &FreqTable) -> Result<Vec<u8>, HuffError> {
    if !freq.contains_key(&SYM_EOF) {
        return Err(HuffError::MissingEof);
    }

    let mut entries: Vec<(Symbol, u64)> = freq
        .iter()
        .filter(|&(&sym, _)| sym != SYM_EOF)
        .map(|(&sym, &count)| (sym, count))
        .collect();
    entries.sort_by_key(|&(sym, _)| sym);

    let mut out = Vec::new();
    out.extend_from_slice(entries.len().to_string().as_bytes());
    out.push(b' ');
    for (sym, count) in entries {
        out.push(sym as u8);
        out.extend_from_slice(count.to_string().as_bytes());
        out.push(b' ');
    }
    Ok(out)
}

/// Parses the header and returns the rebuilt table plus the number of
/// bytes consumed, so the caller can locate the payload.
pub fn read_header(data: &[u8]) -> Result<(FreqTable, usize), HuffError> {
    let mut pos = 0usize;
    let count = read_decimal(data, &mut pos)? as usize;
    skip_separator(data, &mut pos)?;

    let mut freq = FreqTable::new();
    for _ in 0..count {
        let sym = *data
            .get(pos)
            .ok_or(HuffError::HeaderTruncated("symbol byte"))? as Symbol;
        pos += 1;
        let frequency = read_decimal(data, &mut pos)?;
        skip_separator(data, &mut pos)?;
        freq.insert(sym, frequency);
    }

    freq.insert(SYM_EOF, 1);
    Ok((freq, pos))
}

fn read_decimal(data: &[u8], pos: &mut usize) -> Result<u64, HuffError> {
    let start = *pos;
    let mut value: u64 = 0;
    while let Some(&b) = data.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u64))
            .ok_or(HuffError::HeaderInvalid("decimal overflow"))?;
        *pos += 1;
    }
    if *pos == start {
        return Err(HuffError::HeaderInvalid("expected a decimal field"));
    }
    Ok(value)
}

// One separator byte follows every decimal field. Its value is not
// checked, matching the original format's skip-one-character read.
fn skip_separator(data: &[u8], pos: &mut usize) -> Result<(), HuffError> {
    if *pos >= data.len() {
        return Err(HuffError::HeaderTruncated("separator"));
    }
    *pos += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count_frequencies;

    #[test]
    fn header_round_trips() {
        let freq = count_frequencies(b"abracadabra");
        let bytes = write_header(&freq).unwrap();
        let (read, consumed) = read_header(&bytes).unwrap();
        assert_eq!(read, freq);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn empty_input_header_is_zero_and_a_space() {
        let freq = count_frequencies(b"");
        assert_eq!(write_header(&freq).unwrap(), b"0 ");
    }

    #[test]
    fn concrete_layout_for_aaab() {
        // Symbols in ascending order: 'a' then 'b'; the marker is omitted.
        let freq = count_frequencies(b"aaab");
        assert_eq!(write_header(&freq).unwrap(), b"2 a3 b1 ");
    }

    #[test]
    fn whitespace_symbol_bytes_survive() {
        let freq = count_frequencies(b"  \n\n\n ");
        let bytes = write_header(&freq).unwrap();
        let (read, _) = read_header(&bytes).unwrap();
        assert_eq!(read, freq);
    }

    #[test]
    fn declared_count_past_the_data_is_fatal() {
        assert!(matches!(
            read_header(b"3 a1 "),
            Err(HuffError::HeaderTruncated(_))
        ));
    }

    #[test]
    fn missing_decimal_field_is_fatal() {
        assert!(matches!(
            read_header(b"1 ax "),
            Err(HuffError::HeaderInvalid(_))
        ));
    }

    #[test]
    fn missing_marker_refuses_to_write() {
        let mut freq = FreqTable::new();
        freq.insert(b'a' as Symbol, 3);
        assert!(matches!(write_header(&freq), Err(HuffError::MissingEof)));
    }
}
