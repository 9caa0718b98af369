// src/decode.rs
//! Reads a Huffman bitstream back into bytes.
//!
//! Bits accumulate into a growing (code, length) pair looked up in the
//! decode table; a hit emits the byte and resets, the end-of-stream
//! marker terminates. There is no length field — the marker is the only
//! terminator, and alignment padding after it is never read.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::code::DecodeTable;
use crate::error::HuffError;
use crate::symbol::{byte_from_sym, SYM_EOF};

pub fn decode_stream(input: &[u8], dtable: &DecodeTable) -> Result<Vec<u8>, HuffError> {
    // Lone-leaf tree: the empty codeword is the marker, so the payload
    // represents zero bytes and no bits are consumed at all.
    if let Some(&sym) = dtable.get(&(0, 0)) {
        debug_assert_eq!(sym, SYM_EOF);
        return Ok(Vec::new());
    }

    let max_len = dtable.keys().map(|&(_, len)| len).max().unwrap_or(32);
    let mut output = Vec::new();
    let mut r = BitReader::endian(Cursor::new(input), BigEndian);

    loop {
        let sym = read_symbol(&mut r, dtable, max_len)?;
        if sym == SYM_EOF {
            return Ok(output);
        }
        output.push(byte_from_sym(sym));
    }
}

fn read_symbol<R: std::io::Read>(
    r: &mut BitReader<R, BigEndian>,
    dtable: &DecodeTable,
    max_len: u32,
) -> Result<u32, HuffError> {
    let mut code: u32 = 0;
    for len in 1..=max_len {
        let bit = r.read::<u32>(1)?;
        code = (code << 1) | bit;
        if let Some(&sym) = dtable.get(&(code, len)) {
            return Ok(sym);
        }
    }
    Err(HuffError::InvalidCode(max_len))
}
