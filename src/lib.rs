// src/lib.rs
//! huffpak — lossless whole-file Huffman compression.
//!
//! Compressed file layout:
//!   Header:  decimal count of distinct non-marker symbols, one space,
//!            then per symbol: 1 raw byte + decimal frequency + one space.
//!            The end-of-stream marker is never written (count always 1).
//!   Payload: Huffman bitstream of the input bytes, terminated by the
//!            marker's codeword, padded to a byte boundary with bits the
//!            decoder ignores.
//!
//! Two-pass scheme: the whole frequency table is known before any
//! encoding begins, and both sides rebuild the identical tree from the
//! identical table.

pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod header;
pub mod symbol;
pub mod tree;

pub use error::HuffError;

use crate::code::{decode_table, encode_table};
use crate::decode::decode_stream;
use crate::encode::encode_stream;
use crate::freq::count_frequencies;
use crate::header::{read_header, write_header};
use crate::tree::build_tree;

/// Compress an input: count frequencies, build the tree, write the
/// header, then make the second pass over the input to encode it.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, HuffError> {
    let freq = count_frequencies(input);
    let root = build_tree(&freq)?;
    let table = encode_table(&root);

    let mut output = write_header(&freq)?;
    output.extend_from_slice(&encode_stream(input, &table)?);
    Ok(output)
}

/// Decompress a file produced by [`compress`]: read the header, rebuild
/// the same tree from it, and walk the payload bit by bit until the
/// end-of-stream marker.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, HuffError> {
    let (freq, header_len) = read_header(input)?;
    let root = build_tree(&freq)?;
    let dtable = decode_table(&encode_table(&root));
    decode_stream(&input[header_len..], &dtable)
}
