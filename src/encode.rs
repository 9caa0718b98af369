// src/encode.rs
//! Writes a byte stream as a Huffman bitstream, terminated by the
//! end-of-stream codeword. The final byte_align pads with meaningless
//! bits the decoder never reads past the marker.

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::code::EncodeTable;
use crate::error::HuffError;
use crate::symbol::{sym_from_byte, SYM_EOF};

pub fn encode_stream(input: &[u8], table: &EncodeTable) -> Result<Vec<u8>, HuffError> {
    let mut output = Vec::new();
    {
        let mut w = BitWriter::endian(&mut output, BigEndian);
        for &byte in input {
            let sym = sym_from_byte(byte);
            let &(code, len) = table
                .get(&sym)
                .ok_or(HuffError::SymbolNotInTable(sym))?;
            w.write(len, code)?;
        }
        // Mandatory: the marker is the decoder's only end-of-payload signal.
        let &(code, len) = table
            .get(&SYM_EOF)
            .ok_or(HuffError::SymbolNotInTable(SYM_EOF))?;
        if len > 0 {
            w.write(len, code)?;
        }
        w.byte_align()?;
    }
    Ok(output)
}
