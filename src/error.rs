//! Crate-wide error type. Bit-stream failures convert from
//! std::io::Error so the codec propagates them with `?`.

use crate::symbol::Symbol;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("frequency table has no end-of-stream marker")]
    MissingEof,

    #[error("header truncated: {0}")]
    HeaderTruncated(&'static str),

    #[error("invalid header field: {0}")]
    HeaderInvalid(&'static str),

    #[error("symbol {0} missing from code table")]
    SymbolNotInTable(Symbol),

    #[error("no matching codeword after {0} bits")]
    InvalidCode(u32),
}
