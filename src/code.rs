// src/code.rs
//! Derives the symbol↔codeword tables from an encoding tree.
//!
//! Codes are built MSB-first by a depth-first walk, `zero` branch
//! before `one`, and stored as (code, length) pairs. Only leaves are
//! recorded, so the table is prefix-free by construction. A lone-leaf
//! root gets the empty codeword (0, 0).

use std::collections::HashMap;

use crate::symbol::Symbol;
use crate::tree::Node;

pub type EncodeTable = HashMap<Symbol, (u32, u32)>;
pub type DecodeTable = HashMap<(u32, u32), Symbol>;

pub fn encode_table(root: &Node) -> EncodeTable {
    let mut table = EncodeTable::new();
    walk(root, 0, 0, &mut table);
    table
}

fn walk(node: &Node, code: u32, len: u32, table: &mut EncodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, (code, len));
        }
        Node::Internal { zero, one, .. } => {
            walk(zero, code << 1, len + 1, table);
            walk(one, (code << 1) | 1, len + 1, table);
        }
    }
}

pub fn decode_table(enc: &EncodeTable) -> DecodeTable {
    enc.iter().map(|(&sym, &(code, len))| ((code, len), sym)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count_frequencies;
    use crate::symbol::SYM_EOF;
    use crate::tree::build_tree;

    fn is_prefix(a: (u32, u32), b: (u32, u32)) -> bool {
        let (code_a, len_a) = a;
        let (code_b, len_b) = b;
        len_a <= len_b && (code_b >> (len_b - len_a)) == code_a
    }

    #[test]
    fn no_codeword_prefixes_another() {
        let root = build_tree(&count_frequencies(b"the quick brown fox jumps over the lazy dog")).unwrap();
        let table = encode_table(&root);
        let codes: Vec<(u32, u32)> = table.values().copied().collect();
        for (i, &a) in codes.iter().enumerate() {
            for &b in &codes[i + 1..] {
                assert!(!is_prefix(a, b) && !is_prefix(b, a), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn lone_leaf_gets_the_empty_codeword() {
        let root = build_tree(&count_frequencies(b"")).unwrap();
        let table = encode_table(&root);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&SYM_EOF), Some(&(0, 0)));
    }

    #[test]
    fn decode_table_inverts_encode_table() {
        let root = build_tree(&count_frequencies(b"huffpak")).unwrap();
        let enc = encode_table(&root);
        let dec = decode_table(&enc);
        assert_eq!(enc.len(), dec.len());
        for (&sym, &cw) in &enc {
            assert_eq!(dec.get(&cw), Some(&sym));
        }
    }

    #[test]
    fn two_leaf_tree_uses_one_bit_codes() {
        // Single repeated byte: {x: n, EOF: 1} — both leaves hang off the root.
        let root = build_tree(&count_frequencies(b"xxxx")).unwrap();
        let table = encode_table(&root);
        assert_eq!(table.len(), 2);
        for &(_, len) in table.values() {
            assert_eq!(len, 1);
        }
    }
}
