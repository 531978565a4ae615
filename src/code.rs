use std::collections::BTreeMap;

use log::debug;

use crate::{
    frequency::Frequencies,
    node::{Node, NodeKind},
};

/// Code given to the only symbol of a one-symbol alphabet.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Bit-string code per symbol, `'0'` for a left branch and `'1'` for a right one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, String>,
}

impl CodeTable {
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        match root.kind() {
            NodeKind::Leaf(symbol) => {
                codes.insert(*symbol, SINGLE_SYMBOL_CODE.to_string());
            }
            NodeKind::Internal(..) => fill(root, String::new(), &mut codes),
        }
        debug!("assigned codes to {} symbols", codes.len());
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // after sorting, a prefix always sorts directly before some word it prefixes
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Sum of `frequency * code length` over the symbols in `freqs`.
    pub fn weighted_length(&self, freqs: &Frequencies) -> u64 {
        freqs
            .iter()
            .map(|(symbol, freq)| freq * self.get(symbol).map_or(0, str::len) as u64)
            .sum()
    }
}

fn fill(node: &Node, code: String, codes: &mut BTreeMap<u8, String>) {
    match node.kind() {
        NodeKind::Leaf(symbol) => {
            let _ = codes.insert(*symbol, code);
        }
        NodeKind::Internal(left, right) => {
            fill(left, format!("{}0", code), codes);
            fill(right, format!("{}1", code), codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CodeTable;
    use crate::{frequency::Frequencies, node::Node, tree::build_tree};

    fn table_for(input: &[u8]) -> (Frequencies, CodeTable) {
        let freqs = Frequencies::from_bytes(input);
        let root = build_tree(freqs.to_heap()).unwrap();
        (freqs, CodeTable::from_tree(&root))
    }

    #[test]
    fn left_is_zero_right_is_one() {
        let root = Node::new_internal(
            Node::new_leaf(b'a', 3),
            Node::new_internal(Node::new_leaf(b'c', 1), Node::new_leaf(b'b', 2)),
        );
        let table = CodeTable::from_tree(&root);
        assert_eq!(table.get(b'a'), Some("0"));
        assert_eq!(table.get(b'c'), Some("10"));
        assert_eq!(table.get(b'b'), Some("11"));
        assert_eq!(table.get(b'z'), None);
    }

    #[test]
    fn three_symbol_example() {
        let (freqs, table) = table_for(b"aaaaabbbcc");
        assert_eq!(table.len(), 3);
        assert!(table.is_prefix_free());
        assert_eq!(table.get(b'a').map(str::len), Some(1));
        assert_eq!(table.get(b'b').map(str::len), Some(2));
        assert_eq!(table.get(b'c').map(str::len), Some(2));
        // 5*1 + 3*2 + 2*2
        assert_eq!(table.weighted_length(&freqs), 15);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let (freqs, table) = table_for(b"zzzz");
        assert_eq!(table.get(b'z'), Some("0"));
        assert_eq!(table.weighted_length(&freqs), 4);
    }

    #[test]
    fn keys_are_exactly_the_scanned_symbols() {
        let (freqs, table) = table_for(b"mississippi river");
        let scanned: Vec<u8> = freqs.iter().map(|(s, _)| s).collect();
        let coded: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(scanned, coded);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn detects_prefix_violation() {
        let root = Node::new_internal(Node::new_leaf(b'a', 1), Node::new_leaf(b'b', 1));
        let mut table = CodeTable::from_tree(&root);
        assert!(table.is_prefix_free());
        table.codes.insert(b'c', "01".to_string());
        assert!(!table.is_prefix_free());
    }
}
