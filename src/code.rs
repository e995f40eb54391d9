//! Prefix-code table generation.

use crate::tree::{HuffmanTree, Node};

/// Symbol-to-code assignments derived from root-to-leaf paths.
///
/// Codes are stored densely: 256 slots of bit sequences (values 0 and 1),
/// an empty slot meaning the symbol does not occur. No code is a prefix of
/// another, because distinct leaves never lie on the same root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Vec<u8>>,
}

impl CodeTable {
    /// Walk `tree` and record the path to every leaf: descending left
    /// appends a 0, descending right appends a 1.
    ///
    /// A tree that is a single leaf yields the one-bit code 0 for its
    /// symbol; an empty path would not survive transmission.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![Vec::new(); 256];
        let mut stack = vec![(tree.root(), Vec::new())];
        while let Some((id, prefix)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol } => {
                    codes[symbol as usize] = if prefix.is_empty() { vec![0] } else { prefix };
                }
                Node::Internal { left, right } => {
                    let mut left_prefix = prefix.clone();
                    left_prefix.push(0);
                    stack.push((left, left_prefix));

                    let mut right_prefix = prefix;
                    right_prefix.push(1);
                    stack.push((right, right_prefix));
                }
            }
        }
        Self { codes }
    }

    /// The code assigned to `symbol`, if it occurs in the tree.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        let code = self.codes[symbol as usize].as_slice();
        (!code.is_empty()).then_some(code)
    }

    /// Iterate `(symbol, code)` pairs for every symbol that has a code.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u8, code.as_slice()))
    }

    /// Number of symbols that received a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use proptest::prelude::*;

    fn table_for(data: &[u8]) -> CodeTable {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::scan(data)).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_most_frequent_symbol_gets_shortest_code() {
        let codes = table_for(&[65, 66, 67, 66]);
        let len_66 = codes.code(66).unwrap().len();
        assert!(len_66 <= codes.code(65).unwrap().len());
        assert!(len_66 <= codes.code(67).unwrap().len());
        assert_eq!(len_66, 1);
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn test_single_leaf_gets_code_zero() {
        let codes = table_for(&[5, 5, 5]);
        assert_eq!(codes.code(5), Some([0u8].as_slice()));
        assert_eq!(codes.len(), 1);
    }

    #[test]
    fn test_absent_symbol_has_no_code() {
        let codes = table_for(b"ab");
        assert_eq!(codes.code(b'z'), None);
    }

    #[test]
    fn test_sibling_codes_differ_in_last_bit() {
        let codes = table_for(b"ab");
        let mut lengths: Vec<usize> = codes.iter().map(|(_, code)| code.len()).collect();
        lengths.sort_unstable();
        assert_eq!(lengths, vec![1, 1]);
    }

    proptest! {
        #[test]
        fn prop_codes_are_prefix_free(
            input in prop::collection::vec(any::<u8>(), 1..512),
        ) {
            let codes = table_for(&input);
            let all: Vec<(u8, &[u8])> = codes.iter().collect();
            for (i, &(_, a)) in all.iter().enumerate() {
                for &(_, b) in &all[i + 1..] {
                    prop_assert!(!a.starts_with(b));
                    prop_assert!(!b.starts_with(a));
                }
            }
        }

        #[test]
        fn prop_every_input_symbol_has_a_code(
            input in prop::collection::vec(any::<u8>(), 1..512),
        ) {
            let codes = table_for(&input);
            for &byte in &input {
                prop_assert!(codes.code(byte).is_some());
            }
        }
    }
}
