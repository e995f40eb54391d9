//! Packing symbols into code bits and back.

use crate::bits::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Pack every symbol of `data` as its code, zero-padding the final byte.
///
/// Empty `data` yields zero bytes, whatever the table holds.
///
/// # Errors
/// [`Error::MissingCode`] if a symbol has no entry in `codes`.
pub fn pack(data: &[u8], codes: &CodeTable) -> Result<Vec<u8>> {
    let mut writer = BitWriter::new();
    for &symbol in data {
        let code = codes.code(symbol).ok_or(Error::MissingCode(symbol))?;
        writer.push_bits(code);
    }
    Ok(writer.finish())
}

/// Decode exactly `size` symbols from `packed` by walking `tree`.
///
/// Each symbol is one root-to-leaf walk: a 0 bit descends left, a 1 bit
/// descends right. Trailing padding bits are never examined — stopping at
/// `size` symbols is the only thing that distinguishes real trailing zero
/// bits from padding, which is why the size field is mandatory.
///
/// # Errors
/// [`Error::TruncatedPayload`] if the bits run out before `size` symbols.
pub fn unpack(tree: &HuffmanTree, packed: &[u8], size: u32) -> Result<Vec<u8>> {
    let size = size as usize;
    let mut output = Vec::with_capacity(size);
    let mut bits = BitReader::new(packed);

    while output.len() < size {
        let mut cursor = tree.root();
        loop {
            match tree.node(cursor) {
                Node::Leaf { symbol } => {
                    // A tree that is a single leaf consumes one bit per
                    // symbol, the mirror image of its one-bit code.
                    if cursor == tree.root() && bits.next().is_none() {
                        return Err(Error::TruncatedPayload {
                            decoded: output.len(),
                            expected: size,
                        });
                    }
                    output.push(symbol);
                    break;
                }
                Node::Internal { left, right } => {
                    let Some(bit) = bits.next() else {
                        return Err(Error::TruncatedPayload {
                            decoded: output.len(),
                            expected: size,
                        });
                    };
                    cursor = if bit == 0 { left } else { right };
                }
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn pipeline(data: &[u8]) -> (HuffmanTree, CodeTable) {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::scan(data)).unwrap();
        let codes = CodeTable::from_tree(&tree);
        (tree, codes)
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let data = b"abracadabra";
        let (tree, codes) = pipeline(data);
        let packed = pack(data, &codes).unwrap();
        assert_eq!(unpack(&tree, &packed, data.len() as u32).unwrap(), data);
    }

    #[test]
    fn test_single_symbol_packs_to_zero_byte() {
        let data = [5u8, 5, 5];
        let (tree, codes) = pipeline(&data);
        let packed = pack(&data, &codes).unwrap();
        // Three zero bits plus five bits of padding.
        assert_eq!(packed, vec![0b0000_0000]);
        assert_eq!(unpack(&tree, &packed, 3).unwrap(), data);
    }

    #[test]
    fn test_empty_input_packs_to_nothing() {
        let (_, codes) = pipeline(b"xy");
        assert!(pack(&[], &codes).unwrap().is_empty());
    }

    #[test]
    fn test_unpack_zero_symbols_reads_nothing() {
        let (tree, _) = pipeline(b"xy");
        assert!(unpack(&tree, &[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_padding_is_never_decoded() {
        // Two symbols with one-bit codes: 8 packed bits hold at most 8
        // symbols, but size caps decoding below that.
        let data = b"ababab";
        let (tree, codes) = pipeline(data);
        let packed = pack(data, &codes).unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(unpack(&tree, &packed, 6).unwrap(), data);
    }

    #[test]
    fn test_truncated_payload_is_detected() {
        let data = b"abracadabra";
        let (tree, codes) = pipeline(data);
        let packed = pack(data, &codes).unwrap();
        let err = unpack(&tree, &packed[..packed.len() - 1], data.len() as u32);
        assert!(matches!(err, Err(Error::TruncatedPayload { .. })));
    }

    #[test]
    fn test_missing_code_is_detected() {
        let (_, codes) = pipeline(b"ab");
        assert!(matches!(
            pack(b"abz", &codes),
            Err(Error::MissingCode(b'z'))
        ));
    }
}
