//! The compress/decompress pipeline over the on-disk format.
//!
//! Layout, byte-exact:
//!
//! | offset | length | meaning |
//! |--------|--------|---------|
//! | 0 | 1 | number of node records, max 255 |
//! | 1 | 4·n | flat node records `(l_type, l_data, r_type, r_data)` |
//! | 1+4n | 4 | original uncompressed size, u32 little-endian |
//! | 1+4n+4 | rest | bit-packed payload, right-zero-padded |
//!
//! The whole input is buffered; nothing is streamed, and no state survives
//! between calls. The format carries no checksum — it trusts its own header.

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::stream;
use crate::tree::HuffmanTree;
use crate::wire::{self, NODE_RECORD_LEN, SIZE_FIELD_LEN};

/// Compress `input` into a self-describing buffer.
///
/// # Errors
/// [`Error::EmptyInput`] when `input` has no bytes to build a tree from,
/// [`Error::InputTooLarge`] when its length does not fit the size field.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if u32::try_from(input.len()).is_err() {
        return Err(Error::InputTooLarge(input.len()));
    }

    let freq = FrequencyTable::scan(input);
    let tree = HuffmanTree::from_frequencies(&freq)?;
    let numbering = tree.number_nodes();
    let codes = CodeTable::from_tree(&tree);

    let records = wire::tree_to_bytes(&tree, &numbering);
    let payload = stream::pack(input, &codes)?;

    let mut out = Vec::with_capacity(1 + records.len() + SIZE_FIELD_LEN + payload.len());
    out.push((records.len() / NODE_RECORD_LEN) as u8);
    out.extend_from_slice(&records);
    out.extend_from_slice(&wire::size_to_bytes(input.len() as u32));
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decompress a buffer produced by [`compress`].
///
/// The tree is rebuilt through the general-list algorithm with the root at
/// the last record, which is where the postorder serializer always puts it.
///
/// # Errors
/// A header inconsistent with the buffer length, a record referencing a node
/// outside the list, or a payload with too few bits for the declared symbol
/// count.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let (&count_byte, rest) = input
        .split_first()
        .ok_or(Error::MalformedHeader("missing node count byte"))?;
    let record_count = count_byte as usize;
    if record_count == 0 {
        return Err(Error::MalformedHeader("zero node records"));
    }

    let records_len = record_count * NODE_RECORD_LEN;
    if rest.len() < records_len + SIZE_FIELD_LEN {
        return Err(Error::MalformedHeader("buffer shorter than declared header"));
    }
    let (record_bytes, rest) = rest.split_at(records_len);
    let (size_bytes, payload) = rest.split_at(SIZE_FIELD_LEN);

    let nodes = wire::bytes_to_nodes(record_bytes)?;
    let tree = wire::tree_from_nodes(&nodes, record_count - 1)?;
    let size = wire::bytes_to_size(size_bytes)?;
    stream::unpack(&tree, payload, size)
}
