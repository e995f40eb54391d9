#![no_main]
use huffman::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let packed = compress(data).unwrap();
    assert_eq!(decompress(&packed).unwrap(), data);
});
