#![no_main]
use huffman::decompress;
use libfuzzer_sys::fuzz_target;

// The decoder must reject garbage with an error, never a panic.
fuzz_target!(|data: &[u8]| {
    let _ = decompress(data);
});
