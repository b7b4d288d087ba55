#![no_main]
use libfuzzer_sys::fuzz_target;
use lzw::{decode, encode};

fuzz_target!(|data: (u8, Vec<u8>)| {
    let (root, raw) = data;
    let root_size = 2 + (root % 9); // 2 to 10
    let alphabet = 1u16 << root_size;

    let input: Vec<u16> = raw.iter().map(|&b| b as u16 % alphabet).collect();

    let encoded = encode(root_size, &input).unwrap();
    let decoded = decode(root_size, &encoded).unwrap();
    assert_eq!(input, decoded);
});
