#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Attacker-controlled bytes must produce Ok or a typed error, never a
    // panic.
    let _ = lzw::decode(8, data);
});
