use lzw::bits::BitReader;
use lzw::dict::MAX_WIDTH;
use lzw::{decode, encode};
use proptest::prelude::*;

/// Walk an encoded stream code by code, tracking the read width the same way
/// a decoder does, and count Clear Codes.
fn count_clear_codes(encoded: &[u8], root_size: u8) -> usize {
    let clear = 1u16 << root_size;
    let end = clear + 1;

    let mut reader = BitReader::new(encoded);
    let mut width = root_size + 1;
    let mut next = clear as usize + 2;
    let mut fresh = true;
    let mut clears = 0;

    loop {
        let code = reader.read(width).unwrap();
        if code == clear {
            clears += 1;
            width = root_size + 1;
            next = clear as usize + 2;
            fresh = true;
        } else if code == end {
            return clears;
        } else if fresh {
            fresh = false;
        } else {
            next += 1;
            if next == (1usize << width) - 1 && width < MAX_WIDTH {
                width += 1;
            }
        }
    }
}

#[test]
fn empty_input_is_only_control_codes() {
    let encoded = encode(8, &[]).unwrap();
    assert_eq!(encoded.len(), 3); // two 9-bit codes
    assert_eq!(count_clear_codes(&encoded, 8), 1);
    assert!(decode(8, &encoded).unwrap().is_empty());
}

#[test]
fn encoder_restarts_after_filling_the_table() {
    let mut x = 0x2545_F491u32;
    let input: Vec<u16> = (0..16_000)
        .map(|_| {
            x = x.wrapping_mul(2_654_435_761).wrapping_add(1_013_904_223);
            (x >> 24) as u16
        })
        .collect();

    let encoded = encode(8, &input).unwrap();
    assert_eq!(decode(8, &encoded).unwrap(), input);
    // The leading Clear Code plus at least one mid-stream restart.
    assert!(count_clear_codes(&encoded, 8) >= 2);
}

proptest! {
    #[test]
    fn roundtrip_uniform_symbols(
        root_size in 2u8..=8,
        raw in prop::collection::vec(0u16..1024, 0..500),
    ) {
        let alphabet = 1u16 << root_size;
        let input: Vec<u16> = raw.into_iter().map(|s| s % alphabet).collect();

        let encoded = encode(root_size, &input).unwrap();
        prop_assert_eq!(decode(root_size, &encoded).unwrap(), input);
    }

    #[test]
    fn roundtrip_run_heavy_symbols(
        root_size in 2u8..=8,
        runs in prop::collection::vec((0u16..1024, 1usize..40), 0..120),
    ) {
        let alphabet = 1u16 << root_size;
        let input: Vec<u16> = runs
            .iter()
            .flat_map(|&(value, len)| std::iter::repeat(value % alphabet).take(len))
            .collect();

        let encoded = encode(root_size, &input).unwrap();
        prop_assert_eq!(decode(root_size, &encoded).unwrap(), input);
    }

    #[test]
    fn truncation_is_always_detected(
        raw in prop::collection::vec(0u16..256, 0..300),
    ) {
        // The last byte always carries bits of End-of-Information; cutting it
        // must yield a typed error, not a panic or a silent partial result.
        let encoded = encode(8, &raw).unwrap();
        let cut = &encoded[..encoded.len() - 1];
        prop_assert!(matches!(decode(8, cut), Err(lzw::Error::TruncatedStream)));
    }
}
