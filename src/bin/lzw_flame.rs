use lzw::{decode, encode};

fn main() {
    let phrase = b"lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
    let input: Vec<u16> = (0..10_000).map(|i| phrase[i % phrase.len()] as u16).collect();

    for _ in 0..1000 {
        let encoded = encode(8, &input).unwrap();
        let decoded = decode(8, &encoded).unwrap();
        assert_eq!(decoded.len(), input.len());
    }
}
