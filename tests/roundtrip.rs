use huffc::{container, decode, encode};
use proptest::prelude::*;

#[test]
fn multiline_sample_roundtrips_through_the_container() {
    let text = "No man is an island,\nEntire of itself;\nEvery man is a piece of the continent,\nA part of the main.\n";
    let encoded = encode(text).unwrap();
    let bytes = container::to_bytes(&encoded).unwrap();

    let restored = container::from_bytes(&bytes).unwrap();
    let decoded = decode(&restored.codes, &restored.payload, restored.bit_len).unwrap();
    assert_eq!(decoded, text);
}

proptest! {
    #[test]
    fn encode_decode_roundtrip(text in ".*") {
        let encoded = encode(&text).unwrap();
        let decoded = decode(&encoded.codes, &encoded.payload, encoded.bit_len).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn container_roundtrip(text in ".*") {
        let encoded = encode(&text).unwrap();
        let bytes = container::to_bytes(&encoded).unwrap();
        let restored = container::from_bytes(&bytes).unwrap();
        let decoded = decode(&restored.codes, &restored.payload, restored.bit_len).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn produced_codes_are_prefix_free(text in ".+") {
        let encoded = encode(&text).unwrap();
        for (a, code_a) in &encoded.codes {
            for (b, code_b) in &encoded.codes {
                if a != b {
                    prop_assert!(!code_b.starts_with(code_a));
                }
            }
        }
    }
}
