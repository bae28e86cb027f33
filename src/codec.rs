use std::collections::HashMap;

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::tree::{CodeMap, Tree};

/// Output of [`encode`]: the per-run code table plus the packed payload and
/// the number of meaningful bits in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    pub codes: CodeMap,
    pub payload: Vec<u8>,
    pub bit_len: u64,
}

/// Count symbol occurrences, one entry per distinct character.
pub fn frequencies(text: &str) -> HashMap<char, u64> {
    let mut freq = HashMap::new();
    for ch in text.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}

/// Compress `text`: count frequencies, build the tree, assign codes, then
/// stream each symbol's code through a bit writer in input order.
pub fn encode(text: &str) -> Result<Encoded> {
    let freq = frequencies(text);
    let Some(tree) = Tree::from_frequencies(&freq) else {
        // Empty input: nothing to encode.
        return Ok(Encoded {
            codes: CodeMap::new(),
            payload: Vec::new(),
            bit_len: 0,
        });
    };
    let codes = tree.assign_codes();

    let mut writer = BitWriter::new(Vec::new());
    let mut bit_len = 0u64;
    for ch in text.chars() {
        // Every input character received a code during assignment.
        let code = &codes[&ch];
        for &bit in code {
            writer.write_bit(bit as u8)?;
        }
        bit_len += code.len() as u64;
    }
    let payload = writer.finish()?;

    Ok(Encoded {
        codes,
        payload,
        bit_len,
    })
}

/// Decompress a payload: rebuild the tree from the code table, then walk it
/// one bit at a time, emitting a symbol and resetting to the root at each
/// leaf. Exactly `bit_len` bits are consumed, so the final byte's zero
/// padding is never interpreted as data.
pub fn decode(codes: &CodeMap, payload: &[u8], bit_len: u64) -> Result<String> {
    let Some(tree) = Tree::from_codes(codes) else {
        return if bit_len == 0 && payload.is_empty() {
            Ok(String::new())
        } else {
            Err(Error::CorruptPayload)
        };
    };
    let root = tree.root().ok_or(Error::CorruptPayload)?;

    let mut reader = BitReader::new(payload);
    let mut out = String::new();
    let mut current = root;
    for _ in 0..bit_len {
        let bit = reader.read_bit()?.ok_or(Error::CorruptPayload)?;
        current = tree.child(current, bit).ok_or(Error::CorruptPayload)?;
        if tree.is_leaf(current) {
            out.push(tree.node(current).symbol.ok_or(Error::CorruptPayload)?);
            current = root;
        }
    }
    if current != root {
        // The meaningful bits ran out mid-symbol.
        return Err(Error::CorruptPayload);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_plain_text() {
        let text = "it was the best of times, it was the worst of times";
        let encoded = encode(text).unwrap();
        assert_eq!(decode(&encoded.codes, &encoded.payload, encoded.bit_len).unwrap(), text);
    }

    #[test]
    fn roundtrip_multibyte_characters() {
        let text = "héllo wörld ☃ĸæ";
        let encoded = encode(text).unwrap();
        assert_eq!(decode(&encoded.codes, &encoded.payload, encoded.bit_len).unwrap(), text);
    }

    #[test]
    fn empty_input_yields_empty_table_and_payload() {
        let encoded = encode("").unwrap();
        assert!(encoded.codes.is_empty());
        assert!(encoded.payload.is_empty());
        assert_eq!(encoded.bit_len, 0);
        assert_eq!(decode(&encoded.codes, &encoded.payload, encoded.bit_len).unwrap(), "");
    }

    #[test]
    fn single_distinct_symbol_roundtrips() {
        let encoded = encode("aaaa").unwrap();
        assert_eq!(encoded.codes.len(), 1);
        assert_eq!(encoded.codes[&'a'].len(), 1);
        assert_eq!(encoded.bit_len, 4);
        assert_eq!(encoded.payload.len(), 1);
        assert_eq!(decode(&encoded.codes, &encoded.payload, encoded.bit_len).unwrap(), "aaaa");
    }

    #[test]
    fn skewed_distribution_favors_the_frequent_symbol() {
        let encoded = encode("aaaaaaaab").unwrap();
        assert!(encoded.codes[&'a'].len() <= encoded.codes[&'b'].len());
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let encoded = encode("some reasonably long sample input").unwrap();
        let truncated = &encoded.payload[..encoded.payload.len() - 1];
        assert!(matches!(
            decode(&encoded.codes, truncated, encoded.bit_len),
            Err(Error::CorruptPayload)
        ));
    }

    #[test]
    fn walk_off_the_tree_is_rejected() {
        // 'a' is the only symbol and owns the code "1"; a leading 0 bit has
        // nowhere to go.
        let encoded = encode("aa").unwrap();
        assert!(matches!(
            decode(&encoded.codes, &[0b0100_0000], 2),
            Err(Error::CorruptPayload)
        ));
    }

    #[test]
    fn payload_without_a_table_is_rejected() {
        assert!(matches!(
            decode(&CodeMap::new(), &[0b1010_0000], 4),
            Err(Error::CorruptPayload)
        ));
    }
}
