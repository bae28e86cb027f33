use serde::{Deserialize, Serialize};

use crate::codec::Encoded;
use crate::error::{Error, Result};
use crate::tree::CodeMap;

/// Everything the decoder needs ahead of the payload bits.
#[derive(Serialize, Deserialize)]
struct Header {
    codes: CodeMap,
    bit_len: u64,
}

/// Frame an encode result as `[u32 LE header length][bincode header][payload]`.
pub fn to_bytes(encoded: &Encoded) -> Result<Vec<u8>> {
    let header = Header {
        codes: encoded.codes.clone(),
        bit_len: encoded.bit_len,
    };
    let header_bytes = bincode::serialize(&header).map_err(|e| Error::Table(e.to_string()))?;

    let mut out = Vec::with_capacity(4 + header_bytes.len() + encoded.payload.len());
    out.extend_from_slice(&(header_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&header_bytes);
    out.extend_from_slice(&encoded.payload);
    Ok(out)
}

/// Split a container back into its code table, bit count, and payload.
pub fn from_bytes(data: &[u8]) -> Result<Encoded> {
    let prefix: [u8; 4] = data
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| Error::Table("container shorter than its length prefix".into()))?;
    let header_end = 4 + u32::from_le_bytes(prefix) as usize;

    let header_bytes = data
        .get(4..header_end)
        .ok_or_else(|| Error::Table("truncated code table".into()))?;
    let header: Header =
        bincode::deserialize(header_bytes).map_err(|e| Error::Table(e.to_string()))?;

    Ok(Encoded {
        codes: header.codes,
        bit_len: header.bit_len,
        payload: data[header_end..].to_vec(),
    })
}
