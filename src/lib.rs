//! Lossless text compression built on Huffman coding.
//!
//! The pipeline: raw text → frequency map → Huffman tree → code map → packed
//! bits ([`encode`]), and packed bits + code map → tree → raw text
//! ([`decode`]). Only the code map and the packed payload are persisted; the
//! tree is rebuilt from the table on the decode side.

pub mod bitio;
pub mod codec;
pub mod container;
pub mod error;
pub mod logger;
pub mod stats;
pub mod tree;

pub use codec::{Encoded, decode, encode};
pub use error::{Error, Result};
