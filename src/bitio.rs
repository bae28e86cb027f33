use std::io::{Read, Write};

use crate::error::{Error, Result};

/// Packs single bits into bytes, most significant bit first, emitting each
/// completed byte to the underlying sink.
pub struct BitWriter<W: Write> {
    sink: W,
    acc: u8,
    n_bits: u8,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            acc: 0,
            n_bits: 0,
        }
    }

    /// Append one bit. Values other than 0 and 1 are rejected and leave the
    /// accumulator untouched.
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        if bit > 1 {
            return Err(Error::InvalidBit(bit));
        }
        self.acc = (self.acc << 1) | bit;
        self.n_bits += 1;
        if self.n_bits == 8 {
            self.sink.write_all(&[self.acc])?;
            self.acc = 0;
            self.n_bits = 0;
        }
        Ok(())
    }

    /// Flush any partial byte, zero-padded on the right, and hand the sink
    /// back to the caller.
    pub fn finish(mut self) -> Result<W> {
        if self.n_bits > 0 {
            self.acc <<= 8 - self.n_bits;
            self.sink.write_all(&[self.acc])?;
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}

/// The inverse of [`BitWriter`]: yields bits most significant first, pulling
/// the next byte from the source whenever the current one is spent.
pub struct BitReader<R: Read> {
    source: R,
    current: u8,
    remaining: u8,
}

impl<R: Read> BitReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            current: 0,
            remaining: 0,
        }
    }

    /// Read one bit, or `None` once the source is exhausted. Padding bits
    /// written by [`BitWriter::finish`] are indistinguishable from data at
    /// this layer; the caller decides how many bits are meaningful.
    pub fn read_bit(&mut self) -> Result<Option<u8>> {
        if self.remaining == 0 {
            let mut byte = [0u8; 1];
            if self.source.read(&mut byte)? == 0 {
                return Ok(None);
            }
            self.current = byte[0];
            self.remaining = 8;
        }
        self.remaining -= 1;
        Ok(Some((self.current >> self.remaining) & 1))
    }
}
