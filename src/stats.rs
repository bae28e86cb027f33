use std::fmt;

/// Size report for one compress run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub uncompressed: u64,
    pub compressed: u64,
}

impl Report {
    pub fn new(uncompressed: u64, compressed: u64) -> Self {
        Self {
            uncompressed,
            compressed,
        }
    }

    /// Compressed size over uncompressed size. Smaller is better; empty
    /// input reports 0.
    pub fn ratio(&self) -> f64 {
        if self.uncompressed == 0 {
            0.0
        } else {
            self.compressed as f64 / self.uncompressed as f64
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "uncompressed: {} bytes", self.uncompressed)?;
        writeln!(f, "compressed:   {} bytes", self.compressed)?;
        write!(f, "ratio:        {:.3}", self.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_compressed_over_uncompressed() {
        assert_eq!(Report::new(1000, 250).ratio(), 0.25);
    }

    #[test]
    fn empty_input_reports_zero_ratio() {
        assert_eq!(Report::new(0, 12).ratio(), 0.0);
    }
}
