use crate::{code::CodeTable, frequency::Frequencies};

/// Bits assumed per symbol before encoding.
pub const SYMBOL_BITS: u64 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub original_bits: u64,
    pub compressed_bits: u64,
}

impl Statistics {
    pub fn compute(freqs: &Frequencies, table: &CodeTable) -> Self {
        Statistics {
            original_bits: SYMBOL_BITS * freqs.total(),
            compressed_bits: table.weighted_length(freqs),
        }
    }

    /// `compressed / original`, or `None` for empty input.
    pub fn ratio(&self) -> Option<f64> {
        if self.original_bits == 0 {
            return None;
        }
        Some(self.compressed_bits as f64 / self.original_bits as f64)
    }

    /// Compressed size as a percentage of the original, rounded to one decimal.
    pub fn percent(&self) -> f64 {
        self.ratio()
            .map_or(0.0, |ratio| (ratio * 1000.0).round() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;
    use crate::{code::CodeTable, frequency::Frequencies, tree::build_tree};

    fn stats_for(input: &[u8]) -> Statistics {
        let freqs = Frequencies::from_bytes(input);
        let root = build_tree(freqs.to_heap()).unwrap();
        Statistics::compute(&freqs, &CodeTable::from_tree(&root))
    }

    #[test]
    fn three_symbol_example() {
        let stats = stats_for(b"aaaaabbbcc");
        assert_eq!(stats.original_bits, 80);
        assert_eq!(stats.compressed_bits, 15);
        assert_eq!(stats.ratio(), Some(15.0 / 80.0));
        assert_eq!(stats.percent(), 18.8);
    }

    #[test]
    fn single_symbol() {
        let stats = stats_for(b"zzzz");
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.compressed_bits, 4);
        assert_eq!(stats.percent(), 12.5);
    }

    #[test]
    fn empty_input_has_no_ratio() {
        let stats = Statistics::compute(&Frequencies::default(), &CodeTable::default());
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.ratio(), None);
        assert_eq!(stats.percent(), 0.0);
    }
}
