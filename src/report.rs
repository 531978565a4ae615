use std::borrow::Cow;
use std::fmt;

use itertools::Itertools;

use crate::{code::CodeTable, frequency::Frequencies, stats::Statistics};

/// Printable form of a symbol, with mnemonics for whitespace and hex for
/// other non-printable bytes.
pub fn display_symbol(symbol: u8) -> Cow<'static, str> {
    match symbol {
        b'\t' => Cow::Borrowed("[TAB]"),
        b'\n' => Cow::Borrowed("[LF]"),
        b'\r' => Cow::Borrowed("[CR]"),
        b' ' => Cow::Borrowed("[SPACE]"),
        0x21..=0x7e => Cow::Owned((symbol as char).to_string()),
        _ => Cow::Owned(format!("[0x{:02X}]", symbol)),
    }
}

/// Per-symbol table followed by the size summary.
pub struct Report<'a> {
    pub freqs: &'a Frequencies,
    pub table: &'a CodeTable,
    pub stats: &'a Statistics,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, freq) in self
            .freqs
            .iter()
            .sorted_by_key(|&(symbol, freq)| (freq, symbol))
        {
            let code = self.table.get(symbol).unwrap_or("");
            writeln!(f, "{}: {}: {}", display_symbol(symbol), freq, code)?;
        }
        writeln!(f, "Original size: {} bits", self.stats.original_bits)?;
        write!(
            f,
            "Compressed size: {} bits ({:.1}% of original)",
            self.stats.compressed_bits,
            self.stats.percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Report, display_symbol};
    use crate::{code::CodeTable, frequency::Frequencies, stats::Statistics, tree::build_tree};

    #[test]
    fn mnemonics() {
        assert_eq!(display_symbol(b'\t'), "[TAB]");
        assert_eq!(display_symbol(b'\n'), "[LF]");
        assert_eq!(display_symbol(b'\r'), "[CR]");
        assert_eq!(display_symbol(b' '), "[SPACE]");
        assert_eq!(display_symbol(b'a'), "a");
        assert_eq!(display_symbol(b'~'), "~");
        assert_eq!(display_symbol(0x00), "[0x00]");
        assert_eq!(display_symbol(0xff), "[0xFF]");
    }

    #[test]
    fn renders_sorted_by_frequency() {
        let freqs = Frequencies::from_bytes(b"aaaaabbbcc");
        let table = CodeTable::from_tree(&build_tree(freqs.to_heap()).unwrap());
        let stats = Statistics::compute(&freqs, &table);
        let text = Report {
            freqs: &freqs,
            table: &table,
            stats: &stats,
        }
        .to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("c: 2: "));
        assert!(lines[1].starts_with("b: 3: "));
        assert_eq!(lines[2], format!("a: 5: {}", table.get(b'a').unwrap()));
        assert_eq!(lines[3], "Original size: 80 bits");
        assert_eq!(lines[4], "Compressed size: 15 bits (18.8% of original)");
    }

    #[test]
    fn empty_report() {
        let freqs = Frequencies::default();
        let table = CodeTable::default();
        let stats = Statistics::default();
        let text = Report {
            freqs: &freqs,
            table: &table,
            stats: &stats,
        }
        .to_string();
        assert_eq!(
            text,
            "Original size: 0 bits\nCompressed size: 0 bits (0.0% of original)"
        );
    }
}
