//! Two-pass file encoding: scan, build the code, then re-read and emit.

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::{
    code::CodeTable,
    encoder::{Encoder, OutputFormat},
    error::{Error, Result},
    frequency::Frequencies,
    report::Report,
    stats::Statistics,
    tree::build_tree,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub format: OutputFormat,
}

/// Everything a run produced besides the encoded output itself.
#[derive(Debug, Clone)]
pub struct Summary {
    pub freqs: Frequencies,
    pub table: CodeTable,
    pub stats: Statistics,
    pub bits_written: u64,
    pub elapsed: Duration,
}

impl Summary {
    pub fn report(&self) -> Report<'_> {
        Report {
            freqs: &self.freqs,
            table: &self.table,
            stats: &self.stats,
        }
    }
}

/// Builds the code for `freqs`. Empty input gets an empty table and the
/// tree builder is never invoked.
pub fn code_table(freqs: &Frequencies) -> Result<CodeTable> {
    if freqs.is_empty() {
        return Ok(CodeTable::default());
    }
    let root = build_tree(freqs.to_heap())?;
    Ok(CodeTable::from_tree(&root))
}

/// Encodes the file at `input` into a freshly truncated file at `output`.
///
/// The input is opened twice; it must not change between the passes.
/// On failure the output may already have been truncated.
pub fn compress_file(input: &Path, output: &Path, options: &EncodeOptions) -> Result<Summary> {
    let start = Instant::now();
    let input_err = |source: io::Error| Error::Input {
        path: input.to_path_buf(),
        source,
    };

    let freqs = File::open(input)
        .and_then(Frequencies::scan)
        .map_err(input_err)?;
    debug!(
        "{}: {} bytes, {} distinct",
        input.display(),
        freqs.total(),
        freqs.len()
    );

    let table = code_table(&freqs)?;
    let stats = Statistics::compute(&freqs, &table);

    let sink = File::create(output).map_err(|source| Error::Output {
        path: output.to_path_buf(),
        source,
    })?;
    let source = File::open(input).map_err(input_err)?;
    let bits_written = Encoder::new(&table, options.format).encode(source, sink)?;

    let elapsed = start.elapsed();
    info!(
        "encoded {} into {} ({} bits, {:?})",
        input.display(),
        output.display(),
        bits_written,
        elapsed
    );

    Ok(Summary {
        freqs,
        table,
        stats,
        bits_written,
        elapsed,
    })
}

/// In-memory variant of [`compress_file`].
pub fn compress_bytes(input: &[u8], options: &EncodeOptions) -> Result<(Summary, Vec<u8>)> {
    let start = Instant::now();
    let freqs = Frequencies::scan(input)?;
    let table = code_table(&freqs)?;
    let stats = Statistics::compute(&freqs, &table);

    let mut encoded = Vec::new();
    let bits_written = Encoder::new(&table, options.format).encode(input, &mut encoded)?;

    let summary = Summary {
        freqs,
        table,
        stats,
        bits_written,
        elapsed: start.elapsed(),
    };
    Ok((summary, encoded))
}

#[cfg(test)]
mod tests {
    use super::{EncodeOptions, code_table, compress_bytes};
    use crate::{encoder::OutputFormat, frequency::Frequencies};

    #[test]
    fn empty_input_skips_tree_building() {
        assert!(code_table(&Frequencies::default()).unwrap().is_empty());

        let (summary, encoded) = compress_bytes(b"", &EncodeOptions::default()).unwrap();
        assert!(encoded.is_empty());
        assert_eq!(summary.bits_written, 0);
        assert_eq!(summary.stats.original_bits, 0);
        assert_eq!(summary.stats.ratio(), None);
    }

    #[test]
    fn single_symbol_encodes_one_bit_each() {
        let (summary, encoded) = compress_bytes(b"zzzz", &EncodeOptions::default()).unwrap();
        assert_eq!(encoded, b"0000");
        assert_eq!(summary.bits_written, 4);
        assert_eq!(summary.stats.compressed_bits, 4);
    }

    #[test]
    fn bits_written_matches_statistics() {
        let options = EncodeOptions {
            format: OutputFormat::Packed,
        };
        let (summary, encoded) = compress_bytes(b"aaaaabbbcc", &options).unwrap();
        assert_eq!(summary.bits_written, 15);
        assert_eq!(summary.stats.compressed_bits, 15);
        assert_eq!(encoded.len(), 2);
    }
}
