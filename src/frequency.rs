use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Read};

use log::debug;

use crate::{heap::PriorityHeap, node::Node};

/// Occurrence count per byte, iterated in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequencies {
    counts: BTreeMap<u8, u64>,
}

impl Frequencies {
    /// Reads `source` to EOF and counts every byte. The reader is dropped
    /// when this returns.
    pub fn scan<R: Read>(source: R) -> io::Result<Self> {
        let mut reader = BufReader::new(source);
        let mut counts: BTreeMap<u8, u64> = BTreeMap::new();

        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            for &byte in buf {
                *counts.entry(byte).or_default() += 1;
            }
            let consumed = buf.len();
            reader.consume(consumed);
        }

        debug!("scanned {} distinct symbols", counts.len());
        Ok(Frequencies { counts })
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts: BTreeMap<u8, u64> = BTreeMap::new();
        for &byte in bytes {
            *counts.entry(byte).or_default() += 1;
        }
        Frequencies { counts }
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols scanned.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &freq)| (symbol, freq))
    }

    /// One leaf per symbol, inserted in ascending symbol order.
    pub fn to_heap(&self) -> PriorityHeap<Node> {
        let mut heap = PriorityHeap::with_capacity(self.counts.len());
        for (symbol, freq) in self.iter() {
            heap.insert(Node::new_leaf(symbol, freq));
        }
        heap
    }
}

impl FromIterator<(u8, u64)> for Frequencies {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        Frequencies {
            counts: iter.into_iter().collect(),
        }
    }
}
