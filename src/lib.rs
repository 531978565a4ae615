//! Huffman encoder for byte streams.
//!
//! Frequencies are scanned, a code is derived from the Huffman tree, and the
//! input is re-read and rewritten with every byte replaced by its code.

pub mod bits;
pub mod code;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod heap;
pub mod node;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod tree;

pub use code::CodeTable;
pub use encoder::{Encoder, OutputFormat};
pub use error::{Error, Result};
pub use frequency::Frequencies;
pub use heap::PriorityHeap;
pub use node::{Node, NodeKind};
pub use pipeline::{EncodeOptions, Summary, compress_bytes, compress_file};
pub use stats::Statistics;
pub use tree::build_tree;
