use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read input file \"{}\"", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file \"{}\"", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    #[error("symbol {0:#04x} has no code; input changed between passes?")]
    UnknownSymbol(u8),
}

impl Error {
    /// Whether this error falls in the coarse "input file error" category.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::Input { .. } | Error::Output { .. } | Error::Io(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
