use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

use log::debug;

use crate::{
    bits::BitWriter,
    code::CodeTable,
    error::{Error, Result},
};

/// How code bits are laid out in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One ASCII `'0'` or `'1'` byte per bit.
    #[default]
    Text,
    /// Eight bits per byte, MSB first, last byte zero-padded.
    Packed,
}

pub struct Encoder<'a> {
    table: &'a CodeTable,
    format: OutputFormat,
}

impl<'a> Encoder<'a> {
    pub fn new(table: &'a CodeTable, format: OutputFormat) -> Self {
        Encoder { table, format }
    }

    /// Substitutes every byte of `source` with its code and writes the
    /// result to `sink`. Returns the number of code bits emitted.
    ///
    /// `source` must be the same data the table was built from; a byte
    /// with no code fails with [`Error::UnknownSymbol`].
    pub fn encode<R: Read, W: Write>(&self, source: R, sink: W) -> Result<u64> {
        let mut reader = BufReader::new(source);
        let bits = match self.format {
            OutputFormat::Text => {
                let mut writer = BufWriter::new(sink);
                let bits = self.for_each_code(&mut reader, |code| {
                    writer.write_all(code.as_bytes())
                })?;
                writer.flush()?;
                bits
            }
            OutputFormat::Packed => {
                let mut writer = BitWriter::new(BufWriter::new(sink));
                self.for_each_code(&mut reader, |code| {
                    for bit in code.bytes() {
                        writer.write_bit(bit == b'1')?;
                    }
                    Ok(())
                })?;
                let bits = writer.bits_written();
                writer.finish()?;
                bits
            }
        };

        debug!("emitted {} code bits as {:?}", bits, self.format);
        Ok(bits)
    }

    fn for_each_code<R, F>(&self, reader: &mut R, mut emit: F) -> Result<u64>
    where
        R: BufRead,
        F: FnMut(&str) -> io::Result<()>,
    {
        let mut bits = 0u64;
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }
            for &byte in buf {
                let code = self.table.get(byte).ok_or(Error::UnknownSymbol(byte))?;
                emit(code)?;
                bits += code.len() as u64;
            }
            let consumed = buf.len();
            reader.consume(consumed);
        }
        Ok(bits)
    }
}
