use std::io::{self, Write};

/// Packs bits MSB-first into bytes. `finish` zero-pads the last byte.
pub struct BitWriter<W: Write> {
    sink: W,
    buf: u8,
    bits_in_buf: u32,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buf: 0,
            bits_in_buf: 0,
            bits_written: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.buf = (self.buf << 1) | bit as u8;
        self.bits_in_buf += 1;
        self.bits_written += 1;

        if self.bits_in_buf == 8 {
            self.sink.write_all(&[self.buf])?;
            self.buf = 0;
            self.bits_in_buf = 0;
        }
        Ok(())
    }

    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Flushes any partial byte and returns the sink.
    pub fn finish(mut self) -> io::Result<W> {
        if self.bits_in_buf > 0 {
            let padded = self.buf << (8 - self.bits_in_buf);
            self.sink.write_all(&[padded])?;
            self.buf = 0;
            self.bits_in_buf = 0;
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}
