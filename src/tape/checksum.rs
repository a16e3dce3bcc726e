use std::io::{Result, Write};

/// Writer that keeps the XOR of every byte passed through it.
pub struct ChecksumWriter<W> {
    inner: W,
    checksum: u8,
}

impl<W: Write> ChecksumWriter<W> {
    pub fn new(inner: W) -> ChecksumWriter<W> {
        ChecksumWriter { inner, checksum: 0 }
    }

    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Write the checksum itself and hand back the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.write_all(&[self.checksum])?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for ChecksumWriter<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let n = self.inner.write(buf)?;
        self.checksum = buf[..n].iter().fold(self.checksum, |acc, b| acc ^ b);
        Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
