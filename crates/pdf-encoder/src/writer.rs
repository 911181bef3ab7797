//! Byte-counting output sink

use std::io::{self, Write};

/// Writer that tracks how many bytes have passed through it
///
/// The count is the absolute file offset of the next byte, which is what the
/// cross-reference table records. Only bytes the inner writer accepted are
/// counted.
#[derive(Debug)]
pub struct OffsetWriter<W: Write> {
    inner: W,
    offset: u64,
}

impl<W: Write> OffsetWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes written so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for OffsetWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.offset += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts at most `limit` bytes per call
    struct Trickle {
        data: Vec<u8>,
        limit: usize,
    }

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_counts_bytes() {
        let mut w = OffsetWriter::new(Vec::new());
        w.write_all(b"%PDF-1.7\r\n").unwrap();
        assert_eq!(w.offset(), 10);
        w.write_all(b"").unwrap();
        assert_eq!(w.offset(), 10);
        assert_eq!(w.into_inner().len(), 10);
    }

    #[test]
    fn test_counts_partial_writes() {
        let mut w = OffsetWriter::new(Trickle {
            data: Vec::new(),
            limit: 3,
        });
        w.write_all(b"0123456789").unwrap();
        assert_eq!(w.offset(), 10);
        assert_eq!(w.into_inner().data, b"0123456789");
    }
}
