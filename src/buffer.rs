use std::{
    cmp,
    io::{self, Read},
    ops::{Deref, DerefMut, Range},
};

pub const CAPACITY: usize = 1 << 14;

/// A fixed-size window over a byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Buffer {
    buffer: Box<[u8]>,
    /// The start of the valid data.
    ///
    /// Never greater than `self.end`.
    start: usize,
    /// The end of the valid data + 1 (not a valid index).
    ///
    /// Never greater than [`CAPACITY`].
    end: usize,
}

impl Buffer {
    /// Creates a new [`Buffer`] that can hold [`CAPACITY`] many elements.
    pub(crate) fn new() -> Buffer {
        Buffer {
            buffer: vec![0; CAPACITY].into_boxed_slice(),
            start: 0,
            end: 0,
        }
    }

    #[inline]
    fn data_len(&self) -> usize {
        self.end - self.start
    }

    /// Range from `self.start` to `self.end`.
    #[inline]
    fn data_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Gets the valid data in the buffer.
    #[inline]
    pub(crate) fn data(&self) -> &[u8] {
        &self.buffer[self.data_range()]
    }

    /// Discards `n` many bytes at the front of [`Self::data`].
    #[inline]
    pub(crate) fn consume(&mut self, n: usize) {
        self.start = cmp::min(self.start + n, self.end);
    }

    /// Ensures that `N` amount of bytes are in the buffer and returns the data.
    ///
    /// The only situation where the returned slice does not have `N` elements is if EOF was
    /// encountered.
    pub(crate) fn ensure_bytes<const N: usize>(&mut self, mut r: impl Read) -> io::Result<&[u8]> {
        const {
            assert!(N <= CAPACITY);
        }

        if self.end + N > CAPACITY {
            self.backshift();
        }

        while self.data_len() < N {
            let len = match r.read(&mut self.buffer[self.end..]) {
                Ok(len) => len,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            // EOF
            if len == 0 {
                break;
            }

            self.end += len;
        }

        Ok(self.data())
    }

    /// Moves [`Self::data`] to the beginning.
    fn backshift(&mut self) {
        let data_range = self.data_range();
        self.start = 0;
        self.end = data_range.len();
        self.buffer.copy_within(data_range, 0);
    }
}

/// A [`Buffer`] together with the reader that refills it.
#[derive(Debug, Clone)]
pub(crate) struct BufferWithReader<R> {
    buffer: Buffer,
    reader: R,
}

impl<R: Read> BufferWithReader<R> {
    pub fn new(reader: R) -> BufferWithReader<R> {
        BufferWithReader {
            buffer: Buffer::new(),
            reader,
        }
    }

    /// Ensures that `N` amount of bytes are in the buffer and returns the data.
    ///
    /// The only situation where the returned slice does not have `N` elements is if EOF was
    /// encountered.
    pub fn ensure_bytes<const N: usize>(&mut self) -> io::Result<&[u8]> {
        self.buffer.ensure_bytes::<N>(&mut self.reader)
    }

    /// Gets at least one byte of data, or an empty slice at EOF.
    #[inline]
    pub fn fill(&mut self) -> io::Result<&[u8]> {
        self.ensure_bytes::<1>()
    }
}

impl<R> Deref for BufferWithReader<R> {
    type Target = Buffer;

    fn deref(&self) -> &Buffer {
        &self.buffer
    }
}

impl<R> DerefMut for BufferWithReader<R> {
    fn deref_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out one byte per read call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match (self.0.split_first(), buf.first_mut()) {
                (Some((&byte, rest)), Some(slot)) => {
                    *slot = byte;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_ensure_bytes() {
        let mut buffer = BufferWithReader::new(Trickle(b"abcdef"));
        assert_eq!(buffer.ensure_bytes::<3>().unwrap(), b"abc");
        buffer.consume(2);
        assert_eq!(buffer.data(), b"c");
        assert_eq!(buffer.ensure_bytes::<10>().unwrap(), b"cdef");
        buffer.consume(100);
        assert_eq!(buffer.fill().unwrap(), b"");
        assert!(buffer.data().is_empty());
    }

    #[test]
    fn test_backshift() {
        let input = vec![b'x'; CAPACITY + 10];
        let mut buffer = BufferWithReader::new(io::Cursor::new(input));
        assert_eq!(buffer.fill().unwrap().len(), CAPACITY);
        buffer.consume(CAPACITY - 1);
        // Needs room for two more bytes than the window has left.
        assert_eq!(buffer.ensure_bytes::<2>().unwrap().len(), 11);
    }
}
