//! Address Sources.
//!
//! An `AddressSource` yields a finite, non-restartable sequence of 32-bit
//! addresses. End-of-stream is `Ok(None)`; a genuine read failure is `Err`.
//! The two must never be confused: a corrupted trace is not a short one.

use std::io::{self, ErrorKind, Read};

use crate::common::constants::ADDRESS_BYTES;

/// Producer of trace addresses.
pub trait AddressSource {
    /// Returns the next address, `Ok(None)` at end-of-stream.
    fn next_address(&mut self) -> io::Result<Option<u32>>;
}

impl<S: AddressSource + ?Sized> AddressSource for &mut S {
    fn next_address(&mut self) -> io::Result<Option<u32>> {
        (**self).next_address()
    }
}

/// Reads big-endian 4-byte records from any `Read`.
///
/// A trailing partial record (1 to 3 bytes before EOF) is discarded and
/// reported as end-of-stream.
pub struct ReaderSource<R> {
    reader: R,
    discarded: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            discarded: 0,
        }
    }

    /// Bytes of a trailing partial record that were dropped, if any.
    pub fn discarded_bytes(&self) -> usize {
        self.discarded
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> AddressSource for ReaderSource<R> {
    fn next_address(&mut self) -> io::Result<Option<u32>> {
        let mut buf = [0u8; ADDRESS_BYTES];
        let mut filled = 0;

        while filled < ADDRESS_BYTES {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    if filled > 0 {
                        log::debug!("discarding {} trailing bytes of a partial record", filled);
                        self.discarded = filled;
                    }
                    return Ok(None);
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        Ok(Some(u32::from_be_bytes(buf)))
    }
}

/// Adapts an in-memory iterator of addresses.
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator<Item = u32>> IterSource<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(addresses: T) -> Self {
        Self {
            iter: addresses.into_iter(),
        }
    }
}

impl<I: Iterator<Item = u32>> AddressSource for IterSource<I> {
    fn next_address(&mut self) -> io::Result<Option<u32>> {
        Ok(self.iter.next())
    }
}
