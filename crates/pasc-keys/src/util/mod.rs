//! Little-endian byte reader and writer for the canonical public key body.
//!
//! The body is a sequence of `u16` fields and length-prefixed byte strings,
//! all little-endian.

use crate::KeyError;

/// A cursor-based reader over a byte slice.
///
/// Every read advances the position; reads past the end fail with
/// `KeyError::UnexpectedEof` and leave the position unchanged.
pub struct KeyReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> KeyReader<'a> {
    /// Create a new reader starting at the beginning of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        KeyReader { data, pos: 0 }
    }

    /// Read `n` bytes and advance the position.
    ///
    /// # Returns
    /// A slice of `n` bytes, or `KeyError::UnexpectedEof` if fewer remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], KeyError> {
        if self.remaining() < n {
            return Err(KeyError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a little-endian u16 and advance the position by 2 bytes.
    pub fn read_u16_le(&mut self) -> Result<u16, KeyError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a `u16` length prefix followed by that many bytes.
    pub fn read_prefixed(&mut self) -> Result<&'a [u8], KeyError> {
        let start = self.pos;
        let len = self.read_u16_le()?;
        self.read_bytes(usize::from(len)).map_err(|e| {
            self.pos = start;
            e
        })
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

/// A growable little-endian byte writer.
#[derive(Debug, Default)]
pub struct KeyWriter {
    buf: Vec<u8>,
}

impl KeyWriter {
    /// Create a writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        KeyWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a little-endian u16.
    pub fn write_u16_le(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a `u16` length prefix followed by `bytes`.
    ///
    /// Callers bound `bytes` by a curve coordinate width, far below
    /// `u16::MAX`.
    pub fn write_prefixed(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.len() <= usize::from(u16::MAX));
        self.write_u16_le(bytes.len() as u16);
        self.write_bytes(bytes);
    }

    /// Consume the writer and return the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
