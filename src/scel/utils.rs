//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::UTF_16LE;

use crate::scel::types::error::{Region, Result, ScelError};

/// A forward-only read cursor over one region of the input buffer.
///
/// Offsets reported in errors are absolute: `base` is the region's offset in
/// the input buffer.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
    region: Region,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8], base: usize, region: Region) -> Self {
        Self {
            data,
            pos: 0,
            base,
            region,
        }
    }

    /// Absolute offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Takes the next `len` bytes, failing if the region is too short.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(ScelError::Truncated {
                region: self.region,
                offset: self.offset(),
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    /// Reads `len` bytes and decodes them as UTF-16LE.
    pub fn read_text(&mut self, len: usize) -> Result<String> {
        let offset = self.offset();
        let bytes = self.take(len)?;
        decode_utf16le(bytes, self.region, offset)
    }
}

/// Strictly decodes UTF-16LE text.
///
/// Odd lengths and unpaired surrogates are rejected rather than replaced.
pub fn decode_utf16le(bytes: &[u8], region: Region, offset: usize) -> Result<String> {
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(ScelError::InvalidText {
            region,
            offset,
            len: bytes.len(),
        })
}
