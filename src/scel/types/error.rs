//! Custom error types for the scel-reader crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The fixed region of a `.scel` file an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    PinyinTable,
    WordTable,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Region::Header => write!(f, "header"),
            Region::PinyinTable => write!(f, "pinyin table"),
            Region::WordTable => write!(f, "word table"),
        }
    }
}

/// The primary error type for all operations in this crate.
///
/// Every variant except [`ScelError::Io`], [`ScelError::MissingInput`] and
/// [`ScelError::DuplicateOutput`] is a structural format error. Those are
/// terminal for the buffer being decoded: no partial output is produced.
#[derive(Debug, Error)]
pub enum ScelError {
    /// An error originating from I/O operations (loading or writing files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input path given for conversion does not exist.
    #[error("Input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Two inputs would be written to the same output file.
    #[error("Output {} for {} is already written by another input", output.display(), input.display())]
    DuplicateOutput { input: PathBuf, output: PathBuf },

    /// The first 12 bytes are not the `.scel` file signature.
    #[error("Signature mismatch: found {found:02x?}")]
    SignatureMismatch { found: Vec<u8> },

    /// A region's magic constant does not match.
    #[error("Magic mismatch in {region}: found {found:02x?}")]
    MagicMismatch { region: Region, found: Vec<u8> },

    /// A length field declares more bytes than remain in its region.
    #[error("Truncated {region} record at offset {offset:#x}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        region: Region,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A pinyin position does not resolve to an entry of the pinyin table.
    #[error("Pinyin index {index} out of range in {region} at offset {offset:#x} (table has {len} entries)")]
    IndexOutOfRange {
        region: Region,
        offset: usize,
        index: u16,
        len: usize,
    },

    /// A text field is not valid UTF-16LE.
    #[error("Invalid UTF-16LE text in {region} at offset {offset:#x} ({len} bytes)")]
    InvalidText {
        region: Region,
        offset: usize,
        len: usize,
    },
}

impl ScelError {
    /// The region a format error was raised in, `None` for file-level errors.
    pub fn region(&self) -> Option<Region> {
        match self {
            ScelError::Io(_)
            | ScelError::MissingInput { .. }
            | ScelError::DuplicateOutput { .. } => None,
            ScelError::SignatureMismatch { .. } => Some(Region::Header),
            ScelError::MagicMismatch { region, .. }
            | ScelError::Truncated { region, .. }
            | ScelError::IndexOutOfRange { region, .. }
            | ScelError::InvalidText { region, .. } => Some(*region),
        }
    }
}

/// A convenience `Result` type alias using the crate's `ScelError` type.
pub type Result<T> = std::result::Result<T, ScelError>;
