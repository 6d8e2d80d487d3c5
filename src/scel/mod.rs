//! Core `.scel` reader module

pub mod batch;
pub mod export;
pub mod format;
pub mod iter;
pub mod layout;
pub mod reader;
pub mod types;
mod utils;

pub use reader::ScelDict;
pub use types::error::{Region, Result, ScelError};

/// Converts a `.scel` buffer to ibus dictionary text.
///
/// This is the whole pipeline: header, pinyin table, word table, record
/// assembly and text rendering. No I/O is performed.
pub fn convert(data: &[u8]) -> Result<String> {
    ScelDict::from_bytes(data)?.to_ibus()
}
