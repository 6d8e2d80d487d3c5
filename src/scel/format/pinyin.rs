//! Pinyin lookup table parsing.

use log::{debug, trace};

use crate::scel::layout::PINYIN_TABLE_MAGIC;
use crate::scel::types::{
    error::{Region, Result, ScelError},
    models::{PinyinEntry, PinyinTable},
};
use crate::scel::utils::ByteCursor;

/// Parses the pinyin table region.
///
/// # Structure
/// ```text
/// [4 bytes] Magic
/// repeated until the region ends:
///   [2 bytes] Stored index
///   [2 bytes] Text length in bytes
///   [N bytes] UTF-16LE text
/// ```
///
/// `base` is the region's absolute offset, used for error reporting. The
/// region must be consumed exactly; a record overrunning it is an error.
pub fn parse(region: &[u8], base: usize) -> Result<PinyinTable> {
    let mut cursor = ByteCursor::new(region, base, Region::PinyinTable);

    let magic_bytes = cursor.take(PINYIN_TABLE_MAGIC.len())?;
    if magic_bytes != PINYIN_TABLE_MAGIC.as_slice() {
        return Err(ScelError::MagicMismatch {
            region: Region::PinyinTable,
            found: magic_bytes.to_vec(),
        });
    }

    let mut entries = Vec::new();
    while !cursor.is_empty() {
        entries.push(parse_entry(&mut cursor)?);
    }

    debug!("Pinyin table parsed: {} entries", entries.len());
    Ok(PinyinTable {
        magic: PINYIN_TABLE_MAGIC,
        entries,
    })
}

fn parse_entry(cursor: &mut ByteCursor<'_>) -> Result<PinyinEntry> {
    let stored_index = cursor.read_u16()?;
    let len = cursor.read_u16()? as usize;
    let text = cursor.read_text(len)?;
    trace!("Pinyin entry: index={}, text='{}'", stored_index, text);
    Ok(PinyinEntry { stored_index, text })
}
