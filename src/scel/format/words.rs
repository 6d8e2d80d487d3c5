//! Word table parsing (homophone groups and their words).

use log::{debug, trace};

use crate::scel::layout::COUNT_WIDTH;
use crate::scel::types::{
    error::{Region, Result, ScelError},
    models::{PinyinTable, Word, WordGroup},
};
use crate::scel::utils::ByteCursor;

/// Parses the word table region, which runs to the end of the file.
///
/// # Group Structure
/// ```text
/// [2 bytes] Homophone count
/// [2 bytes] Pinyin index table length in bytes
/// [N bytes] Pinyin positions (u16 each)
/// homophone count times:
///   [2 bytes] Word length in bytes
///   [N bytes] UTF-16LE word
///   [2 bytes] Extension length
///   [N bytes] Extension
/// ```
///
/// Each pinyin position is resolved against `pinyin_table` immediately and
/// the entry's stored index is kept.
pub fn parse(region: &[u8], base: usize, pinyin_table: &PinyinTable) -> Result<Vec<WordGroup>> {
    let mut cursor = ByteCursor::new(region, base, Region::WordTable);
    let mut groups = Vec::new();

    while !cursor.is_empty() {
        groups.push(parse_group(&mut cursor, pinyin_table)?);
    }

    debug!("Word table parsed: {} groups", groups.len());
    Ok(groups)
}

fn parse_group(cursor: &mut ByteCursor<'_>, pinyin_table: &PinyinTable) -> Result<WordGroup> {
    let group_offset = cursor.offset();
    let homophone_count = cursor.read_u16()?;
    let index_table_len = cursor.read_u16()? as usize;
    let pinyin_indices = parse_index_table(cursor, index_table_len, pinyin_table)?;

    let words = (0..homophone_count)
        .map(|_| parse_word(cursor))
        .collect::<Result<Vec<_>>>()?;

    trace!(
        "Word group at {:#x}: {} homophones, {} syllables",
        group_offset,
        homophone_count,
        pinyin_indices.len()
    );

    Ok(WordGroup {
        offset: group_offset,
        homophone_count,
        pinyin_indices,
        words,
    })
}

/// Reads a group's pinyin positions and maps each to its entry's stored index.
fn parse_index_table(
    cursor: &mut ByteCursor<'_>,
    byte_len: usize,
    pinyin_table: &PinyinTable,
) -> Result<Vec<u16>> {
    let table_offset = cursor.offset();
    let mut table = ByteCursor::new(cursor.take(byte_len)?, table_offset, cursor.region());
    let mut indices = Vec::with_capacity(byte_len / 2);

    while !table.is_empty() {
        let offset = table.offset();
        let position = table.read_u16()?;
        let entry = pinyin_table
            .get(position)
            .ok_or(ScelError::IndexOutOfRange {
                region: Region::WordTable,
                offset,
                index: position,
                len: pinyin_table.len(),
            })?;
        indices.push(entry.stored_index);
    }

    Ok(indices)
}

fn parse_word(cursor: &mut ByteCursor<'_>) -> Result<Word> {
    let word_len = cursor.read_u16()? as usize;
    let text = cursor.read_text(word_len)?;

    let ext_len = cursor.read_u16()? as usize;
    if ext_len > 0 && ext_len < COUNT_WIDTH {
        // `remaining` is the extension's declared length here, not the
        // bytes left in the region.
        return Err(ScelError::Truncated {
            region: Region::WordTable,
            offset: cursor.offset(),
            needed: COUNT_WIDTH,
            remaining: ext_len,
        });
    }
    let extension = cursor.take(ext_len)?.to_vec();

    Ok(Word { text, extension })
}
