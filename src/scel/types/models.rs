//! Core data structures for `.scel` format components.
//!
//! This module defines the types produced by the format parsers:
//! - File header metadata
//! - The pinyin lookup table
//! - Word groups and their words
//! - Flat output records

use std::fmt;

use crate::scel::layout::COUNT_WIDTH;

/// Parsed `.scel` file header.
///
/// The four text fields are stored NUL-padded in fixed ranges of the file;
/// the padding is stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScelHeader {
    pub signature: [u8; 12],
    pub name: String,
    pub dict_type: String,
    pub description: String,
    pub example: String,
}

/// A single syllable of the pinyin table.
///
/// `stored_index` is the index written in the file. It is distinct from the
/// entry's position in [`PinyinTable::entries`], which is what word groups
/// refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinEntry {
    pub stored_index: u16,
    pub text: String,
}

/// The pinyin lookup table, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinTable {
    pub magic: [u8; 4],
    pub entries: Vec<PinyinEntry>,
}

impl PinyinTable {
    /// Looks up an entry by its position in the table.
    pub fn get(&self, position: u16) -> Option<&PinyinEntry> {
        self.entries.get(position as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single word of a word group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// Trailing per-word bytes. The first two hold the usage frequency;
    /// the rest are reserved.
    pub extension: Vec<u8>,
}

impl Word {
    /// Usage frequency from the head of the extension, `0` if there is none.
    pub fn count(&self) -> u32 {
        match self.extension.get(..COUNT_WIDTH) {
            Some(bytes) => u16::from_le_bytes([bytes[0], bytes[1]]) as u32,
            None => 0,
        }
    }
}

/// A set of homophones sharing one pinyin reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    /// Absolute offset of the group in the file.
    pub offset: usize,
    pub homophone_count: u16,
    /// Stored indices of the group's syllables, in reading order.
    pub pinyin_indices: Vec<u16>,
    pub words: Vec<Word>,
}

impl WordGroup {
    /// Absolute offset of the group's pinyin index table.
    pub fn index_table_offset(&self) -> usize {
        self.offset + 4
    }
}

/// A flat output record: one per word, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    pub word: String,
    pub pinyin: String,
    pub count: u32,
}

impl fmt::Display for WordInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.word, self.pinyin, self.count)
    }
}
