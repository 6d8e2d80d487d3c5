//! Sequential access to the flat word records of a dictionary.
//!
//! [`WordInfoIterator`] walks word groups in file order and, within each
//! group, its words in file order. The group's pinyin reading is resolved
//! once and shared by every word of the group.
//!
//! # Example
//! ```no_run
//! # use scel_reader::ScelDict;
//! # let dict = ScelDict::open("dict.scel").unwrap();
//! for result in dict.iter_word_infos() {
//!     let info = result.unwrap();
//!     println!("{} -> {} ({})", info.word, info.pinyin, info.count);
//! }
//! ```

use std::slice;

use crate::scel::layout::PINYIN_SEPARATOR;
use crate::scel::types::error::{Region, Result, ScelError};
use crate::scel::types::models::{PinyinTable, Word, WordGroup, WordInfo};

/// Iterator over `WordInfo` records, yielding `Result<WordInfo>`.
///
/// Created by [`ScelDict::iter_word_infos()`](crate::ScelDict::iter_word_infos).
/// Stops after the first error.
pub struct WordInfoIterator<'a> {
    pinyin_table: &'a PinyinTable,
    groups: slice::Iter<'a, WordGroup>,
    current_pinyin: String,
    current_words: slice::Iter<'a, Word>,
    failed: bool,
}

impl<'a> WordInfoIterator<'a> {
    pub(crate) fn new(pinyin_table: &'a PinyinTable, groups: &'a [WordGroup]) -> Self {
        Self {
            pinyin_table,
            groups: groups.iter(),
            current_pinyin: String::new(),
            current_words: Default::default(),
            failed: false,
        }
    }
}

impl<'a> Iterator for WordInfoIterator<'a> {
    type Item = Result<WordInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(word) = self.current_words.next() {
                return Some(Ok(WordInfo {
                    word: word.text.clone(),
                    pinyin: self.current_pinyin.clone(),
                    count: word.count(),
                }));
            }

            let group = self.groups.next()?;
            match resolve_pinyin(group, self.pinyin_table) {
                Ok(pinyin) => {
                    self.current_pinyin = pinyin;
                    self.current_words = group.words.iter();
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Joins a group's syllables with apostrophes, in index order.
///
/// Each stored index is looked up as a position in the pinyin table. An
/// empty index table yields an empty reading.
pub fn resolve_pinyin(group: &WordGroup, pinyin_table: &PinyinTable) -> Result<String> {
    let mut pinyin = String::new();
    for (i, &index) in group.pinyin_indices.iter().enumerate() {
        let entry = pinyin_table
            .get(index)
            .ok_or(ScelError::IndexOutOfRange {
                region: Region::WordTable,
                offset: group.index_table_offset() + i * 2,
                index,
                len: pinyin_table.len(),
            })?;
        if i > 0 {
            pinyin.push(PINYIN_SEPARATOR);
        }
        pinyin.push_str(&entry.text);
    }
    Ok(pinyin)
}
