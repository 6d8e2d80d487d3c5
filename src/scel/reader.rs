use std::fs;
use std::path::Path;

use log::info;

use super::export;
use super::format;
use super::iter::WordInfoIterator;
use super::layout::{MIN_FILE_LEN, PINYIN_TABLE_OFFSET, WORD_TABLE_OFFSET};
use super::types::error::{Region, Result, ScelError};
use super::types::models::*;

/// A fully decoded `.scel` dictionary.
///
/// Built once from a byte buffer and immutable afterwards. Decoding is
/// all-or-nothing: any structural error aborts with no partial result.
#[derive(Debug, Clone)]
pub struct ScelDict {
    header: ScelHeader,
    pinyin_table: PinyinTable,
    word_groups: Vec<WordGroup>,
}

impl ScelDict {
    /// Decodes a dictionary from an in-memory buffer.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The signature does not match
    /// - The buffer ends before the word table
    /// - The pinyin table magic does not match
    /// - A length field overruns its region
    /// - A pinyin position does not resolve
    /// - A text field is not valid UTF-16LE
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = format::header::parse(data)?;

        if data.len() < MIN_FILE_LEN {
            return Err(ScelError::Truncated {
                region: Region::PinyinTable,
                offset: data.len(),
                needed: MIN_FILE_LEN - data.len(),
                remaining: 0,
            });
        }

        let pinyin_table = format::pinyin::parse(
            &data[PINYIN_TABLE_OFFSET..WORD_TABLE_OFFSET],
            PINYIN_TABLE_OFFSET,
        )?;
        let word_groups = format::words::parse(
            &data[WORD_TABLE_OFFSET..],
            WORD_TABLE_OFFSET,
            &pinyin_table,
        )?;

        let dict = Self {
            header,
            pinyin_table,
            word_groups,
        };
        info!(
            "Dictionary decoded: {} pinyin entries, {} groups, {} words",
            dict.pinyin_table.len(),
            dict.num_groups(),
            dict.num_words()
        );
        Ok(dict)
    }

    /// Reads and decodes a dictionary file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening scel file: {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn header(&self) -> &ScelHeader {
        &self.header
    }

    pub fn pinyin_table(&self) -> &PinyinTable {
        &self.pinyin_table
    }

    pub fn word_groups(&self) -> &[WordGroup] {
        &self.word_groups
    }

    pub fn num_groups(&self) -> usize {
        self.word_groups.len()
    }

    /// Total number of words, which is also the number of output records.
    pub fn num_words(&self) -> usize {
        self.word_groups
            .iter()
            .map(|group| group.homophone_count as usize)
            .sum()
    }

    /// Returns an iterator over the flat word records, in file order.
    pub fn iter_word_infos(&self) -> WordInfoIterator<'_> {
        WordInfoIterator::new(&self.pinyin_table, &self.word_groups)
    }

    /// Collects all flat word records, failing on the first unresolvable reading.
    pub fn word_infos(&self) -> Result<Vec<WordInfo>> {
        self.iter_word_infos().collect()
    }

    /// Renders the dictionary in ibus text format.
    pub fn to_ibus(&self) -> Result<String> {
        Ok(export::to_ibus(&self.word_infos()?))
    }
}
