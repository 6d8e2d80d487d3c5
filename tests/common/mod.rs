#![allow(dead_code)]

use scel_reader::scel::layout::{
    DESCRIPTION_RANGE, EXAMPLE_RANGE, NAME_RANGE, PINYIN_TABLE_MAGIC, PINYIN_TABLE_OFFSET,
    SIGNATURE, TYPE_RANGE, WORD_TABLE_OFFSET,
};

pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect()
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Assembles `.scel` buffers for tests.
///
/// The pinyin table region has a fixed size, so any space left after the
/// requested entries is filled with one NUL-text entry appended last.
pub struct ScelBuilder {
    name: String,
    dict_type: String,
    description: String,
    example: String,
    pinyin: Vec<(u16, String)>,
    pinyin_region: Option<Vec<u8>>,
    words: Vec<u8>,
}

impl ScelBuilder {
    pub fn new() -> Self {
        Self {
            name: "test".to_string(),
            dict_type: "unit".to_string(),
            description: String::new(),
            example: String::new(),
            pinyin: Vec::new(),
            pinyin_region: None,
            words: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn example(mut self, example: &str) -> Self {
        self.example = example.to_string();
        self
    }

    pub fn pinyin(mut self, stored_index: u16, text: &str) -> Self {
        self.pinyin.push((stored_index, text.to_string()));
        self
    }

    /// Replaces the pinyin table region contents verbatim (zero padded).
    pub fn pinyin_region(mut self, bytes: Vec<u8>) -> Self {
        self.pinyin_region = Some(bytes);
        self
    }

    /// Appends a well-formed word group.
    pub fn group(mut self, positions: &[u16], words: &[(&str, &[u8])]) -> Self {
        put_u16(&mut self.words, words.len() as u16);
        put_u16(&mut self.words, (positions.len() * 2) as u16);
        for &position in positions {
            put_u16(&mut self.words, position);
        }
        for (text, ext) in words {
            let text = utf16le(text);
            put_u16(&mut self.words, text.len() as u16);
            self.words.extend_from_slice(&text);
            put_u16(&mut self.words, ext.len() as u16);
            self.words.extend_from_slice(ext);
        }
        self
    }

    /// Appends raw bytes to the word table.
    pub fn raw_words(mut self, bytes: &[u8]) -> Self {
        self.words.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut data = vec![0u8; WORD_TABLE_OFFSET];
        data[..SIGNATURE.len()].copy_from_slice(&SIGNATURE);
        write_field(&mut data, NAME_RANGE, &self.name);
        write_field(&mut data, TYPE_RANGE, &self.dict_type);
        write_field(&mut data, DESCRIPTION_RANGE, &self.description);
        write_field(&mut data, EXAMPLE_RANGE, &self.example);

        let region = self
            .pinyin_region
            .unwrap_or_else(|| pinyin_region(&self.pinyin));
        data[PINYIN_TABLE_OFFSET..PINYIN_TABLE_OFFSET + region.len()].copy_from_slice(&region);

        data.extend_from_slice(&self.words);
        data
    }
}

fn write_field(data: &mut [u8], range: std::ops::Range<usize>, text: &str) {
    let bytes = utf16le(text);
    assert!(bytes.len() <= range.len(), "header field too long");
    data[range.start..range.start + bytes.len()].copy_from_slice(&bytes);
}

fn pinyin_region(entries: &[(u16, String)]) -> Vec<u8> {
    let size = WORD_TABLE_OFFSET - PINYIN_TABLE_OFFSET;
    let mut region = PINYIN_TABLE_MAGIC.to_vec();
    for (stored_index, text) in entries {
        let text = utf16le(text);
        put_u16(&mut region, *stored_index);
        put_u16(&mut region, text.len() as u16);
        region.extend_from_slice(&text);
    }
    let slack = size - region.len();
    if slack > 0 {
        assert!(slack >= 4, "pinyin region slack too small for a filler entry");
        put_u16(&mut region, u16::MAX);
        put_u16(&mut region, (slack - 4) as u16);
        region.resize(size, 0);
    }
    region
}

/// A dictionary with three syllables and two groups, in file order.
pub fn sample_dict() -> Vec<u8> {
    ScelBuilder::new()
        .name("网络流行新词")
        .description("sample")
        .example("你好")
        .pinyin(0, "ni")
        .pinyin(1, "hao")
        .pinyin(2, "ma")
        .group(&[0, 1], &[("你好", &[0x10, 0x00, 0, 0, 0, 0, 0, 0, 0, 0]), ("拟好", &[0x03, 0x00])])
        .group(&[2], &[("吗", &[])])
        .build()
}
