//! Fixed on-disk layout of a `.scel` file.
//!
//! All integers are little-endian. The file is split into fixed regions:
//!
//! ```text
//! ┌──────────────────────────┐ 0x0000
//! │  Signature (12 bytes)    │ ← header::parse()
//! ├──────────────────────────┤ 0x0130
//! │  Name / Type /           │
//! │  Description / Example   │   (UTF-16LE, NUL padded)
//! ├──────────────────────────┤ 0x1540
//! │  Pinyin table            │ ← pinyin::parse()
//! │  magic + (idx, len, txt)*│
//! ├──────────────────────────┤ 0x2628
//! │  Word table              │ ← words::parse()
//! │  groups until EOF        │
//! └──────────────────────────┘
//! ```

use std::ops::Range;

/// File signature expected in the first 12 bytes.
pub const SIGNATURE: [u8; 12] = [
    0x40, 0x15, 0x00, 0x00, 0x44, 0x43, 0x53, 0x01, 0x01, 0x00, 0x00, 0x00,
];

/// Magic at the start of the pinyin table region.
pub const PINYIN_TABLE_MAGIC: [u8; 4] = [0x9D, 0x01, 0x00, 0x00];

pub const NAME_RANGE: Range<usize> = 0x130..0x338;
pub const TYPE_RANGE: Range<usize> = 0x338..0x540;
pub const DESCRIPTION_RANGE: Range<usize> = 0x540..0xD40;
pub const EXAMPLE_RANGE: Range<usize> = 0xD40..0x1540;

/// Start of the pinyin table; also the end of the header.
pub const PINYIN_TABLE_OFFSET: usize = 0x1540;

/// Start of the word table; also the end of the pinyin table.
pub const WORD_TABLE_OFFSET: usize = 0x2628;

/// Smallest buffer that contains a full header and pinyin table.
pub const MIN_FILE_LEN: usize = WORD_TABLE_OFFSET;

/// Byte width of a frequency field at the head of a word extension.
pub const COUNT_WIDTH: usize = 2;

/// Separator between syllables in a joined pinyin reading.
pub const PINYIN_SEPARATOR: char = '\'';
