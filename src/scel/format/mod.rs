//! File format parsing layer for `.scel` dictionaries.
//!
//! Each parser consumes exactly one fixed region of the buffer (see
//! [`layout`](crate::scel::layout)) with its own read cursor:
//!
//! - [`header`]: signature check and metadata fields
//! - [`pinyin`]: the pinyin lookup table
//! - [`words`]: homophone groups, resolved against the pinyin table

pub mod header;
pub mod pinyin;
pub mod words;
