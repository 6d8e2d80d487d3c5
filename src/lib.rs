//! # scel-reader
//!
//! A reader for Sogou pinyin dictionary files (`.scel`).
//! Decodes the header, pinyin table and word table, and exports the words
//! as ibus dictionary text (`"<word> <pinyin> <count>"` per line).
pub mod scel;

// Re-export the main types for convenience
pub use scel::{
    ScelDict, convert,
    iter::WordInfoIterator,
    types::{
        error::{Region, Result, ScelError},
        models::{PinyinEntry, PinyinTable, ScelHeader, Word, WordGroup, WordInfo},
    },
};
