//! `.scel` file header parsing.
//!
//! The header is a fixed block at the start of the file: a 12-byte
//! signature followed by four NUL-padded UTF-16LE metadata fields.

use std::ops::Range;

use log::{debug, info};

use crate::scel::layout::{
    DESCRIPTION_RANGE, EXAMPLE_RANGE, NAME_RANGE, PINYIN_TABLE_OFFSET, SIGNATURE, TYPE_RANGE,
};
use crate::scel::types::{
    error::{Region, Result, ScelError},
    models::ScelHeader,
};
use crate::scel::utils;

/// Parses the file header from the start of `data`.
///
/// # Header Structure
/// ```text
/// [0x0000..0x000C] Signature
/// [0x0130..0x0338] Dictionary name
/// [0x0338..0x0540] Dictionary type
/// [0x0540..0x0D40] Description
/// [0x0D40..0x1540] Usage example
/// ```
///
/// The signature is checked before anything else is read.
pub fn parse(data: &[u8]) -> Result<ScelHeader> {
    let signature = data.get(..SIGNATURE.len()).unwrap_or(data);
    if signature != SIGNATURE.as_slice() {
        return Err(ScelError::SignatureMismatch {
            found: signature.to_vec(),
        });
    }

    if data.len() < PINYIN_TABLE_OFFSET {
        return Err(ScelError::Truncated {
            region: Region::Header,
            offset: data.len(),
            needed: PINYIN_TABLE_OFFSET - data.len(),
            remaining: 0,
        });
    }

    let header = ScelHeader {
        signature: SIGNATURE,
        name: read_field(data, NAME_RANGE)?,
        dict_type: read_field(data, TYPE_RANGE)?,
        description: read_field(data, DESCRIPTION_RANGE)?,
        example: read_field(data, EXAMPLE_RANGE)?,
    };
    debug!("Header type='{}', example='{}'", header.dict_type, header.example);
    info!("Header parsed: name='{}'", header.name);

    Ok(header)
}

/// Decodes one fixed-range text field, dropping the NUL padding.
fn read_field(data: &[u8], range: Range<usize>) -> Result<String> {
    let offset = range.start;
    let text = utils::decode_utf16le(&data[range], Region::Header, offset)?;
    Ok(text.trim_end_matches('\0').to_owned())
}
