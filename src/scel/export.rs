//! ibus text export.
//!
//! One line per record, `"<word> <pinyin> <count>"`, each terminated by a
//! newline. Separators inside words or readings are not escaped.

use std::io::Write;

use crate::scel::types::error::Result;
use crate::scel::types::models::WordInfo;

/// Writes records to `writer` in ibus line format.
///
/// An empty record list still writes the single trailing newline.
pub fn write_ibus<W: Write>(writer: &mut W, infos: &[WordInfo]) -> Result<()> {
    if infos.is_empty() {
        writer.write_all(b"\n")?;
        return Ok(());
    }
    for info in infos {
        writeln!(writer, "{}", info)?;
    }
    Ok(())
}

/// Renders records to an in-memory string in ibus line format.
pub fn to_ibus(infos: &[WordInfo]) -> String {
    let mut text = infos
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}
