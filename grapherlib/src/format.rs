//! Fixed-width cell and header formatting.
//!
//! [`format_cell`] fits a value's decimal text into a cell of a fixed
//! length: the text is truncated to at most `length - 1` characters (long
//! mantissas are silently cut, not an error) and the remainder of the cell
//! is filled with the pad character, after the text for left-aligned key
//! cells and before it for right-aligned value cells.
//!
//! [`KeyPadding`] selects between the intended left-alignment behavior and
//! a legacy mode where key cells are emitted without any padding at all.
//! The legacy mode exists for byte-compatibility with output produced by
//! earlier versions of this tool; new callers want [`KeyPadding::Padded`].

use serde::{Deserialize, Serialize};

use crate::error::GrapherError;
use crate::Result;

/// How left-aligned (key) cells are padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyPadding {
    /// Pad key cells out to the full cell length (intended behavior).
    #[default]
    Padded,
    /// Emit key cells unpadded, matching historical output where the key
    /// padding was computed but never appended.
    LegacyUnpadded,
}

/// Canonical decimal text for a value.
///
/// Uses the `{:?}` rendering so integral values keep their fractional
/// marker (`6.0`, not `6`), which the fixed-width output format relies on.
fn value_text(value: f64) -> String {
    format!("{:?}", value)
}

/// Fit `value` into a cell of `length` characters.
///
/// The decimal text is truncated to at most `length - 1` characters, then
/// padded with `pad_char` up to `length`: text first for left alignment
/// (keys), padding first for right alignment (values). A `length` of zero
/// cannot hold any text and is rejected with [`GrapherError::FormatError`].
pub fn format_cell(value: f64, length: usize, align_left: bool, pad_char: char) -> Result<String> {
    format_cell_with(value, length, align_left, pad_char, KeyPadding::Padded)
}

/// [`format_cell`] with an explicit [`KeyPadding`] mode.
pub fn format_cell_with(
    value: f64,
    length: usize,
    align_left: bool,
    pad_char: char,
    key_padding: KeyPadding,
) -> Result<String> {
    if length < 1 {
        return Err(GrapherError::FormatError {
            length,
            reason: "cell length must be at least 1".to_string(),
        });
    }

    let text = value_text(value);
    let cut = text.len().min(length - 1);
    let truncated = &text[..cut];
    let pad_len = length - truncated.len();

    let mut cell = String::with_capacity(length);
    if align_left {
        cell.push_str(truncated);
        if key_padding == KeyPadding::Padded {
            for _ in 0..pad_len {
                cell.push(pad_char);
            }
        }
    } else {
        for _ in 0..pad_len {
            cell.push(pad_char);
        }
        cell.push_str(truncated);
    }

    Ok(cell)
}

/// Expand a header template for one table.
///
/// Every literal `{n}` in `template` is replaced with the decimal text of
/// `table_number` (1-based); templates without the token pass through
/// unchanged.
pub fn format_header(template: &str, table_number: usize) -> String {
    if template.contains("{n}") {
        template.replace("{n}", &table_number.to_string())
    } else {
        template.to_string()
    }
}
