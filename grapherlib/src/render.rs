//! Rendering a table store as fixed-width text.
//!
//! [`print_tables`] walks every table in the store, in store order, and
//! streams one line per sample plus a dash rule to the sink. Per table:
//! an optional header (with `{n}` expanded to the 1-based table number),
//! then for each (input, output) pair a row of
//! `<left-aligned input>|<right-aligned output>` followed by a rule of
//! `pad_length * 2 + 1` dashes. The delimiter is written between tables,
//! never after the last one.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::format::{format_cell_with, format_header, KeyPadding};
use crate::store::TableStore;
use crate::Result;

/// Presentation settings for [`print_tables`].
///
/// Defaults: empty delimiter, no header, padded key cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Written between tables (not after the last one). Note that no
    /// newline is added around it; pass `"\n"` to get a blank line.
    pub delimiter: String,
    /// Printed above each table, with `{n}` replaced by the table number.
    pub header: Option<String>,
    /// Key-cell padding mode.
    pub key_padding: KeyPadding,
}

impl RenderOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inter-table delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the per-table header template.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the key-cell padding mode.
    pub fn key_padding(mut self, key_padding: KeyPadding) -> Self {
        self.key_padding = key_padding;
        self
    }
}

/// Stream every table in `store` to `sink` as fixed-width text.
pub fn print_tables(store: &TableStore, sink: &mut impl Write, options: &RenderOptions) -> Result<()> {
    let pad_length = store.pad_length();
    let pad_char = store.pad_char();
    let rule: String = "-".repeat(pad_length * 2 + 1);

    for (i, table) in store.tables().iter().enumerate() {
        if let Some(template) = &options.header {
            writeln!(sink, "{}", format_header(template, i + 1))?;
        }

        for &(input, output) in table.iter() {
            let key = format_cell_with(input, pad_length, true, pad_char, options.key_padding)?;
            let value = format_cell_with(output, pad_length, false, pad_char, options.key_padding)?;
            writeln!(sink, "{}|{}", key, value)?;
            writeln!(sink, "{}", rule)?;
        }

        if i + 1 != store.len() {
            write!(sink, "{}", options.delimiter)?;
        }
    }

    Ok(())
}

/// [`print_tables`] to standard output.
pub fn print_tables_stdout(store: &TableStore, options: &RenderOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    print_tables(store, &mut lock, options)
}

/// Render every table in `store` into a single string.
pub fn render_to_string(store: &TableStore, options: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    print_tables(store, &mut buf, options)?;
    // Output is built from str/char writes only, so it is valid UTF-8.
    let text = String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::sample::SampleRange;

    fn single_row_store() -> TableStore {
        let mut store = TableStore::new();
        store
            .add_function(&Function::linear(2.0, 0.0), SampleRange::new(1.0, 1.0))
            .unwrap();
        store
    }

    #[test]
    fn test_single_row_round_trip() {
        let store = single_row_store();
        let out = render_to_string(&store, &RenderOptions::new()).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("1.0=========|=========2.0"));
        assert_eq!(lines.next(), Some("-------------------------"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_rule_length_tracks_pad_length() {
        let mut store = single_row_store();
        store.set_pad_length(5);
        let out = render_to_string(&store, &RenderOptions::new()).unwrap();

        let rule = out.lines().nth(1).unwrap();
        assert_eq!(rule, "-----------");
        assert_eq!(rule.len(), 11);
    }

    #[test]
    fn test_header_numbered_per_table() {
        let mut store = TableStore::new();
        let f = Function::constant(0.0);
        store.add_function(&f, SampleRange::new(0.0, 0.0)).unwrap();
        store.add_function(&f, SampleRange::new(0.0, 0.0)).unwrap();

        let options = RenderOptions::new().header("Table {n}");
        let out = render_to_string(&store, &options).unwrap();

        assert!(out.starts_with("Table 1\n"));
        assert!(out.contains("Table 2\n"));
    }

    #[test]
    fn test_delimiter_between_tables_only() {
        let mut store = TableStore::new();
        let f = Function::constant(0.0);
        store.add_function(&f, SampleRange::new(0.0, 0.0)).unwrap();
        store.add_function(&f, SampleRange::new(0.0, 0.0)).unwrap();

        let options = RenderOptions::new().delimiter("\n");
        let out = render_to_string(&store, &options).unwrap();

        // One blank line between the two tables, none at the end.
        assert_eq!(out.matches("\n\n").count(), 1);
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_constant_function_end_to_end() {
        let mut store = TableStore::new();
        store
            .add_function(&Function::constant(6.0), SampleRange::new(4.0, 17.0))
            .unwrap();

        let out = render_to_string(&store, &RenderOptions::new()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // 14 samples (4..=17), each a row plus a rule.
        assert_eq!(lines.len(), 28);
        for (i, line) in lines.iter().enumerate() {
            if i % 2 == 0 {
                assert!(line.ends_with("|=========6.0"), "row {}: {}", i, line);
            } else {
                assert_eq!(*line, "-".repeat(25));
            }
        }
        assert_eq!(lines[0], "4.0=========|=========6.0");
        assert_eq!(lines[26], "17.0========|=========6.0");
    }

    #[test]
    fn test_legacy_key_padding_output() {
        let store = single_row_store();
        let options = RenderOptions::new().key_padding(KeyPadding::LegacyUnpadded);
        let out = render_to_string(&store, &options).unwrap();

        assert_eq!(out.lines().next(), Some("1.0|=========2.0"));
    }

    #[test]
    fn test_render_to_string_with_multibyte_pad_char() {
        let mut store = single_row_store();
        store.set_pad_char('·');

        let out = render_to_string(&store, &RenderOptions::new()).unwrap();
        assert_eq!(out.lines().next(), Some("1.0·········|·········2.0"));
    }

    #[test]
    fn test_empty_store_renders_nothing() {
        let store = TableStore::new();
        let options = RenderOptions::new().header("Table {n}").delimiter("\n");
        let out = render_to_string(&store, &options).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_table_renders_header_only() {
        let mut store = TableStore::new();
        store
            .add_function(&Function::constant(0.0), SampleRange::new(5.0, 0.0))
            .unwrap();

        let options = RenderOptions::new().header("Table {n}");
        let out = render_to_string(&store, &options).unwrap();
        assert_eq!(out, "Table 1\n");
    }
}
