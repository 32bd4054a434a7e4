//! The table store: an ordered collection of sampled tables.
//!
//! A [`TableStore`] owns every [`Table`] created in a session, in creation
//! order, together with the two render settings (pad length and pad
//! character) that apply to all of them. Tables are appended by
//! [`TableStore::add_function`] and dropped by [`TableStore::remove_table`];
//! indices are contiguous from 0 and removal shifts later tables down.

use crate::error::GrapherError;
use crate::function::Function;
use crate::sample::{sample, SampleRange, Table};
use crate::Result;

/// Default cell width, in characters.
pub const DEFAULT_PAD_LENGTH: usize = 12;

/// Default fill character for cells.
pub const DEFAULT_PAD_CHAR: char = '=';

/// Ordered collection of sampled tables plus their render settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStore {
    tables: Vec<Table>,
    pad_length: usize,
    pad_char: char,
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStore {
    /// Create an empty store with the default pad length (12) and pad
    /// character (`=`).
    pub fn new() -> Self {
        Self::with_padding(DEFAULT_PAD_LENGTH, DEFAULT_PAD_CHAR)
    }

    /// Create an empty store with explicit render settings.
    pub fn with_padding(pad_length: usize, pad_char: char) -> Self {
        Self {
            tables: Vec::new(),
            pad_length,
            pad_char,
        }
    }

    /// Create an empty store with the default pad length and the given
    /// pad character.
    pub fn with_pad_char(pad_char: char) -> Self {
        Self::with_padding(DEFAULT_PAD_LENGTH, pad_char)
    }

    /// Sample `function` over `range` and append the resulting table.
    ///
    /// Returns the new table's index. On a sampling error nothing is
    /// appended and the store is unchanged.
    pub fn add_function(&mut self, function: &Function, range: SampleRange) -> Result<usize> {
        let table = sample(function, range)?;
        self.tables.push(table);
        Ok(self.tables.len() - 1)
    }

    /// Remove the table at `index`, shifting later tables down.
    ///
    /// An out-of-range index is a silent no-op, not an error. Callers that
    /// want strict bounds checking should [`get`](Self::get) first.
    pub fn remove_table(&mut self, index: usize) {
        if index < self.tables.len() {
            self.tables.remove(index);
        }
    }

    /// Read-only view over the tables in creation order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The table at `index`, or [`GrapherError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&Table> {
        self.tables.get(index).ok_or(GrapherError::IndexOutOfRange {
            index,
            len: self.tables.len(),
        })
    }

    /// Number of tables in the store.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True if the store holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Cell width used when rendering.
    pub fn pad_length(&self) -> usize {
        self.pad_length
    }

    /// Set the cell width used when rendering.
    pub fn set_pad_length(&mut self, pad_length: usize) {
        self.pad_length = pad_length;
    }

    /// Fill character used when rendering.
    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    /// Set the fill character used when rendering.
    pub fn set_pad_char(&mut self, pad_char: char) {
        self.pad_char = pad_char;
    }
}
