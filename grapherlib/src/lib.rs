//! # grapherlib
//!
//! A function-table engine: sample mathematical functions over a range of
//! inputs, keep the resulting (input, output) tables in an ordered store,
//! and render them as fixed-width, human-readable text.
//!
//! ## Overview
//!
//! The library is built from small, synchronous pieces:
//!
//! - **Function**: a closed set of variants (constant, linear, arbitrary
//!   closure) behind one `evaluate(x) -> y` capability
//! - **Sampler**: walks `min..=max` by `step` and collects the samples of
//!   one function into an ordered [`Table`]
//! - **Table store**: owns every table created in a session, plus the pad
//!   length and pad character used for display
//! - **Formatter**: fits values into fixed-width padded cells and expands
//!   `{n}` in header templates to the table number
//! - **Renderer**: streams the whole store to any [`std::io::Write`] sink,
//!   one row and one dash rule per sample
//!
//! ## Features
//!
//! - **Deterministic output**: pure in-memory data, no I/O besides the
//!   final sink writes
//! - **Read-only views**: `tables()` hands out a shared slice, so the
//!   store cannot be restructured mid-render
//! - **Legacy byte compatibility**: [`KeyPadding::LegacyUnpadded`]
//!   reproduces historical output where key cells were left unpadded
//!
//! ## Example
//!
//! ```rust
//! use grapherlib::{print_tables, Function, RenderOptions, SampleRange, TableStore};
//!
//! let mut store = TableStore::new();
//! store.add_function(&Function::constant(6.0), SampleRange::new(4.0, 17.0)).unwrap();
//! store.add_function(&Function::linear(3.0, 4.0), SampleRange::new(0.0, 5.0).step(0.5)).unwrap();
//!
//! let options = RenderOptions::new().header("Table {n}").delimiter("\n");
//! let mut out = Vec::new();
//! print_tables(&store, &mut out, &options).unwrap();
//! assert!(out.starts_with(b"Table 1\n4.0=========|=========6.0\n"));
//! ```

pub mod error;
pub mod format;
pub mod function;
pub mod render;
pub mod sample;
pub mod store;

pub use error::GrapherError;
pub use format::{format_cell, format_header, KeyPadding};
pub use function::Function;
pub use render::{print_tables, print_tables_stdout, render_to_string, RenderOptions};
pub use sample::{sample, SampleRange, Table};
pub use store::{TableStore, DEFAULT_PAD_CHAR, DEFAULT_PAD_LENGTH};

/// Result type for grapherlib operations
pub type Result<T> = std::result::Result<T, GrapherError>;
