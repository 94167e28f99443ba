//! Dialect translator for Brainfuck-family source text.
//!
//! Programs written with the classic punctuation opcodes (`+-<>.,[]`) or with
//! the alternate upper-case letters are rewritten into the canonical letters
//! dialect (`o i a e . , u y`, with `#` as the debug break).
//!
//! Behaviors:
//! - Translation is a per-character table lookup; characters that are not a
//!   known synonym pass through unchanged.
//! - Everything from the first `//` on a line is left untouched.
//! - A first line starting with `#!` is kept verbatim.
//! - Canonical characters map to themselves, so translating twice is the same
//!   as translating once.
//!
//! Quick start:
//!
//! ```
//! use bf_letters::{Dialect, Document};
//!
//! let table = Dialect::default().symbol_table();
//! let mut doc = Document::from_text("#!/usr/bin/env bf\n+[->+<] // add\n");
//! doc.translate(&table);
//! assert_eq!(doc.to_text(), "#!/usr/bin/env bf\nouieoay // add\n");
//! ```

use std::path::PathBuf;

pub mod cli_util;
pub mod commands;
pub mod config;
pub mod document;
pub mod symbols;
pub mod theme;
pub mod translate;

pub use config::ConfigError;
pub use document::Document;
pub use symbols::{Dialect, Opcode, SymbolTable, SynonymGroup};
pub use translate::{Translator, translate_document, translate_line};

/// Errors raised while building a table or moving a document through files.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The input file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two synonym groups claim the same source character.
    #[error("symbol '{symbol}' maps to both '{first}' and '{second}'")]
    AmbiguousSynonym { symbol: char, first: char, second: char },

    /// Two opcodes were given the same canonical character.
    #[error("opcodes `{first}` and `{second}` both translate to '{symbol}'")]
    SharedCanonical {
        symbol: char,
        first: Opcode,
        second: Opcode,
    },

    /// The config file is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
