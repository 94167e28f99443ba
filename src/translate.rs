//! Line and document translation.
//!
//! A line is split at the first `//`: characters before it are rewritten
//! through the [`SymbolTable`], the marker and everything after it are kept
//! byte for byte. A document whose first line starts with `#!` keeps that
//! line untouched.

use log::debug;

use crate::symbols::SymbolTable;

/// Start of a line comment.
pub const COMMENT_MARKER: &str = "//";

/// Prefix of an interpreter directive on the first line.
pub const DIRECTIVE_PREFIX: &str = "#!";

/// Rewrite the code region of `line`, leaving any `//` comment as is.
pub fn translate_line(line: &str, table: &SymbolTable) -> String {
    let (code, comment) = match line.find(COMMENT_MARKER) {
        Some(at) => line.split_at(at),
        None => (line, ""),
    };

    let mut out = String::with_capacity(line.len());
    out.extend(code.chars().map(|c| table.map_char(c)));
    out.push_str(comment);
    out
}

/// Index of the first line subject to translation.
pub fn translation_start<S: AsRef<str>>(lines: &[S]) -> usize {
    match lines.first() {
        Some(first) if first.as_ref().starts_with(DIRECTIVE_PREFIX) => 1,
        _ => 0,
    }
}

/// Translate every line of a document, skipping a leading `#!` line.
pub fn translate_document(lines: Vec<String>, table: &SymbolTable) -> Vec<String> {
    let mut lines = lines;
    translate_lines_in_place(&mut lines, table);
    lines
}

pub(crate) fn translate_lines_in_place(lines: &mut [String], table: &SymbolTable) {
    let start = translation_start(&*lines);
    if start > 0 {
        debug!("keeping interpreter directive line unchanged");
    }
    for line in lines.iter_mut().skip(start) {
        *line = translate_line(line, table);
    }
    debug!("translated {} of {} lines", lines.len() - start, lines.len());
}

/// Borrowing translator over a fixed table.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    table: &'t SymbolTable,
}

impl<'t> Translator<'t> {
    pub fn new(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    pub fn line(&self, line: &str) -> String {
        translate_line(line, self.table)
    }

    pub fn document(&self, lines: Vec<String>) -> Vec<String> {
        translate_document(lines, self.table)
    }
}
