use std::fs;
use std::path::Path;

use log::info;

use crate::TranslateError;
use crate::symbols::SymbolTable;
use crate::translate::translate_lines_in_place;

/// A whole source file held as lines, each keeping its own terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` after every `\n`. A trailing fragment without a
    /// terminator becomes the last line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn read_from(path: &Path) -> Result<Self, TranslateError> {
        let text = fs::read_to_string(path).map_err(|source| TranslateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_text(&text);
        info!("read {} lines from {}", doc.len(), path.display());
        Ok(doc)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), TranslateError> {
        fs::write(path, self.to_text()).map_err(|source| TranslateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("wrote {} lines to {}", self.len(), path.display());
        Ok(())
    }

    /// Translate in place; a `#!` first line is left alone.
    pub fn translate(&mut self, table: &SymbolTable) {
        translate_lines_in_place(&mut self.lines, table);
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
