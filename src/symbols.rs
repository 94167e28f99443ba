//! Opcode dialects and the character mapping built from them.
//!
//! A dialect assigns one canonical character to each of the nine opcodes.
//! Every opcode also has a fixed set of source synonyms (the classic
//! punctuation, the letters, and the alternate letters), and translation
//! rewrites any of those to the canonical character.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::TranslateError;

/// The nine operations of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Plus,
    Minus,
    Previous,
    Next,
    Output,
    Input,
    LoopStart,
    LoopEnd,
    Break,
}

impl Opcode {
    /// All opcodes, in the order their synonym groups are flattened.
    pub const ALL: [Opcode; 9] = [
        Opcode::Plus,
        Opcode::Minus,
        Opcode::Previous,
        Opcode::Next,
        Opcode::Output,
        Opcode::Input,
        Opcode::LoopStart,
        Opcode::LoopEnd,
        Opcode::Break,
    ];

    /// Name used for this opcode in config files.
    pub fn key(self) -> &'static str {
        match self {
            Opcode::Plus => "plus",
            Opcode::Minus => "minus",
            Opcode::Previous => "previous",
            Opcode::Next => "next",
            Opcode::Output => "output",
            Opcode::Input => "input",
            Opcode::LoopStart => "loop_start",
            Opcode::LoopEnd => "loop_end",
            Opcode::Break => "break",
        }
    }

    pub fn from_key(key: &str) -> Option<Opcode> {
        Opcode::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Target character in the built-in letters dialect.
    pub fn default_canonical(self) -> char {
        match self {
            Opcode::Plus => 'o',
            Opcode::Minus => 'i',
            Opcode::Previous => 'a',
            Opcode::Next => 'e',
            Opcode::Output => '.',
            Opcode::Input => ',',
            Opcode::LoopStart => 'u',
            Opcode::LoopEnd => 'y',
            Opcode::Break => '#',
        }
    }

    /// Source characters accepted for this opcode: classic, letters, alternate letters.
    pub fn synonyms(self) -> [char; 3] {
        match self {
            Opcode::Plus => ['+', 'o', 'O'],
            Opcode::Minus => ['-', 'i', 'I'],
            Opcode::Previous => ['<', 'a', 'A'],
            Opcode::Next => ['>', 'e', 'E'],
            Opcode::Output => ['.', '.', '.'],
            Opcode::Input => [',', ',', ','],
            Opcode::LoopStart => ['[', 'u', 'U'],
            Opcode::LoopEnd => [']', 'y', 'Y'],
            Opcode::Break => ['#', '?', '!'],
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An ordered group of characters: the first is the canonical target, the
/// rest are synonyms rewritten to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    canonical: char,
    synonyms: Vec<char>,
}

impl SynonymGroup {
    pub fn new(canonical: char, synonyms: impl IntoIterator<Item = char>) -> Self {
        Self {
            canonical,
            synonyms: synonyms.into_iter().collect(),
        }
    }

    pub fn canonical(&self) -> char {
        self.canonical
    }

    pub fn synonyms(&self) -> &[char] {
        &self.synonyms
    }

    /// Canonical first, then each synonym, in declaration order.
    fn bindings(&self) -> impl Iterator<Item = (char, char)> + '_ {
        std::iter::once(self.canonical)
            .chain(self.synonyms.iter().copied())
            .map(move |source| (source, self.canonical))
    }
}

/// Immutable source -> canonical character mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    map: HashMap<char, char>,
}

impl SymbolTable {
    /// Flatten `groups` in order. A character claimed by more than one group
    /// keeps the binding of the group flattened last.
    pub fn build<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a SynonymGroup>,
    {
        let mut map = HashMap::new();
        for group in groups {
            for (source, target) in group.bindings() {
                if let Some(previous) = map.insert(source, target) {
                    if previous != target {
                        warn!("symbol '{source}' rebound from '{previous}' to '{target}'");
                    }
                }
            }
        }
        debug!("symbol table built with {} entries", map.len());
        Self { map }
    }

    /// Like [`SymbolTable::build`], but a character claimed by two groups
    /// with different targets is an error.
    pub fn build_strict<'a, I>(groups: I) -> Result<Self, TranslateError>
    where
        I: IntoIterator<Item = &'a SynonymGroup>,
    {
        let mut map = HashMap::new();
        for group in groups {
            for (source, target) in group.bindings() {
                match map.insert(source, target) {
                    Some(previous) if previous != target => {
                        return Err(TranslateError::AmbiguousSynonym {
                            symbol: source,
                            first: previous,
                            second: target,
                        });
                    }
                    _ => {}
                }
            }
        }
        debug!("symbol table built with {} entries (strict)", map.len());
        Ok(Self { map })
    }

    pub fn get(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }

    /// Mapped character, or `ch` itself when it is not a declared synonym.
    #[inline]
    pub fn map_char(&self, ch: char) -> char {
        self.get(ch).unwrap_or(ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Canonical character per opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    canonical: [char; 9],
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            canonical: Opcode::ALL.map(Opcode::default_canonical),
        }
    }
}

impl Dialect {
    pub fn canonical(&self, op: Opcode) -> char {
        self.canonical[Self::slot(op)]
    }

    pub fn set_canonical(&mut self, op: Opcode, ch: char) {
        self.canonical[Self::slot(op)] = ch;
    }

    pub fn with_canonical(mut self, op: Opcode, ch: char) -> Self {
        self.set_canonical(op, ch);
        self
    }

    /// One group per opcode, in [`Opcode::ALL`] order.
    pub fn synonym_groups(&self) -> Vec<SynonymGroup> {
        Opcode::ALL
            .into_iter()
            .map(|op| SynonymGroup::new(self.canonical(op), op.synonyms()))
            .collect()
    }

    pub fn symbol_table(&self) -> SymbolTable {
        SymbolTable::build(&self.synonym_groups())
    }

    /// Reject a dialect where two opcodes share a canonical character.
    pub fn validate(&self) -> Result<(), TranslateError> {
        for (i, &first) in Opcode::ALL.iter().enumerate() {
            for &second in &Opcode::ALL[i + 1..] {
                let symbol = self.canonical(first);
                if symbol == self.canonical(second) {
                    return Err(TranslateError::SharedCanonical { symbol, first, second });
                }
            }
        }
        Ok(())
    }

    pub fn strict_symbol_table(&self) -> Result<SymbolTable, TranslateError> {
        self.validate()?;
        SymbolTable::build_strict(&self.synonym_groups())
    }

    // Discriminants follow `Opcode::ALL` order.
    fn slot(op: Opcode) -> usize {
        op as usize
    }
}
