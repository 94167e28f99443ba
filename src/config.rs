use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cross_xdg::BaseDirs;
use log::{debug, info};

use crate::TranslateError;
use crate::symbols::{Dialect, Opcode};

/// File name looked up under the XDG config home.
pub const CONFIG_FILE_NAME: &str = "bf-letters.toml";

const TOKENS_SECTION: &str = "tokens";

/// A problem in a config file, located by 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("config line {line}, column {column}: {message}")]
pub struct ConfigError {
    pub line: usize,
    pub column: usize,
    pub message: String,
    /// The offending source line, without its terminator.
    pub text: String,
}

impl ConfigError {
    /// `offset` is the byte offset into `text` where the problem starts.
    fn at(line_no: usize, text: &str, offset: usize, message: String) -> Self {
        Self {
            line: line_no,
            column: text[..offset].chars().count() + 1,
            message,
            text: text.to_string(),
        }
    }
}

/// Default config location: `$XDG_CONFIG_HOME/bf-letters.toml`.
pub fn default_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push(CONFIG_FILE_NAME);
    Some(path)
}

/// Resolve the dialect to translate into.
///
/// An explicit path must exist. Without one, the default location is tried
/// and a missing file means the built-in letters dialect.
pub fn load(explicit: Option<&Path>) -> Result<Dialect, TranslateError> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match default_path() {
            Some(p) => (p, false),
            None => return Ok(Dialect::default()),
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => {
            info!("loading dialect from {}", path.display());
            Ok(parse(&content)?)
        }
        Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
            debug!("no config at {}, using built-in dialect", path.display());
            Ok(Dialect::default())
        }
        Err(source) => Err(TranslateError::Read { path, source }),
    }
}

/// Parse the `[tokens]` section of a config file.
///
/// ```toml
/// [tokens]
/// plus = "+"
/// minus = -
/// ```
pub fn parse(content: &str) -> Result<Dialect, ConfigError> {
    let mut dialect = Dialect::default();
    let mut in_tokens = false;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_tokens = line[1..line.len() - 1].trim() == TOKENS_SECTION;
            continue;
        }
        if !in_tokens {
            continue;
        }

        let indent = leading_ws(raw);
        let Some(eq) = line.find('=') else {
            return Err(ConfigError::at(
                line_no,
                raw,
                indent,
                "expected `key = value`".to_string(),
            ));
        };
        let (key_raw, value_raw) = (&line[..eq], &line[eq + 1..]);
        let key = key_raw.trim();
        let value = value_raw.trim();

        let Some(op) = Opcode::from_key(key) else {
            return Err(ConfigError::at(
                line_no,
                raw,
                indent + leading_ws(key_raw),
                format!("unknown opcode `{key}`"),
            ));
        };
        let Some(ch) = parse_token(value) else {
            return Err(ConfigError::at(
                line_no,
                raw,
                indent + eq + 1 + leading_ws(value_raw),
                format!("`{op}` needs exactly one character"),
            ));
        };
        debug!("config sets {op} to '{ch}'");
        dialect.set_canonical(op, ch);
    }

    Ok(dialect)
}

fn leading_ws(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

/// One character, optionally wrapped in double or single quotes.
fn parse_token(value: &str) -> Option<char> {
    let inner = ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .unwrap_or(value);

    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
