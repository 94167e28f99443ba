use std::io::{self, IsTerminal, Write};

use crate::TranslateError;
use crate::config::ConfigError;
use crate::theme::DiagnosticStyle;

/// Pretty-print a TranslateError to stderr, prefixed with "{program}: ".
/// Config errors also show the offending line with a caret under the column.
pub fn print_translate_error(program: &str, err: &TranslateError) {
    let style = DiagnosticStyle::for_terminal(io::stderr().is_terminal());
    let label = style.error.paint("error");

    match err {
        TranslateError::Config(cfg) => {
            eprintln!("{program}: {label}: invalid config: {}", cfg.message);
            print_config_context(cfg, &style);
        }
        TranslateError::AmbiguousSynonym { .. } | TranslateError::SharedCanonical { .. } => {
            eprintln!("{program}: {label}: ambiguous dialect: {err}");
        }
        TranslateError::Read { .. } | TranslateError::Write { .. } => {
            eprintln!("{program}: {label}: {err}");
        }
    }
    let _ = io::stderr().flush();
}

/// Print the config line with its number in a gutter and a caret under the
/// offending column, working with UTF-8 by counting chars.
pub fn print_config_context(err: &ConfigError, style: &DiagnosticStyle) {
    let gutter = format!("{:>4} | ", err.line);
    eprintln!("{}{}", style.gutter.paint(gutter.as_str()), err.text);
    eprintln!("{}", caret_line(gutter.chars().count(), err.column, style));
    let _ = io::stderr().flush();
}

fn caret_line(gutter_width: usize, column: usize, style: &DiagnosticStyle) -> String {
    let mut underline = " ".repeat(gutter_width + column.saturating_sub(1));
    underline.push_str(&style.caret.paint("^").to_string());
    underline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_sits_under_column() {
        let line = caret_line(7, 3, &DiagnosticStyle::plain());
        assert_eq!(line, "         ^");
    }

    #[test]
    fn caret_at_first_column() {
        assert_eq!(caret_line(0, 1, &DiagnosticStyle::plain()), "^");
    }
}
