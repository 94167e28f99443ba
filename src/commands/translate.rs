use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args};
use log::{debug, info};

use crate::cli_util::print_translate_error;
use crate::config;
use crate::document::Document;
use crate::symbols::Dialect;
use crate::theme::DiagnosticStyle;
use crate::TranslateError;

pub const DEFAULT_INPUT: &str = "input.bf";
pub const DEFAULT_OUTPUT: &str = "output.bf";

#[derive(Args, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct TranslateArgs {
    /// Source file to translate (default: input.bf)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Destination file (default: output.bf)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Dialect config overriding the canonical tokens
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not echo the translated text to stdout
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Show this help
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

impl TranslateArgs {
    /// 1 default, 2 verbose, 3+ very verbose. `--quiet` only affects the echo.
    pub fn verbosity(&self) -> u8 {
        self.verbose.saturating_add(1)
    }
}

pub fn run(program: &str, args: TranslateArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let TranslateArgs {
        input,
        output,
        config,
        quiet,
        ..
    } = args;

    let input = input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match translate_file(&input, &output, config.as_deref()) {
        Ok(doc) => {
            if doc.is_empty() {
                let style = DiagnosticStyle::for_terminal(io::stderr().is_terminal());
                eprintln!(
                    "{program}: {}: {} is empty",
                    style.warning.paint("warning"),
                    input.display()
                );
                let _ = io::stderr().flush();
            }
            if !quiet {
                println!("{}", doc.to_text());
                let _ = io::stdout().flush();
            }
            0
        }
        Err(err) => {
            print_translate_error(program, &err);
            1
        }
    }
}

/// Read `input`, translate it with the configured dialect, write `output`.
pub fn translate_file(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
) -> Result<Document, TranslateError> {
    let dialect = config::load(config_path)?;
    let table = if dialect == Dialect::default() {
        dialect.symbol_table()
    } else {
        debug!("custom dialect, checking for ambiguous synonyms");
        dialect.strict_symbol_table()?
    };

    let mut doc = Document::read_from(input)?;
    doc.translate(&table);
    doc.write_to(output)?;
    info!("translated {} -> {}", input.display(), output.display());
    Ok(doc)
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [-i <PATH>] [-o <PATH>]

Options:
  --input,   -i <PATH>  Source file to translate (default: {1})
  --output,  -o <PATH>  Destination file (default: {2})
  --config,  -c <PATH>  Dialect config (default: $XDG_CONFIG_HOME/{3} if present)
  --verbose, -v         More log output on stderr (repeat for debug)
  --quiet,   -q         Do not echo the translated text to stdout
  --help,    -h         Show this help

Description:
  Rewrites Brainfuck source written with punctuation (+-<>.,[]) or the
  alternate letters (O I A E U Y !) into the letters dialect (o i a e u y #).

Notes:
  - Everything after `//` on a line is copied unchanged.
  - A first line starting with `#!` is copied unchanged.
  - Characters that are not opcodes pass through as they are.
  - The result is written to the output file and echoed to stdout.

Config (translate back to classic punctuation):
    [tokens]
    plus = "+"
    loop_start = "["
"#,
        program,
        DEFAULT_INPUT,
        DEFAULT_OUTPUT,
        config::CONFIG_FILE_NAME,
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
