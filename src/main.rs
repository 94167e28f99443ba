use std::env;
use std::io::Write;

use bf_letters::commands::translate::{self, TranslateArgs};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "bf-letters", disable_help_flag = true)]
struct Cli {
    #[command(flatten)]
    args: TranslateArgs,
}

fn main() {
    let program = env::args().next().unwrap_or_else(|| String::from("bf-letters"));

    let cli = Cli::parse();

    let log_level = match cli.args.verbosity() {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let code = translate::run(&program, cli.args);
    std::process::exit(code);
}
