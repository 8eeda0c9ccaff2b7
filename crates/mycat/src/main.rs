mod exit;
mod logging;
mod run;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use mycat_transfer::Mode;

use crate::exit::{CliResult, SUCCESS, USAGE};
use crate::logging::{init_logging, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "mycat",
    version,
    about = "Concatenate files to standard output",
    disable_help_flag = true
)]
struct Cli {
    /// Help screen.
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// Print with hidden symbols (non-printable bytes as \x00NN).
    #[arg(short = 'A')]
    show_hidden: bool,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,

    /// Files to concatenate, in order.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Mode {
        Mode::from_flags(self.help, self.show_hidden)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE);
        }
    };
    init_logging(cli.log_format, cli.log_level);

    let result = match cli.mode() {
        Mode::Help => print_help(),
        mode => run::run(mode, &cli.files),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

fn print_help() -> CliResult<i32> {
    println!("{}", Cli::command().render_help());
    Ok(SUCCESS)
}
