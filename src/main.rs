#![forbid(unsafe_code)]

use clap::Parser;
use phonetik::cli::{Cli, OutputFormat, resolve_text};
use phonetik::output::{HumanFormatter, JsonlFormatter};
use phonetik::{Error, alphabet, render};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(Error::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early: {}", e);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let color_choice = cli.color_choice(io::stdout().is_terminal());
    log::debug!("color choice: {:?}", color_choice);

    let human = HumanFormatter::new(color_choice, cli.layout());

    if cli.list {
        human.write_table_to_stdout(alphabet::entries())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let text = resolve_text(cli.text.clone(), &mut stdin.lock(), stdin_is_terminal)?;

    let tokens = render(&text);

    match cli.format {
        OutputFormat::Human => human.write_to_stdout(&tokens)?,
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&tokens)?,
    }

    Ok(())
}
