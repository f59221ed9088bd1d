mod cli;
mod document;
mod encoding;
mod envelope;
mod epub_reader;
mod error;
mod headings;
mod markup;
mod parser;
mod segmenter;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = cli::Cli::parse();

    let envelope = parser::run(&cli);

    // Envelope on stdout for the host; summary on stderr for humans.
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Error: failed to serialize result: {err}");
            return ExitCode::FAILURE;
        }
    }

    match (&envelope.data, &envelope.error) {
        (Some(document), _) => eprintln!(
            "Parsed {} chapters from {}",
            document.chapters.len(),
            cli.input.display()
        ),
        (None, Some(message)) => eprintln!("Error: {message}"),
        (None, None) => {}
    }

    if envelope.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
