//! Minic tokenizer CLI

use clap::Parser;
use minic_error::{Error, Result};
use minic_lexer::tokenize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minic")]
#[command(version = "0.1.0")]
#[command(about = "Minic language tokenizer", long_about = None)]
struct Cli {
    /// Input source file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output report file, one `<line> <column> <text> <kind>` line per token
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input).map_err(|e| Error::ReadInput {
        path: cli.input.clone(),
        source: e,
    })?;

    let tokens = tokenize(&source);

    let mut report = String::new();
    for token in &tokens {
        report.push_str(&token.to_string());
        report.push('\n');
    }

    fs::write(&cli.output, report).map_err(|e| Error::WriteOutput {
        path: cli.output.clone(),
        source: e,
    })?;

    println!("  [ok] Lexer: {} tokens -> {}", tokens.len(), cli.output.display());
    Ok(())
}
