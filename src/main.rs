use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use datespan::cli::Cli;
use datespan::output;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let range = datespan::parse(&cli.expression)?;
    let output = output::format_range(&cli.expression, &range, cli.output)?;

    println!("{output}");
    Ok(())
}
