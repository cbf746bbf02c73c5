use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use minmax_heap::repl::{Session, SessionOptions};

#[derive(Parser)]
#[command(name = "minmax-repl", about = "Interactive min-max heap console", version)]
struct Cli {
    /// Do not print the menu and priority prompts
    #[arg(long)]
    quiet: bool,
    /// Do not print the heap after each change
    #[arg(long = "no-dump")]
    no_dump: bool,
    /// Verify the heap after each change and stop on the first violation
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = SessionOptions {
        prompts: !cli.quiet,
        dump: !cli.no_dump,
        check: cli.check,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    session.run().context("console session failed")
}
