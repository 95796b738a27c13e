use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};

use dualsort::prep::{PrepConfig, preprocess_file};

const USAGE: &str = "Usage: fprep <filename> [-o <output>]";

#[derive(Parser)]
#[command(
    name = "fprep",
    version,
    about = "Drop blank lines, chapter numbers and headings; strip {footnotes}"
)]
struct Cli {
    /// Text file to clean
    input: Option<PathBuf>,

    /// Output file (default: ans_<filename> next to the input)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn run(config: &PrepConfig) -> Result<()> {
    let written = preprocess_file(config)?;
    tracing::info!(lines = written, output = %config.output.display(), "done");
    Ok(())
}

fn main() {
    dualsort::common::reset_sigpipe();

    let cli = Cli::parse();
    dualsort::common::init_tracing(cli.verbose);

    let Some(input) = cli.input else {
        println!("{}", USAGE);
        return;
    };

    let config = PrepConfig::new(input, cli.output);
    if let Err(e) = run(&config) {
        eprintln!("fprep: {}", e);
        process::exit(2);
    }
}
