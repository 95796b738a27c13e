use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};

use dualsort::dsort::{DualSortConfig, run};

const USAGE: &str = "Usage: fdsort <input-file> <output-forward> <output-backward>";

#[derive(Parser)]
#[command(
    name = "fdsort",
    version,
    about = "Sort lines by their first and by their last letters"
)]
struct Cli {
    /// Text file to sort
    input: Option<PathBuf>,

    /// Where to write lines ordered from the start of each line
    output_forward: Option<PathBuf>,

    /// Where to write lines ordered from the end of each line
    output_backward: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    dualsort::common::reset_sigpipe();

    let cli = Cli::parse();
    dualsort::common::init_tracing(cli.verbose);

    let (Some(input), Some(forward_output), Some(backward_output)) =
        (cli.input, cli.output_forward, cli.output_backward)
    else {
        println!("{}", USAGE);
        return;
    };

    let config = DualSortConfig {
        input,
        forward_output,
        backward_output,
    };

    match run(&config) {
        Ok(summary) => {
            tracing::info!(
                bytes = summary.bytes,
                lines = summary.lines,
                "sorted {} in both directions",
                config.input.display()
            );
        }
        Err(e) => {
            eprintln!("fdsort: {}", e);
            process::exit(2);
        }
    }
}
