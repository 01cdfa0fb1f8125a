use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for stencil.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template files to expand (`-` or no inputs reads stdin).
    #[arg(value_name = "TEMPLATE")]
    pub inputs: Vec<String>,

    /// Output file, `-` for stdout, or a `/`-pattern deriving the name
    /// from the input (repeatable, paired with inputs in order).
    #[arg(short = 'o', long = "out", value_name = "OUTPUT")]
    pub outputs: Vec<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
