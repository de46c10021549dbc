use clap::Parser;
use nozomi_core::{config, logging};

mod cli;

use crate::cli::Cli;

fn main() {
    // Parse first so --help and usage errors touch neither config nor logs.
    let cli = Cli::parse();

    let (cfg, origin) = config::or_defaults(config::load_or_init());

    if logging::init_logging(&cfg.log_filter).is_err() {
        logging::init_logging_stderr(&cfg.log_filter);
    }
    origin.log();

    if let Err(err) = cli.command.run(&cfg, &mut std::io::stdout().lock()) {
        eprintln!("nozomi error: {:#}", err);
        std::process::exit(1);
    }
}
