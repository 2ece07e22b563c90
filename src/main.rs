use ckprune::app::{handle_fatal_error, init_logging};
use ckprune::cli::{run, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let app_config = cli.app_config();

    init_logging(&app_config);

    if let Err(e) = run(&cli) {
        handle_fatal_error(e, app_config.verbose);
    }
}
