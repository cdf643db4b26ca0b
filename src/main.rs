mod application;
mod domain;
mod infrastructure;
mod presentation;

use clap::Parser;
use crate::application::services::ConfigService;
use crate::infrastructure::environment::SystemEnvironment;
use crate::presentation::cli::Cli;

/// oktad: Okta + AWS profile configuration lookup
///
/// Resolves the Okta settings (base URL, app URL) from the first config file
/// found among `--config`, `./.okta` and `~/.okta-aws/config`, and reads role
/// ARNs for named profiles out of `~/.aws/config`.
fn main() {
    let cli = Cli::parse();

    if let Err(err) = infrastructure::logging::init(cli.verbose) {
        eprintln!("{}", err);
    }

    let service = ConfigService::new(Box::new(SystemEnvironment));

    if let Err(err) = cli.run(&service) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
