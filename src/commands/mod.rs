//! CLI command definition.
//!
//! The command line is defined with the clap builder API. Every flag is optional
//! in form; the required ones are enforced by
//! [`Configuration::from_matches`](crate::configuration::Configuration::from_matches)
//! so that a missing value produces the usage text and the usage exit code.

use clap::Command;

pub mod params;

pub use params::{
    DEFAULT_API_URL, PARAMETER_API_TOKEN, PARAMETER_API_URL, PARAMETER_DRY_RUN,
    PARAMETER_FOLDER_ID, PARAMETER_MAX_PAGES, PARAMETER_SPACE_ID, PARAMETER_TIMEOUT,
    PARAMETER_VERBOSE, PARAMETER_YES,
};

/// Create the `sbpurge` command with all of its arguments.
///
/// The command is returned unparsed so that callers can either parse the process
/// arguments or, in tests, an explicit argument list.
pub fn create_cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(params::api_url_parameter())
        .arg(params::api_token_parameter())
        .arg(params::space_id_parameter())
        .arg(params::folder_id_parameter())
        .arg(params::max_pages_parameter())
        .arg(params::timeout_parameter())
        .arg(params::dry_run_parameter())
        .arg(params::yes_parameter())
        .arg(params::verbose_parameter())
}
