//! Command-line parameters.
//!
//! This module defines the parameter names and the `Arg` constructors used by the
//! `sbpurge` command, so that the names can be shared between the command
//! definition and the code that reads the parsed matches.

use clap::{Arg, ArgAction};

pub const DEFAULT_API_URL: &str = "https://mapi.storyblok.com/v1/";

// Parameter names
pub const PARAMETER_API_URL: &str = "api-url";
pub const PARAMETER_API_TOKEN: &str = "api-token";
pub const PARAMETER_SPACE_ID: &str = "space-id";
pub const PARAMETER_FOLDER_ID: &str = "folder-id";
pub const PARAMETER_MAX_PAGES: &str = "max-pages";
pub const PARAMETER_TIMEOUT: &str = "timeout";
pub const PARAMETER_DRY_RUN: &str = "dry-run";
pub const PARAMETER_YES: &str = "yes";
pub const PARAMETER_VERBOSE: &str = "verbose";

// Environment variables
pub const ENV_API_URL: &str = "STORYBLOK_API_URL";
pub const ENV_API_TOKEN: &str = "STORYBLOK_API_TOKEN";
pub const ENV_SPACE_ID: &str = "STORYBLOK_SPACE_ID";
pub const ENV_FOLDER_ID: &str = "STORYBLOK_FOLDER_ID";

/// Base URL of the management API.
pub fn api_url_parameter() -> Arg {
    Arg::new(PARAMETER_API_URL)
        .long(PARAMETER_API_URL)
        .num_args(1)
        .required(false)
        .env(ENV_API_URL)
        .default_value(DEFAULT_API_URL)
        .help("Storyblok API URL")
}

/// Management API token. Sent verbatim in the Authorization header.
pub fn api_token_parameter() -> Arg {
    Arg::new(PARAMETER_API_TOKEN)
        .long(PARAMETER_API_TOKEN)
        .num_args(1)
        .required(false)
        .env(ENV_API_TOKEN)
        .hide_env_values(true)
        .help("Storyblok API token")
}

pub fn space_id_parameter() -> Arg {
    Arg::new(PARAMETER_SPACE_ID)
        .long(PARAMETER_SPACE_ID)
        .num_args(1)
        .required(false)
        .env(ENV_SPACE_ID)
        .help("Storyblok space ID")
        .value_parser(clap::value_parser!(u64))
}

pub fn folder_id_parameter() -> Arg {
    Arg::new(PARAMETER_FOLDER_ID)
        .long(PARAMETER_FOLDER_ID)
        .num_args(1)
        .required(false)
        .env(ENV_FOLDER_ID)
        .help("Storyblok assets folder ID")
        .value_parser(clap::value_parser!(u64))
}

pub fn max_pages_parameter() -> Arg {
    Arg::new(PARAMETER_MAX_PAGES)
        .long(PARAMETER_MAX_PAGES)
        .num_args(1)
        .required(false)
        .help("Fail if the folder listing has more than this many non-empty pages")
        .value_parser(clap::value_parser!(u32).range(1..))
}

pub fn timeout_parameter() -> Arg {
    Arg::new(PARAMETER_TIMEOUT)
        .long(PARAMETER_TIMEOUT)
        .num_args(1)
        .required(false)
        .help("Per-request timeout in seconds (no timeout by default)")
        .value_parser(clap::value_parser!(u64).range(1..))
}

pub fn dry_run_parameter() -> Arg {
    Arg::new(PARAMETER_DRY_RUN)
        .long(PARAMETER_DRY_RUN)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("List the assets that would be deleted and exit")
}

pub fn yes_parameter() -> Arg {
    Arg::new(PARAMETER_YES)
        .short('y')
        .long(PARAMETER_YES)
        .action(ArgAction::SetTrue)
        .required(false)
        .conflicts_with(PARAMETER_DRY_RUN)
        .help("Delete without asking for confirmation")
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Enable verbose output for debugging")
}
