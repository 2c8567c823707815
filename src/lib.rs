//! Bulk deletion of the assets in a Storyblok asset folder.
//!
//! # Modules
//!
//! - `actions`: the purge workflow (listing, confirmation, deletion)
//! - `commands`: CLI command definition
//! - `configuration`: run configuration resolved from the command line
//! - `error`: top-level error type and exit codes
//! - `logging`: log subscriber construction
//! - `model`: asset records as returned by the API
//! - `storyblok`: management API client

pub mod actions;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod logging;
pub mod model;
pub mod storyblok;
