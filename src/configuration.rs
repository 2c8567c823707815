use crate::commands::params::{
    DEFAULT_API_URL, PARAMETER_API_TOKEN, PARAMETER_API_URL, PARAMETER_DRY_RUN,
    PARAMETER_FOLDER_ID, PARAMETER_MAX_PAGES, PARAMETER_SPACE_ID, PARAMETER_TIMEOUT,
    PARAMETER_VERBOSE, PARAMETER_YES,
};
use clap::ArgMatches;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
}

impl ConfigurationError {
    fn missing(name: &str) -> Self {
        ConfigurationError::MissingRequiredPropertyValue {
            name: name.to_string(),
        }
    }
}

/// Everything the purge needs to know, resolved from the command line.
#[derive(Clone, PartialEq)]
pub struct Configuration {
    api_url: String,
    api_token: String,
    space_id: u64,
    folder_id: u64,
    max_pages: Option<u32>,
    timeout: Option<u64>,
    dry_run: bool,
    assume_yes: bool,
    verbose: bool,
}

impl Configuration {
    /// Create a configuration with the required values and all options off.
    pub fn new(api_url: &str, api_token: &str, space_id: u64, folder_id: u64) -> Configuration {
        Configuration {
            api_url: api_url.to_string(),
            api_token: api_token.to_string(),
            space_id,
            folder_id,
            max_pages: None,
            timeout: None,
            dry_run: false,
            assume_yes: false,
            verbose: false,
        }
    }

    /// Build the configuration from parsed command-line matches.
    ///
    /// The token must be present and non-empty, and both identifiers must be
    /// present and non-zero. The API URL is taken as given.
    pub fn from_matches(matches: &ArgMatches) -> Result<Configuration, ConfigurationError> {
        let api_url = matches
            .get_one::<String>(PARAMETER_API_URL)
            .map(String::as_str)
            .unwrap_or(DEFAULT_API_URL);

        let api_token = matches
            .get_one::<String>(PARAMETER_API_TOKEN)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigurationError::missing(PARAMETER_API_TOKEN))?;

        let space_id = matches
            .get_one::<u64>(PARAMETER_SPACE_ID)
            .copied()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigurationError::missing(PARAMETER_SPACE_ID))?;

        let folder_id = matches
            .get_one::<u64>(PARAMETER_FOLDER_ID)
            .copied()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigurationError::missing(PARAMETER_FOLDER_ID))?;

        let mut configuration = Configuration::new(api_url, api_token, space_id, folder_id);
        configuration.max_pages = matches.get_one::<u32>(PARAMETER_MAX_PAGES).copied();
        configuration.timeout = matches.get_one::<u64>(PARAMETER_TIMEOUT).copied();
        configuration.dry_run = matches.get_flag(PARAMETER_DRY_RUN);
        configuration.assume_yes = matches.get_flag(PARAMETER_YES);
        configuration.verbose = matches.get_flag(PARAMETER_VERBOSE);

        Ok(configuration)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn space_id(&self) -> u64 {
        self.space_id
    }

    pub fn folder_id(&self) -> u64 {
        self.folder_id
    }

    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Request timeout in seconds, if one was requested.
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn assume_yes(&self) -> bool {
        self.assume_yes
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}

// The token never shows up in logs.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("space_id", &self.space_id)
            .field("folder_id", &self.folder_id)
            .field("max_pages", &self.max_pages)
            .field("timeout", &self.timeout)
            .field("dry_run", &self.dry_run)
            .field("assume_yes", &self.assume_yes)
            .field("verbose", &self.verbose)
            .finish()
    }
}
