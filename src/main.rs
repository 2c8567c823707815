use indicatif::ProgressDrawTarget;
use sbpurge::{
    actions::purge::{self, Console, PurgeOutcome},
    commands::create_cli_command,
    configuration::Configuration,
    error::PurgeError,
    logging,
    storyblok::StoryblokApiClient,
};
use std::io;
use tracing::debug;

async fn execute(configuration: &Configuration) -> Result<PurgeOutcome, PurgeError> {
    let api = StoryblokApiClient::from_configuration(configuration)?;
    let console = Console {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
        prompt: io::stderr(),
        progress: ProgressDrawTarget::stderr(),
    };

    purge::run(&api, configuration, console).await
}

fn exit_with(error: PurgeError) -> ! {
    eprintln!("ERROR: {}", error);
    ::std::process::exit(error.exit_code());
}

/// Main entry point for the program
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut command = create_cli_command();
    let matches = command.get_matches_mut();

    let configuration = match Configuration::from_matches(&matches) {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("{}", command.render_usage());
            exit_with(e.into());
        }
    };

    // The subscriber lives for the duration of this run only
    let subscriber = logging::build_subscriber(configuration.verbose());
    let _log_guard = tracing::subscriber::set_default(subscriber);
    debug!("Resolved configuration: {:?}", configuration);

    match execute(&configuration).await {
        Ok(outcome) => debug!("Finished: {:?}", outcome),
        Err(e) => exit_with(e),
    }
}
