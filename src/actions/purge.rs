//! The purge workflow: list the folder, confirm, delete.

use crate::{
    actions::assets::{confirm_deletion, deletion_progress_bar, delete_assets, list_folder_assets},
    configuration::Configuration,
    error::PurgeError,
    storyblok::AssetApi,
};
use indicatif::ProgressDrawTarget;
use std::io::{BufRead, Write};
use tracing::info;

/// How a purge run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// Every listed asset was deleted.
    Deleted(usize),
    /// The operator did not confirm; nothing was deleted.
    Declined,
    /// The folder holds no assets.
    Empty,
    /// The assets were listed but not deleted.
    DryRun(usize),
}

/// Terminal streams used by a purge run.
pub struct Console<R, O, E> {
    /// Where the confirmation answer is read from.
    pub input: R,
    /// Where dry-run listings are written.
    pub output: O,
    /// Where the confirmation prompt is written.
    pub prompt: E,
    /// Where the deletion progress bar is drawn.
    pub progress: ProgressDrawTarget,
}

/// Run the purge against `api`.
pub async fn run<A, R, O, E>(
    api: &A,
    configuration: &Configuration,
    console: Console<R, O, E>,
) -> Result<PurgeOutcome, PurgeError>
where
    A: AssetApi + ?Sized,
    R: BufRead,
    O: Write,
    E: Write,
{
    let Console {
        mut input,
        mut output,
        mut prompt,
        progress,
    } = console;

    info!(
        "Listing assets in folder {} of space {}...",
        configuration.folder_id(),
        configuration.space_id()
    );
    let assets = list_folder_assets(api, configuration).await?;

    if configuration.dry_run() {
        for asset in &assets {
            writeln!(output, "{}\t{}", asset.id(), asset.filename())
                .map_err(PurgeError::OutputError)?;
        }
        output.flush().map_err(PurgeError::OutputError)?;
        info!("Dry run: {} assets would be deleted", assets.len());
        return Ok(PurgeOutcome::DryRun(assets.len()));
    }

    if assets.is_empty() {
        info!("No assets found in folder {}", configuration.folder_id());
        return Ok(PurgeOutcome::Empty);
    }

    let confirmed = if configuration.assume_yes() {
        info!("Deleting {} assets without confirmation (--yes)", assets.len());
        true
    } else {
        confirm_deletion(&mut input, &mut prompt, assets.len())?
    };

    if !confirmed {
        info!("Exiting...");
        return Ok(PurgeOutcome::Declined);
    }

    info!("Deleting assets...");
    let progress = deletion_progress_bar(assets.len(), progress);
    let deleted = delete_assets(api, configuration, &assets, &progress).await?;
    info!("Assets deleted");

    Ok(PurgeOutcome::Deleted(deleted))
}
