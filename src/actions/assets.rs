use crate::{
    configuration::Configuration, error::PurgeError, model::Asset, storyblok::AssetApi,
};
use color_print::cformat;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::StatusCode;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Number of assets requested per listing page.
pub const PAGE_SIZE: u32 = 100;

/// Collect every asset stored in the configured folder.
///
/// Pages are requested one after the other starting at page 1 and the listing
/// ends with the first empty page. Any failure aborts the listing; a partial
/// result is never returned.
pub async fn list_folder_assets<A>(
    api: &A,
    configuration: &Configuration,
) -> Result<Vec<Asset>, PurgeError>
where
    A: AssetApi + ?Sized,
{
    trace!(
        "Listing assets in folder {} of space {}...",
        configuration.folder_id(),
        configuration.space_id()
    );

    let mut assets = Vec::new();
    let mut page = 1;

    loop {
        let batch = api
            .list_assets(
                configuration.space_id(),
                configuration.folder_id(),
                page,
                PAGE_SIZE,
            )
            .await?;

        if batch.is_empty() {
            debug!("Page {} is empty, listing complete", page);
            break;
        }

        if let Some(max_pages) = configuration.max_pages() {
            if page > max_pages {
                return Err(PurgeError::PaginationLimitExceeded { max_pages });
            }
        }

        debug!("Page {} returned {} assets", page, batch.len());
        assets.extend(batch);
        page += 1;
    }

    Ok(assets)
}

/// True when the operator's answer is "yes", ignoring case and surrounding
/// whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Ask the operator to confirm the deletion of `count` assets.
///
/// One line is read from `input`. End of input counts as an empty answer.
pub fn confirm_deletion<R, W>(input: &mut R, prompt: &mut W, count: usize) -> Result<bool, PurgeError>
where
    R: BufRead,
    W: Write,
{
    write!(
        prompt,
        "{}",
        cformat!(
            "You're going to delete <bold>{}</> assets, do you agree? <g>Yes</>/<r>No</> [No] ",
            count
        )
    )
    .map_err(PurgeError::OutputError)?;
    prompt.flush().map_err(PurgeError::OutputError)?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(PurgeError::InputError)?;
    trace!("Operator answered {:?}", answer);

    Ok(is_affirmative(&answer))
}

/// Create the progress bar shown while deleting.
pub fn deletion_progress_bar(len: usize, target: ProgressDrawTarget) -> ProgressBar {
    let progress = ProgressBar::with_draw_target(Some(len as u64), target);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress
}

/// Delete the given assets one at a time, in order.
///
/// The first non-200 answer stops the run with [`PurgeError::DeleteRejected`];
/// assets after it are not attempted and assets before it stay deleted.
/// Returns the number of deleted assets.
pub async fn delete_assets<A>(
    api: &A,
    configuration: &Configuration,
    assets: &[Asset],
    progress: &ProgressBar,
) -> Result<usize, PurgeError>
where
    A: AssetApi + ?Sized,
{
    for asset in assets {
        trace!("Deleting asset {} ({})...", asset.id(), asset.filename());

        let status = match api
            .delete_asset(configuration.space_id(), asset.id())
            .await
        {
            Ok(status) => status,
            Err(e) => {
                progress.abandon();
                return Err(e.into());
            }
        };

        if status != StatusCode::OK {
            progress.abandon_with_message(format!("failed at {}", asset.filename()));
            return Err(PurgeError::DeleteRejected {
                filename: asset.filename().to_string(),
                id: asset.id(),
                status,
            });
        }

        progress.inc(1);
    }

    progress.finish_with_message(format!("deleted {} assets", assets.len()));
    Ok(assets.len())
}
