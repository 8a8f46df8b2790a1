//! Subcommand handlers. Each one runs a fresh search and then walks as far
//! down the map → list → detail flow as the subcommand asks.

use anyhow::Context;
use tfind_core::AppConfig;
use tfind_directory::TheatreDirectoryClient;
use tfind_pipeline::{
    CompletionOutcome, DetailWebPresenter, PipelineController, StaticLocation,
};

use crate::render;
use crate::LocationArgs;

fn build_controller(
    config: &AppConfig,
    location: LocationArgs,
) -> anyhow::Result<PipelineController<StaticLocation>> {
    let directory = TheatreDirectoryClient::from_config(config)
        .context("failed to build directory client")?;
    let detail = DetailWebPresenter::with_timeout(config.request_timeout_secs, &config.user_agent)
        .context("failed to build page client")?;
    let platform = StaticLocation::new(config.location_authorization, location.coordinate());
    Ok(PipelineController::new(
        platform,
        directory,
        detail,
        config.search_radius_meters,
    ))
}

/// Runs one search and prints the status label and map.
///
/// # Errors
///
/// Returns an error if no location fix is available or the directory fetch
/// fails. The status label is printed first in both cases.
async fn search(
    config: &AppConfig,
    location: LocationArgs,
) -> anyhow::Result<PipelineController<StaticLocation>> {
    let mut controller = build_controller(config, location)?;

    let outcome = match controller.search().await {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{}", controller.status_text());
            return Err(e.into());
        }
    };

    println!("{}", controller.status_text());
    match outcome {
        CompletionOutcome::Rendered { .. } => {
            if let Some(session) = controller.session() {
                print!("{}", render::session(session));
            }
            print!("{}", render::map(controller.map()));
            Ok(controller)
        }
        CompletionOutcome::Failed(e) => Err(e).context("theatre search failed"),
        CompletionOutcome::Stale { token } => {
            anyhow::bail!("search {token} was superseded before it completed")
        }
    }
}

pub(crate) async fn run_search(config: &AppConfig, location: LocationArgs) -> anyhow::Result<()> {
    search(config, location).await.map(|_| ())
}

pub(crate) async fn run_list(config: &AppConfig, location: LocationArgs) -> anyhow::Result<()> {
    let controller = search(config, location).await?;
    if !controller.details_enabled() {
        return Ok(());
    }
    let list = controller.details()?;
    println!();
    print!("{}", render::rows(list.rows()));
    Ok(())
}

pub(crate) async fn run_open(
    config: &AppConfig,
    location: LocationArgs,
    row: usize,
) -> anyhow::Result<()> {
    let index = row_index(row)?;
    let mut controller = search(config, location).await?;
    let detail = controller.open_detail(index).await?;
    println!();
    print!("{}", render::detail(detail));
    Ok(())
}

pub(crate) async fn run_directions(
    config: &AppConfig,
    location: LocationArgs,
    row: usize,
) -> anyhow::Result<()> {
    let index = row_index(row)?;
    let controller = search(config, location).await?;
    println!("{}", controller.directions(index)?);
    Ok(())
}

/// Converts a 1-based `--row` to a list index.
fn row_index(row: usize) -> anyhow::Result<usize> {
    row.checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("--row is 1-based; 0 is not a row"))
}
