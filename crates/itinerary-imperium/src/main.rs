mod attraction;
mod commands;
mod logging;
mod options_panel;
mod terminal_day;

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use commands::session::run_session;
use itinerary_configuration::ClientConfigurations;
use itinerary_day_manager::DayCollectionManager;
use itinerary_day_manager::DayManagerActor;
use itinerary_day_manager::DayRequestMessage;
use itinerary_remote::HttpAttractionCatalog;
use itinerary_remote::HttpDayStore;
use itinerary_remote::RemoteClient;
use options_panel::OptionsPanel;
use terminal_day::TerminalDayFactory;
use tracing::Level;
use tracing::event;

#[derive(Parser)]
#[command(name = "itinerary", author, version, about, long_about = None)]
pub struct Cli
{
    /// Configuration file, overrides `ITINERARY_CONFIGURATION`
    #[arg(long = "configuration")]
    configuration: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()>
{
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let _worker_guard = logging::setup_logging()?;

    let client_configurations = match &cli.configuration {
        Some(path) => ClientConfigurations::read_with_overrides(path)?,
        None => ClientConfigurations::read_from_env()?,
    };
    event!(
        Level::INFO,
        base_url = %client_configurations.remote.base_url,
        "configuration read"
    );

    let remote_client = RemoteClient::new(client_configurations.remote.clone())?;
    let day_store = HttpDayStore::from_client(remote_client.clone());
    let attraction_catalog = HttpAttractionCatalog::from_client(remote_client);

    let manager = DayCollectionManager::new(day_store, TerminalDayFactory);
    let (handle, join_handle) = DayManagerActor::builder()
        .manager(manager)
        .add_day_policy(client_configurations.session.add_day_policy)
        .build()?;

    handle.send(DayRequestMessage::Load)?;
    let options_panel = OptionsPanel::populate(&attraction_catalog).await;

    let session_result = run_session(
        &handle,
        &options_panel,
        &client_configurations.session.prompt,
    )
    .await;

    drop(handle);
    join_handle
        .await
        .context("the day manager did not shut down cleanly")?;

    session_result
}
