use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use itinerary_day_manager::DayManagerHandle;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tracing::Level;
use tracing::event;
use tracing::instrument;

use super::SessionFlow;
use super::SessionLine;
use super::execute;
use crate::attraction::Attraction;
use crate::options_panel::OptionsPanel;

/// Reads commands from stdin until `quit` or end of input.
#[instrument(level = "info", skip_all)]
pub async fn run_session(
    handle: &DayManagerHandle<Attraction>,
    options_panel: &OptionsPanel,
    prompt: &str,
) -> Result<()>
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", prompt);
        std::io::stdout()
            .flush()
            .context("could not write the prompt")?;

        let Some(line) = lines
            .next_line()
            .await
            .context("could not read from stdin")?
        else {
            event!(Level::INFO, "stdin closed, ending the session");
            println!();
            return Ok(());
        };

        let session_line = match SessionLine::parse_line(&line) {
            Ok(Some(session_line)) => session_line,
            Ok(None) => continue,
            Err(clap_error) => {
                if let Err(print_error) = clap_error.print() {
                    event!(Level::WARN, error = %print_error, "could not print the usage");
                }
                continue;
            }
        };

        event!(Level::DEBUG, command = ?session_line.command, "session command");
        if execute(session_line.command, handle, options_panel).await? == SessionFlow::Quit {
            return Ok(());
        }
    }
}
