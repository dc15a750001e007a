//! Interactive search loop
//!
//! The list is loaded once at startup; every line read from stdin starts a
//! new fetch filtered by that line. A new line cancels whatever fetch or
//! retry is still pending. EOF cancels whatever is still pending and exits.

use anyhow::{Context, Result};
use listfetch_core::{view, FetchController, ListConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::terminal_view::{OutputFormat, TerminalView};

pub async fn run(config: &ListConfig, format: OutputFormat) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut controller =
        FetchController::new(crate::http_source(config)?, tx, config.retry_policy());

    let display = tokio::spawn(async move {
        let mut terminal = TerminalView::new(std::io::stdout(), format);
        view::drive(&mut terminal, rx).await;
    });

    eprintln!("Type a search term and press Enter (empty line shows all, Ctrl-D quits)");

    controller.start("");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read search input")?
    {
        info!("Search requested: {:?}", line);
        controller.start(&line);
    }

    if controller.is_busy() {
        info!("Input closed; cancelling pending fetch");
    } else {
        debug!("Input closed");
    }
    controller.cancel();
    drop(controller);

    display.await.context("Display loop failed")?;
    Ok(())
}
