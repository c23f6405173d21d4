use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use abstractledger::Ledger;
use ingestservice::{Intake, IntakeConfig, IntakeMessage};
use memoryledger::MemoryLedger;
use reformat::Event;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let store = MemoryLedger::new();
    let cfg = IntakeConfig::default();
    let document = store.open(&cfg.document_name);

    let intake = Intake::start(cfg, document.clone());
    let events = intake.events();

    // Feed one JSON event per stdin line, as the delivery transport would.
    let feeder = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    let message = IntakeMessage::new(Event { event_data: line });
                    if events.send(message).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("stdin read error: {e}");
                    break;
                }
            }
        }
    });

    info!("Ingest service running. One JSON event per line on stdin, Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;
    info!("Ctrl+C received, shutting down...");

    feeder.abort();
    intake.stop().await?;

    let doc = document.fetch_current().await?;
    info!("Final document: {}", serde_json::to_string(&doc)?);

    Ok(())
}
