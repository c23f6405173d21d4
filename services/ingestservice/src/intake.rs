//! Channel-fed hosting loop standing in for the event-delivery transport.
//!
//! Each received message is one handler invocation. Malformed and incomplete
//! payloads are logged and dropped so one bad producer cannot stall the
//! stream; a failed ledger write aborts the task and surfaces through
//! `stop()`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use abstractledger::Ledger;
use reformat::{Event, EventHandler, Outcome, ReformatError};

#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Named shared document the pipeline merges into.
    pub document_name: String,
    /// Capacity of the inbound event channel.
    pub event_channel_capacity: usize,
}

impl IntakeConfig {
    pub fn with_document_name(mut self, name: &str) -> Self {
        self.document_name = name.to_string();
        self
    }

    pub fn with_event_channel_capacity(mut self, capacity: usize) -> Self {
        self.event_channel_capacity = capacity;
        self
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            document_name: "sensor-data".to_string(),
            event_channel_capacity: 1024,
        }
    }
}

/// One delivered message: the event plus delivery metadata for logging.
#[derive(Debug, Clone)]
pub struct IntakeMessage {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub event: Event,
}

impl IntakeMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            event,
        }
    }
}

/// Intake = (bounded event channel) + (handler task) + (cancellation).
pub struct Intake {
    join: JoinHandle<Result<()>>,
    events_tx: mpsc::Sender<IntakeMessage>,
    shutdown: CancellationToken,
}

impl Intake {
    pub fn start<L>(cfg: IntakeConfig, ledger: L) -> Self
    where
        L: Ledger + 'static,
    {
        let shutdown = CancellationToken::new();
        let (events_tx, mut events_rx) =
            mpsc::channel::<IntakeMessage>(cfg.event_channel_capacity);

        let handler = EventHandler::new(ledger);
        let task_shutdown = shutdown.clone();

        let join = tokio::spawn(async move {
            info!("Intake started for document '{}'.", cfg.document_name);

            loop {
                tokio::select! {
                    // Queued messages are handled before cancellation so a
                    // closed channel drains instead of dropping its tail.
                    biased;

                    msg = events_rx.recv() => {
                        let msg = match msg {
                            Some(m) => m,
                            None => {
                                info!("Event channel closed. Intake stopping.");
                                break;
                            }
                        };

                        match handler.handle(&msg.event).await {
                            Ok(Outcome::MergeCommitted { key }) => {
                                info!("{}: merged '{}' reading (received {})", msg.id, key, msg.received_at);
                            }
                            Ok(Outcome::Skipped { reading_type }) => {
                                debug!("{}: skipped reading type {:?}", msg.id, reading_type);
                            }
                            Err(e @ ReformatError::LedgerUnavailable(_)) => {
                                // Store is gone; the supervisor owns restarts.
                                return Err(e).context("ledger write failed");
                            }
                            Err(e) => {
                                warn!("{}: dropping event: {e}", msg.id);
                            }
                        }
                    }

                    _ = task_shutdown.cancelled() => {
                        info!("Intake shutdown requested.");
                        break;
                    }
                }
            }

            Ok(())
        });

        Self {
            join,
            events_tx,
            shutdown,
        }
    }

    /// Sender the delivery transport uses to feed events in.
    pub fn events(&self) -> mpsc::Sender<IntakeMessage> {
        self.events_tx.clone()
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub async fn stop(self) -> Result<()> {
        self.shutdown.cancel();
        drop(self.events_tx);
        self.join.await.context("intake join failed")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoryledger::MemoryLedger;
    use serde_json::json;

    fn msg(payload: &str) -> IntakeMessage {
        IntakeMessage::new(Event {
            event_data: payload.to_string(),
        })
    }

    #[tokio::test]
    async fn test_intake_lifecycle() {
        let store = MemoryLedger::new();
        let cfg = IntakeConfig::default();
        let intake = Intake::start(cfg.clone(), store.open(&cfg.document_name));

        let events = intake.events();
        events
            .send(msg(r#"{"type":"temp","ts":1690000000,"tempF":72.5}"#))
            .await
            .unwrap();
        events
            .send(msg(r#"{"type":"imu","ts":1690000001,"x":0.1,"y":0.2,"z":9.8}"#))
            .await
            .unwrap();

        // Dropping the last sender lets the loop drain and stop cleanly.
        drop(events);
        intake.stop().await.unwrap();

        let doc = store.open(&cfg.document_name).fetch_current().await.unwrap();
        assert_eq!(doc["temp"], json!({"ts": 1690000000, "tempF": 72.5}));
        assert_eq!(
            doc["imu"],
            json!({"ts": 1690000001, "x": 0.1, "y": 0.2, "z": 9.8})
        );
    }

    #[tokio::test]
    async fn test_malformed_event_does_not_kill_intake() {
        let store = MemoryLedger::new();
        let cfg = IntakeConfig::default();
        let intake = Intake::start(cfg.clone(), store.open(&cfg.document_name));

        let events = intake.events();
        events.send(msg("not-valid-text")).await.unwrap();
        events
            .send(msg(r#"{"type":"temp","ts":1690000000,"tempF":72.5}"#))
            .await
            .unwrap();

        drop(events);
        intake.stop().await.unwrap();

        let doc = store.open(&cfg.document_name).fetch_current().await.unwrap();
        assert_eq!(doc["temp"], json!({"ts": 1690000000, "tempF": 72.5}));
    }

    #[tokio::test]
    async fn test_unknown_reading_type_leaves_document_untouched() {
        let store = MemoryLedger::new();
        let cfg = IntakeConfig::default();
        let intake = Intake::start(cfg.clone(), store.open(&cfg.document_name));

        let events = intake.events();
        events
            .send(msg(r#"{"type":"humidity","ts":1690000002,"rh":55}"#))
            .await
            .unwrap();

        drop(events);
        intake.stop().await.unwrap();

        let doc = store.open(&cfg.document_name).fetch_current().await.unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn test_config_builders() {
        let cfg = IntakeConfig::default()
            .with_document_name("machine-state")
            .with_event_channel_capacity(8);

        assert_eq!(cfg.document_name, "machine-state");
        assert_eq!(cfg.event_channel_capacity, 8);
    }
}
