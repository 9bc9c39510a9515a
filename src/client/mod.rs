pub mod protocol;

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use crate::client::protocol::{Envelope, EventFrame, SimulationConfig};
use crate::error::HarnessError;
use crate::generator::{GeneratorConfig, OrderGenerator};

/// What happened during one session, so callers can inspect it after the
/// server hangs up.
#[derive(Debug)]
pub struct SessionReport {
    pub init_sent: bool,
    pub events: Vec<EventFrame>,
}

/// Single-connection test client: connects, sends one simulation config,
/// then logs every inbound event until the server disconnects. No retry,
/// no reconnection, no timeout.
pub struct SimClient {
    url: String,
    sim_config: SimulationConfig,
    order_feed_interval: Option<Duration>,
}

impl SimClient {
    pub fn new(host: &str, port: u16, sim_config: SimulationConfig) -> Self {
        Self {
            url: format!("ws://{host}:{port}"),
            sim_config,
            order_feed_interval: None,
        }
    }

    /// Emit a freshly generated order record on every interval tick, on top
    /// of the one-shot init message.
    pub fn with_order_feed(mut self, interval: Duration) -> Self {
        self.order_feed_interval = Some(interval);
        self
    }

    pub async fn run(self) -> Result<SessionReport, HarnessError> {
        info!(url = %self.url, "connecting to simulation server");
        let (stream, _response) = connect_async(&self.url)
            .await
            .map_err(HarnessError::Connect)?;
        info!("connected to server");

        let (mut sender, mut receiver) = stream.split();

        let envelope = Envelope::init(&self.sim_config)?;
        let frame = EventFrame::client_message(&envelope)?;
        info!("sending simulation configuration");
        sender
            .send(Message::Text(frame.to_text()?))
            .await
            .map_err(HarnessError::Transport)?;

        let mut report = SessionReport {
            init_sent: true,
            events: Vec::new(),
        };

        // Pongs and feed orders both go through one writer task.
        let (out_tx, mut out_rx) = mpsc::channel::<Message>(32);
        let writer = tokio::spawn(async move {
            while let Some(message) = out_rx.recv().await {
                if sender.send(message).await.is_err() {
                    break;
                }
            }
        });

        let feed = self.order_feed_interval.map(|interval| {
            let feed_tx = out_tx.clone();
            tokio::spawn(run_order_feed(interval, feed_tx))
        });

        while let Some(message) = receiver.next().await {
            match message {
                Ok(Message::Text(text)) => match serde_json::from_str::<EventFrame>(&text) {
                    Ok(event) => {
                        info!(event = %event.event, data = %event.data, "received event");
                        report.events.push(event);
                    }
                    Err(err) => warn!(error = %err, raw = %text, "frame is not a named event"),
                },
                Ok(Message::Ping(payload)) => {
                    let _ = out_tx.send(Message::Pong(payload)).await;
                }
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "connection dropped");
                    break;
                }
            }
        }

        if let Some(feed) = feed {
            feed.abort();
        }
        drop(out_tx);
        let _ = writer.await;

        info!("disconnected from server");
        Ok(report)
    }
}

async fn run_order_feed(interval: Duration, out_tx: mpsc::Sender<Message>) {
    let mut generator = OrderGenerator::from_entropy(GeneratorConfig::default());
    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await; // first tick fires immediately

    loop {
        ticker.tick().await;

        let record = generator.next_order().to_record();
        let frame = Envelope::order(&record)
            .and_then(|envelope| EventFrame::client_message(&envelope))
            .and_then(|frame| frame.to_text());

        match frame {
            Ok(text) => {
                info!(order_id = %record.order_id, "sending mock order");
                if out_tx.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            Err(err) => warn!(error = %err, "failed to encode mock order"),
        }
    }
}
