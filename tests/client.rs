use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::timeout;

use sim_harness::client::protocol::{Envelope, EventFrame, SimulationConfig, CLIENT_EVENT};
use sim_harness::client::{SessionReport, SimClient};
use sim_harness::error::HarnessError;

const RUN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
enum Script {
    /// Accept the connection and close it right away.
    CloseImmediately,
    /// Capture the first n text frames from the client, then close.
    CaptureFrames(usize),
    /// Wait for the init frame, emit the given events, then close.
    EmitEvents(Vec<EventFrame>),
}

struct MockState {
    script: Script,
    frames_tx: mpsc::UnboundedSender<String>,
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<MockState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| drive(socket, state))
}

async fn drive(mut socket: WebSocket, state: Arc<MockState>) {
    match &state.script {
        Script::CloseImmediately => {}
        Script::CaptureFrames(count) => {
            let mut captured = 0;
            while captured < *count {
                match socket.recv().await {
                    Some(Ok(Message::Text(text))) => {
                        let _ = state.frames_tx.send(text);
                        captured += 1;
                    }
                    Some(Ok(_)) => {}
                    _ => break,
                }
            }
        }
        Script::EmitEvents(events) => {
            while let Some(Ok(message)) = socket.recv().await {
                if let Message::Text(text) = message {
                    let _ = state.frames_tx.send(text);
                    break;
                }
            }
            for event in events {
                let text = serde_json::to_string(event).unwrap();
                if socket.send(Message::Text(text)).await.is_err() {
                    return;
                }
            }
        }
    }

    let _ = socket.send(Message::Close(None)).await;
}

async fn spawn_mock(script: Script) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let (frames_tx, frames_rx) = mpsc::unbounded_channel();
    let state = Arc::new(MockState { script, frames_tx });
    let app = Router::new().route("/", get(ws_handler)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, frames_rx)
}

async fn run_client(client: SimClient) -> Result<SessionReport, HarnessError> {
    timeout(RUN_TIMEOUT, client.run()).await.unwrap()
}

fn unwrap_envelope(raw: &str) -> Envelope {
    let frame: EventFrame = serde_json::from_str(raw).unwrap();
    assert_eq!(frame.event, CLIENT_EVENT);
    serde_json::from_str(frame.data.as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn immediate_disconnect_yields_a_clean_empty_session() {
    let (addr, _frames) = spawn_mock(Script::CloseImmediately).await;

    let client = SimClient::new("127.0.0.1", addr.port(), SimulationConfig::default());
    let report = run_client(client).await.unwrap();

    assert!(report.init_sent);
    assert!(report.events.is_empty());
}

#[tokio::test]
async fn init_frame_carries_the_default_simulation_config() {
    let (addr, mut frames) = spawn_mock(Script::CaptureFrames(1)).await;

    let client = SimClient::new("127.0.0.1", addr.port(), SimulationConfig::default());
    let report = run_client(client).await.unwrap();
    assert!(report.init_sent);

    let raw = frames.recv().await.unwrap();
    let envelope = unwrap_envelope(&raw);
    assert_eq!(envelope.message_type, "init");

    let config: serde_json::Value = serde_json::from_str(&envelope.message).unwrap();
    assert_eq!(config["drone_count"], 5);
    assert_eq!(config["rider_count"], 10);
    assert_eq!(config["map_name"], "hkust-gz-v-5-new");
}

#[tokio::test]
async fn server_events_are_collected_in_order_and_uninterpreted() {
    let emitted = vec![
        EventFrame {
            event: "order-status".to_string(),
            data: json!({ "order_id": "ORDER-1234", "status": "received" }),
        },
        EventFrame {
            event: "drone-position".to_string(),
            data: json!({ "drone_id": 2, "coordinates": [22.59, 113.97, 40.0] }),
        },
        EventFrame {
            event: "simulation-finished".to_string(),
            data: serde_json::Value::Null,
        },
    ];
    let (addr, mut frames) = spawn_mock(Script::EmitEvents(emitted.clone())).await;

    let client = SimClient::new("127.0.0.1", addr.port(), SimulationConfig::default());
    let report = run_client(client).await.unwrap();

    assert_eq!(report.events, emitted);

    // the only thing the client sent was the init frame
    let raw = frames.recv().await.unwrap();
    assert_eq!(unwrap_envelope(&raw).message_type, "init");
    assert!(frames.try_recv().is_err());
}

#[tokio::test]
async fn order_feed_emits_order_records_after_init() {
    let (addr, mut frames) = spawn_mock(Script::CaptureFrames(2)).await;

    let client = SimClient::new("127.0.0.1", addr.port(), SimulationConfig::default())
        .with_order_feed(Duration::from_millis(50));
    let report = run_client(client).await.unwrap();
    assert!(report.init_sent);

    let first = unwrap_envelope(&frames.recv().await.unwrap());
    assert_eq!(first.message_type, "init");

    let second = unwrap_envelope(&frames.recv().await.unwrap());
    assert_eq!(second.message_type, "order");

    let record: serde_json::Value = serde_json::from_str(&second.message).unwrap();
    assert!(record["order_id"].as_str().unwrap().starts_with("ORDER-"));
    assert_eq!(record["order_mode"], 0);
    let price = record["good"]["price"].as_u64().unwrap();
    assert!((10..=100).contains(&price));
}

#[tokio::test]
async fn refused_connection_propagates_as_an_error() {
    // grab a port nobody is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = SimClient::new("127.0.0.1", port, SimulationConfig::default());
    let err = run_client(client).await.unwrap_err();

    assert!(matches!(err, HarnessError::Connect(_)));
}
