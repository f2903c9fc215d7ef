use std::net::SocketAddr;

use futures_util::{
    SinkExt,
    StreamExt,
};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::protocol::Message;

use super::types::{
    HostEvent,
    WorkerMessage,
};
use crate::core::RemticaError;

pub async fn handle_connection(
    stream: tokio::net::TcpStream,
    addr: SocketAddr,
    worker_tx: mpsc::Sender<WorkerMessage>,
) -> Result<(), RemticaError> {
    let ws_stream = tokio_tungstenite::accept_async(stream)
        .await
        .map_err(|e| RemticaError::Custom(format!("Error during WebSocket handshake: {}", e)))?;

    println!("[WS] WebSocket connection established with: {}", addr);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    let (tx, mut rx) = mpsc::channel::<String>(32);

    let forward_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if ws_sender.send(Message::text(msg)).await.is_err() {
                break;
            }
        }
    });

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(message)) => {
                if message == "PING" {
                    if let Err(e) = tx.send("PONG".to_string()).await {
                        eprintln!("[WS] Failed to send PONG: {}", e);
                    }
                    continue;
                }

                match serde_json::from_str::<HostEvent>(&message) {
                    Ok(event) => {
                        let message = WorkerMessage { event, reply: Some(tx.clone()) };
                        if let Err(e) = worker_tx.send(message).await {
                            eprintln!("[WS] Failed to forward event to worker: {}", e);
                        }
                    }
                    Err(e) => {
                        println!("[WS] Received message that's not a valid host event: {}", e);
                    }
                }
            }
            Ok(Message::Close(_)) => {
                println!("[WS] Host {} disconnected", addr);
                break;
            }
            Err(e) => {
                eprintln!("[WS] Error from host {}: {}", addr, e);
                break;
            }
            _ => {}
        }
    }

    forward_task.abort();
    drop(tx);

    Ok(())
}
