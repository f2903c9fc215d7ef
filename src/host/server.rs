use std::net::SocketAddr;

use tokio::{
    net::TcpListener,
    sync::mpsc,
};

use super::{
    connection::handle_connection,
    types::WorkerMessage,
};
use crate::core::RemticaError;

/// WebSocket endpoint the note-taking host connects to. Each connection
/// streams JSON event frames that are parsed and forwarded to the worker.
pub struct HostEventServer {
    listen_addr: String,
    worker_tx: mpsc::Sender<WorkerMessage>,
}

impl HostEventServer {
    pub fn new(listen_addr: impl Into<String>, worker_tx: mpsc::Sender<WorkerMessage>) -> Self {
        Self { listen_addr: listen_addr.into(), worker_tx }
    }

    pub async fn run(&self) -> Result<(), RemticaError> {
        let addr = self
            .listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| RemticaError::Custom(format!("Invalid listen address: {}", e)))?;

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RemticaError::Custom(format!("Failed to bind to address: {}", e)))?;

        println!("[WS] Host event server running on {}", addr);
        println!("[WS] The note-taking host can connect to: ws://{}/", addr);

        while let Ok((stream, peer)) = listener.accept().await {
            println!("[WS] New connection from: {}", peer);

            let worker_tx = self.worker_tx.clone();

            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, peer, worker_tx).await {
                    eprintln!("[WS] Error handling connection from {}: {:?}", peer, e);
                }
            });
        }

        Ok(())
    }
}
