pub mod connection;
pub mod server;
pub mod types;

pub use server::HostEventServer;
pub use types::{
    HostEvent,
    WorkerMessage,
};
