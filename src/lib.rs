pub mod core;
pub mod habitica;
pub mod host;
pub mod persistence;
pub mod session;
pub mod settings;
