pub mod config;
pub mod error;
pub mod server_state;
