use thiserror::Error;

pub mod database;
mod data_manager;

pub use data_manager::*;

#[derive(Debug, Error)]
pub enum DataManagerError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("database operation timed out")]
    Timeout,

    #[error("no matching document found")]
    NotFound,
}
