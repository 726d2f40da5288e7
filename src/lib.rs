//! Client and phone directory backed by PostgreSQL (or SQLite for local runs).

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod report;
pub mod seed;

pub use config::Config;
pub use db::Database;
pub use error::{DirectoryError, Result};
pub use models::{Client, ClientFilter, ClientRecord, ClientUpdate, Phone};
