mod client;
mod phone;
mod record;

pub use client::{Client, ClientField, ClientFilter, ClientUpdate};
pub use phone::Phone;
pub use record::ClientRecord;
