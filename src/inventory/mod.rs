pub mod client;
pub mod http;
pub mod types;

pub use client::{ClientError, InventoryClient};
pub use http::HttpInventoryClient;
pub use types::{InventoryEntry, Status};
