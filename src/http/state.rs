//! Application state for the API server

use crate::ReceiptStore;
use std::sync::Arc;

/// API server state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Scored receipts, shared by every handler
    pub store: Arc<ReceiptStore>,
    /// API version
    pub version: String,
}

impl AppState {
    /// State backed by a fresh, empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(ReceiptStore::new()))
    }

    /// State backed by an existing store
    pub fn with_store(store: Arc<ReceiptStore>) -> Self {
        Self { store, version: env!("CARGO_PKG_VERSION").to_string() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}
