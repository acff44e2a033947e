//! HTTP service.
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Score and store a receipt, returns `{"id": ...}`
//! - GET /receipts/:id/points - Points for a stored receipt, returns `{"points": ...}`
//! - GET /health - Liveness and crate version

#[path = "http/dto.rs"]
mod dto;
#[path = "http/error.rs"]
mod error;
#[path = "http/routes.rs"]
mod routes;
#[path = "http/server.rs"]
mod server;
#[path = "http/state.rs"]
mod state;

pub use dto::{HealthResponse, PointsResponse, ProcessReceiptResponse};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::create_router;
pub use server::{create_server, run_server};
pub use state::{ApiConfig, AppState};
