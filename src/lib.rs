//! maternal-risk: keyword-based prenatal symptom triage over HTTP.
//!
//! The core is [`classifier`], a pure mapping from symptom text to a risk tier
//! and its fixed advice. Everything else wires it to axum.

pub mod classifier;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use classifier::{Classification, KeywordClassifier, RiskClassifier, RiskTier};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
