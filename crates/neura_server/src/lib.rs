//! Neura HTTP server.
//!
//! Exposes the story and illustration operations over JSON:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `POST` | `/api/story/generate-story` | full nine-section story |
//! | `POST` | `/api/story/generate-story/start` | sections 1-4 and the decision |
//! | `POST` | `/api/story/generate-story/continue` | sections 5-9 |
//! | `POST` | `/api/images/illustrate` | one illustration URL |
//! | `POST` | `/api/images/illustrate/batch` | one URL per section |
//! | `GET` | `/health` | liveness |
//!
//! Failures are returned as `{"detail": "..."}` with the status of the
//! underlying [`NeuraError`](neura_error::NeuraError).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;

pub use api::{ApiError, AppState, create_router};
pub use config::{LoggingConfig, NeuraConfig, ServerSettings};
pub use observability::{init_observability, shutdown_observability};
