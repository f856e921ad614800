//! Error types for the Neura story service.
//!
//! This crate provides the error taxonomy shared by every Neura crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Everything converts into [`NeuraError`], which also knows how to classify
//! itself for the HTTP layer via [`NeuraError::status_code`].
//!
//! # Examples
//!
//! ```
//! use neura_error::{NeuraResult, ValidationError};
//!
//! fn check_name(name: &str) -> NeuraResult<()> {
//!     if name.trim().is_empty() {
//!         Err(ValidationError::new("username", "must not be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_name("").is_err());
//! assert!(check_name("Sam").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod completion;
mod config;
mod error;
mod illustration;
mod story;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{NeuraError, NeuraErrorKind, NeuraResult};
pub use illustration::{IllustrationError, IllustrationErrorKind};
pub use story::{StoryError, StoryErrorKind};
pub use validation::ValidationError;
