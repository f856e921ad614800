//! Trait definitions for Neura text-generation providers.
//!
//! The story pipeline only ever talks to a [`TextGenerator`]; the HTTP
//! completion client is one implementation and tests supply scripted ones.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::TextGenerator;
pub use types::GenerateRequest;
