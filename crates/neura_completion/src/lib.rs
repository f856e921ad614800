//! OpenAI-compatible chat completion client for Neura.
//!
//! [`CompletionClient`] sends a single user prompt to a chat-completion
//! endpoint and normalizes whatever comes back into plain text. It accepts
//! OpenAI-shaped JSON (`choices[0].message.content`), the `{response}` and
//! `{text}` variants some gateways return, and bare text bodies.
//!
//! # Example
//!
//! ```rust,no_run
//! use neura_completion::{CompletionClient, CompletionConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CompletionConfig::builder()
//!     .base_url("https://text.pollinations.ai/openai")
//!     .model("openai")
//!     .build()?;
//! let client = CompletionClient::new(config)?;
//! let text = client.complete("Say hello.", 50).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! Failures are classified as unavailable (transport), upstream error
//! (non-2xx status) or empty response. Retrying is left to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod request;
mod response;

pub use client::CompletionClient;
pub use config::{CompletionConfig, CompletionConfigBuilder};
pub use request::{ChatCompletionRequest, Message};
pub use response::{ChatCompletionBody, Choice, ChoiceMessage, normalize_body};
