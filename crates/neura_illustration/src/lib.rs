//! Illustration URL builder.
//!
//! Wraps a story section in a storybook-style image prompt and encodes it into
//! a renderer URL. No network call is made; the caller (usually a browser)
//! fetches the URL. Identical inputs always produce identical URLs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod illustrator;
mod prompt;
mod seed;
mod url;

pub use config::{IllustrationConfig, IllustrationConfigBuilder};
pub use illustrator::Illustrator;
pub use prompt::{MAX_PROMPT_CHARS, build_illustration_prompt};
pub use seed::stable_seed;
pub use url::{MAX_DIMENSION, MIN_DIMENSION, clamp_dimension, make_image_url};
