//! Core data types for the Neura story service.
//!
//! This crate holds the request and response records shared by the story
//! pipeline, the illustration builder and the HTTP surface. Nothing here
//! performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod illustration;
mod options;
mod profile;
mod story;

pub use illustration::{
    Illustration, IllustrationBatch, IllustrationBatchItem, IllustrationBatchRequest,
    IllustrationRequest, MAX_BATCH_SECTIONS, MIN_SECTION_TEXT_CHARS,
};
pub use options::{DecisionOptions, OptionRole, dedupe_options, option_key};
pub use profile::{ChildProfile, ChildProfileBuilder, NOT_SPECIFIED};
pub use story::{ContinueRequest, FullStory, StoryContinuation, StorySection, StoryStart};
