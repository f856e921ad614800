//! Story generation pipeline.
//!
//! Turns a [`ChildProfile`](neura_core::ChildProfile) into model prompts,
//! parses the free-text model output into titles, decision options and
//! numbered sections, and runs the start and continue flows with a bounded
//! retry and a deterministic fallback.
//!
//! # Example
//!
//! ```rust,ignore
//! use neura_story::StoryGenerator;
//!
//! let generator = StoryGenerator::new(completion_client);
//! let start = generator.start_story(&profile).await?;
//! println!("{}: {:?}", start.title, start.options);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod matchers;
mod orchestrator;
mod prompts;

pub use extraction::{
    DEFAULT_TITLE, extract_continuation_sections, extract_options, extract_title,
    has_section_five, locate_section, split_sections,
};
pub use matchers::{
    bulleted_item, instruction_line, labeled_option, numbered_line, raw_item, section_heading,
    section_number, top_level_section,
};
pub use orchestrator::{AttemptState, START_MAX_TOKENS, STRICTER_MAX_TOKENS, StoryGenerator};
pub use prompts::{
    EMOTION_WORDS, build_continuation_prompt, build_full_story_prompt, build_start_prompt,
};
