//! Start, continue and full-story flows over a [`TextGenerator`].
//!
//! The start flow makes at most two model calls: a normal attempt and a
//! stricter retry with a smaller budget. If neither yields three distinct
//! options, a deterministic fallback triple derived from the target behavior
//! is returned instead of an error.

use crate::{
    build_continuation_prompt, build_full_story_prompt, build_start_prompt,
    extract_continuation_sections, extract_options, extract_title, has_section_five,
    locate_section,
};
use neura_core::{
    ChildProfile, ContinueRequest, DecisionOptions, FullStory, StoryContinuation, StoryStart,
};
use neura_error::{NeuraResult, StoryError, StoryErrorKind};
use neura_interface::{GenerateRequest, TextGenerator};
use tracing::{debug, info, instrument, warn};

/// Output token budget of the first start attempt.
pub const START_MAX_TOKENS: u32 = 900;

/// Output token budget of the stricter retry.
pub const STRICTER_MAX_TOKENS: u32 = 700;

/// Position in the bounded start-story attempt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AttemptState {
    /// Normal prompt, full budget
    #[display("first")]
    First,
    /// Prompt with the extra distinctness instruction, reduced budget
    #[display("stricter")]
    Stricter,
    /// No attempts left; the fallback options apply
    #[display("exhausted")]
    Exhausted,
}

impl AttemptState {
    /// The state after an attempt in this state failed to produce options.
    pub fn next(self) -> Self {
        match self {
            Self::First => Self::Stricter,
            Self::Stricter | Self::Exhausted => Self::Exhausted,
        }
    }

    /// Whether the attempt uses the stricter prompt.
    pub fn is_stricter(self) -> bool {
        self == Self::Stricter
    }

    /// Token budget of the request made in this state; zero once exhausted.
    pub fn max_tokens(self) -> u32 {
        match self {
            Self::First => START_MAX_TOKENS,
            Self::Stricter => STRICTER_MAX_TOKENS,
            Self::Exhausted => 0,
        }
    }
}

/// What one start attempt recovered from the model output.
#[derive(Debug)]
struct ParsedStart {
    raw: String,
    title: String,
    options: Option<DecisionOptions>,
}

impl ParsedStart {
    fn parse(raw: String) -> Self {
        let title = extract_title(&raw);
        let block = locate_section(&raw, 4, "Decision");
        let candidates = extract_options(&block);
        debug!(candidates = candidates.len(), "Parsed decision block");
        Self {
            options: DecisionOptions::from_candidates(&candidates),
            title,
            raw,
        }
    }
}

/// Runs the story flows against a text generator.
///
/// # Example
///
/// ```rust,ignore
/// use neura_story::StoryGenerator;
///
/// let generator = StoryGenerator::new(client);
/// let start = generator.start_story(&profile).await?;
/// let choice = start.options.as_slice()[0].clone();
/// let rest = generator
///     .continue_story(&ContinueRequest::new(start.partial_story, choice))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct StoryGenerator<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> StoryGenerator<G> {
    /// Creates a story generator backed by `generator`.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The underlying text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates a complete nine-section story in one call.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete profile, or the
    /// generator's error.
    #[instrument(skip(self, profile), fields(provider = self.generator.provider_name()))]
    pub async fn full_story(&self, profile: &ChildProfile) -> NeuraResult<FullStory> {
        profile.validate()?;
        let prompt = build_full_story_prompt(profile);
        let story = self.generator.generate(&GenerateRequest::new(&prompt)).await?;
        info!(story_len = story.len(), "Generated full story");
        Ok(FullStory { prompt, story })
    }

    /// Generates sections 1-4 and the A/B/C decision.
    ///
    /// Options always come back as exactly three distinct strings. When both
    /// attempts fail to parse, `options` is the fallback triple for the
    /// profile's target behavior and `partial_story` is the text of the last
    /// attempt that returned anything.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete profile, or the generator
    /// error when no attempt returned text.
    #[instrument(skip(self, profile), fields(provider = self.generator.provider_name()))]
    pub async fn start_story(&self, profile: &ChildProfile) -> NeuraResult<StoryStart> {
        profile.validate()?;

        let mut state = AttemptState::First;
        let mut outcome = self.attempt(profile, state).await;
        while !matches!(&outcome, Ok(parsed) if parsed.options.is_some()) {
            state = state.next();
            if state == AttemptState::Exhausted {
                break;
            }
            let retry = self.attempt(profile, state).await;
            // A failed retry never discards text an earlier attempt returned.
            outcome = match (outcome, retry) {
                (Ok(previous), Err(e)) => {
                    warn!(error = %e, "Stricter attempt failed, keeping earlier output");
                    Ok(previous)
                }
                (_, retry) => retry,
            };
        }

        let parsed = outcome?;
        let options = match parsed.options {
            Some(options) => options,
            None => {
                warn!(%state, "No usable options from the model, using fallback");
                DecisionOptions::fallback_for(profile.target_behavior())
            }
        };
        info!(title = %parsed.title, %state, "Started story");
        Ok(StoryStart {
            partial_story: parsed.raw.trim().to_string(),
            title: parsed.title,
            options,
        })
    }

    #[instrument(skip(self, profile), fields(max_tokens = state.max_tokens()))]
    async fn attempt(&self, profile: &ChildProfile, state: AttemptState) -> NeuraResult<ParsedStart> {
        let prompt = build_start_prompt(profile, state.is_stricter());
        let request = GenerateRequest::new(prompt).with_max_tokens(state.max_tokens());
        match self.generator.generate(&request).await {
            Ok(raw) => Ok(ParsedStart::parse(raw)),
            Err(e) => {
                warn!(error = %e, "Start attempt failed");
                Err(e)
            }
        }
    }

    /// Generates sections 5-9 for the option the child picked.
    ///
    /// The selected option does not have to match one of the start options.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank fields, the generator's error, or
    /// [`StoryErrorKind::InvalidContinuation`] when the cleaned output has no
    /// section 5.
    #[instrument(skip(self, request), fields(provider = self.generator.provider_name()))]
    pub async fn continue_story(&self, request: &ContinueRequest) -> NeuraResult<StoryContinuation> {
        request.validate()?;
        let prompt = build_continuation_prompt(request.partial_story(), request.selected_option());
        let raw = self.generator.generate(&GenerateRequest::new(prompt)).await?;

        let continuation = extract_continuation_sections(&raw);
        if !has_section_five(&continuation) {
            tracing::error!(raw_len = raw.len(), "Continuation has no section 5");
            return Err(StoryError::new(StoryErrorKind::InvalidContinuation).into());
        }
        info!(continuation_len = continuation.len(), "Continued story");
        Ok(StoryContinuation { continuation })
    }
}
