//! Single and batch illustration requests.

use crate::{IllustrationConfig, build_illustration_prompt, make_image_url, stable_seed};
use neura_core::{
    Illustration, IllustrationBatch, IllustrationBatchItem, IllustrationBatchRequest,
    IllustrationRequest,
};
use neura_error::{IllustrationError, IllustrationErrorKind, NeuraResult};
use tracing::{debug, instrument};

/// Turns illustration requests into renderer URLs.
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct Illustrator {
    /// Renderer endpoint and defaults
    config: IllustrationConfig,
}

impl Illustrator {
    /// Creates an illustrator with the given configuration.
    pub fn new(config: IllustrationConfig) -> Self {
        Self { config }
    }

    /// Illustrates one section.
    ///
    /// Without an explicit seed, a username or section index yields a stable
    /// seed from `(username, section_index)`, either part possibly empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the section text is shorter than three
    /// characters or the section index is outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use neura_core::IllustrationRequest;
    /// use neura_illustration::Illustrator;
    ///
    /// let illustrator = Illustrator::default();
    /// let request = IllustrationRequest::new("Sam waits.").with_username("alice").with_section_index(3u8);
    /// let image = illustrator.illustrate(&request).unwrap();
    /// assert!(image.url.contains("seed=986383321"));
    /// ```
    #[instrument(skip(self, request), fields(section_index = ?request.section_index))]
    pub fn illustrate(&self, request: &IllustrationRequest) -> NeuraResult<Illustration> {
        request.validate()?;
        let prompt =
            build_illustration_prompt(&request.section_text, request.reference_images.as_deref());

        let username = request.username.as_deref().filter(|u| !u.is_empty());
        let seed = match (request.seed, username, request.section_index) {
            (Some(seed), _, _) => Some(seed),
            (None, None, None) => None,
            (None, username, index) => {
                let index = index.map(|i| i.to_string()).unwrap_or_default();
                Some(u64::from(stable_seed(&[username.unwrap_or(""), &index])))
            }
        };

        let url = self.url_for(
            &prompt,
            request.width,
            request.height,
            seed,
            request.model.as_deref(),
            request.nologo,
        );
        debug!(seeded = seed.is_some(), "Built illustration URL");
        Ok(Illustration { url, prompt })
    }

    /// Illustrates every non-blank section of a batch.
    ///
    /// Sections are numbered by their 1-based position in the request, so
    /// skipped blanks leave gaps. An explicit seed applies to every section;
    /// otherwise a username yields a per-section seed from `(username, n)`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or oversized batch, and
    /// [`IllustrationErrorKind::NoValidSections`] when every entry is blank.
    #[instrument(skip(self, request), fields(sections = request.sections.len()))]
    pub fn illustrate_batch(&self, request: &IllustrationBatchRequest) -> NeuraResult<IllustrationBatch> {
        request.validate()?;
        let username = request.username.as_deref().filter(|u| !u.is_empty());

        let images: Vec<IllustrationBatchItem> = (1u8..)
            .zip(&request.sections)
            .filter_map(|(section, text)| {
                let text = text.trim();
                if text.is_empty() {
                    debug!(section, "Skipping blank section");
                    return None;
                }
                let prompt = build_illustration_prompt(text, request.reference_images.as_deref());
                let seed = request.seed.or_else(|| {
                    username.map(|u| u64::from(stable_seed(&[u, &section.to_string()])))
                });
                let url = self.url_for(
                    &prompt,
                    request.width,
                    request.height,
                    seed,
                    request.model.as_deref(),
                    request.nologo,
                );
                Some(IllustrationBatchItem {
                    section,
                    url,
                    prompt,
                })
            })
            .collect();

        if images.is_empty() {
            return Err(IllustrationError::new(IllustrationErrorKind::NoValidSections).into());
        }
        Ok(IllustrationBatch { images })
    }

    fn url_for(
        &self,
        prompt: &str,
        width: Option<u32>,
        height: Option<u32>,
        seed: Option<u64>,
        model: Option<&str>,
        nologo: Option<bool>,
    ) -> String {
        make_image_url(
            self.config.base_url(),
            prompt,
            width.unwrap_or(*self.config.default_width()),
            height.unwrap_or(*self.config.default_height()),
            seed,
            model,
            nologo.unwrap_or(*self.config.default_nologo()),
        )
    }
}
