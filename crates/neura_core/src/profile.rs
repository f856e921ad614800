//! The child profile a story is personalised for.

use neura_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Placeholder used for interest fields the caller left blank.
pub const NOT_SPECIFIED: &str = "not specified";

/// Oldest age the story prompts are written for.
const MAX_AGE: u8 = 18;

/// Child profile supplied by the profile collaborator for one request.
///
/// JSON field names match the public API (`favoriteColor`, `target_behavior`, ...).
///
/// # Examples
///
/// ```
/// use neura_core::ChildProfile;
///
/// let profile = ChildProfile::builder()
///     .username("Sam")
///     .age(7u8)
///     .favorite_animal("dog")
///     .target_behavior("sharing toys")
///     .build()
///     .unwrap();
///
/// assert_eq!(profile.username(), "Sam");
/// assert!(profile.validate().is_ok());
/// assert_eq!(profile.normalized().favorite_food(), "not specified");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(error = "neura_error::BuilderError"))]
pub struct ChildProfile {
    /// Child's name; the story's main character
    username: String,
    /// Age in years (0-18)
    #[builder(default)]
    age: u8,
    /// Gender as the caregiver describes it
    #[serde(default)]
    #[builder(default)]
    gender: String,
    /// Favorite color
    #[serde(rename = "favoriteColor", default)]
    #[builder(default)]
    favorite_color: String,
    /// Favorite animal
    #[serde(rename = "favoriteAnimal", default)]
    #[builder(default)]
    favorite_animal: String,
    /// Favorite food
    #[serde(rename = "favoriteFood", default)]
    #[builder(default)]
    favorite_food: String,
    /// Favorite cartoon
    #[serde(rename = "favoriteCartoon", default)]
    #[builder(default)]
    favorite_cartoon: String,
    /// The social behavior the story teaches
    target_behavior: String,
}

impl ChildProfile {
    /// Creates a new profile builder.
    pub fn builder() -> ChildProfileBuilder {
        ChildProfileBuilder::default()
    }

    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `username` or `target_behavior` is blank,
    /// or when `age` is above 18.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::new("username", "is required"));
        }
        if self.target_behavior.trim().is_empty() {
            return Err(ValidationError::new("target_behavior", "is required"));
        }
        if self.age > MAX_AGE {
            return Err(ValidationError::new(
                "age",
                format!("must be between 0 and {}, got {}", MAX_AGE, self.age),
            ));
        }
        Ok(())
    }

    /// Returns a copy with every field trimmed and blank interests replaced
    /// by [`NOT_SPECIFIED`].
    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            age: self.age,
            gender: or_not_specified(&self.gender),
            favorite_color: or_not_specified(&self.favorite_color),
            favorite_animal: or_not_specified(&self.favorite_animal),
            favorite_food: or_not_specified(&self.favorite_food),
            favorite_cartoon: or_not_specified(&self.favorite_cartoon),
            target_behavior: self.target_behavior.trim().to_string(),
        }
    }
}

fn or_not_specified(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        trimmed.to_string()
    }
}
