//! The three decision options offered at the end of section 4.

use neura_error::ValidationError;
use serde::{Deserialize, Serialize};

/// The behavioural role each option slot stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OptionRole {
    /// A. the expected behavior
    #[display("desirable")]
    Desirable,
    /// B. rule-breaking or disruptive behavior
    #[display("disruptive")]
    Disruptive,
    /// C. avoidance
    #[display("avoidant")]
    Avoidant,
}

impl OptionRole {
    /// Slot index (0 for A, 1 for B, 2 for C).
    pub fn index(self) -> usize {
        match self {
            Self::Desirable => 0,
            Self::Disruptive => 1,
            Self::Avoidant => 2,
        }
    }

    /// Role bound to an option letter, case-insensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Self::Desirable),
            'b' => Some(Self::Disruptive),
            'c' => Some(Self::Avoidant),
            _ => None,
        }
    }
}

/// Comparison key for options: lowercased with whitespace runs collapsed.
pub fn option_key(option: &str) -> String {
    option
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Trims every option, drops blanks and later duplicates, and keeps order.
///
/// # Examples
///
/// ```
/// use neura_core::dedupe_options;
///
/// let options = dedupe_options(["Wait", "  wait ", "", "Push"]);
/// assert_eq!(options, vec!["Wait".to_string(), "Push".to_string()]);
/// ```
pub fn dedupe_options<I, S>(options: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for option in options {
        let trimmed = option.as_ref().trim();
        let key = option_key(trimmed);
        if !key.is_empty() && seen.insert(key) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Exactly three non-empty, pairwise-distinct options bound to
/// [`OptionRole::Desirable`], [`OptionRole::Disruptive`] and [`OptionRole::Avoidant`].
///
/// Serializes as a plain JSON array of three strings. Deserialization enforces
/// the same invariant as [`DecisionOptions::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DecisionOptions([String; 3]);

impl DecisionOptions {
    /// Builds the triple, trimming each option.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any option is blank or two options are
    /// equal ignoring case and whitespace.
    pub fn new(
        desirable: impl Into<String>,
        disruptive: impl Into<String>,
        avoidant: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let options = [
            desirable.into().trim().to_string(),
            disruptive.into().trim().to_string(),
            avoidant.into().trim().to_string(),
        ];
        if options.iter().any(|o| o.is_empty()) {
            return Err(ValidationError::new("options", "must not be blank"));
        }
        if dedupe_options(&options).len() != 3 {
            return Err(ValidationError::new("options", "must be pairwise distinct"));
        }
        Ok(Self(options))
    }

    /// Takes the first three distinct candidates, if there are that many.
    ///
    /// # Examples
    ///
    /// ```
    /// use neura_core::DecisionOptions;
    ///
    /// assert!(DecisionOptions::from_candidates(["x", "X", "y"]).is_none());
    /// let options = DecisionOptions::from_candidates(["x", "X", "y", "z", "w"]).unwrap();
    /// assert_eq!(options.as_slice(), &["x", "y", "z"]);
    /// ```
    pub fn from_candidates<I, S>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = dedupe_options(candidates).into_iter();
        match (unique.next(), unique.next(), unique.next()) {
            (Some(a), Some(b), Some(c)) => Some(Self([a, b, c])),
            _ => None,
        }
    }

    /// The deterministic triple used when the model never produced three
    /// distinct options. Trailing periods on `target_behavior` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use neura_core::{DecisionOptions, OptionRole};
    ///
    /// let options = DecisionOptions::fallback_for(" lining up for lunch. ");
    /// assert_eq!(
    ///     options.get(OptionRole::Desirable),
    ///     "I will follow the expected behavior for lining up for lunch."
    /// );
    /// ```
    pub fn fallback_for(target_behavior: &str) -> Self {
        let behavior = target_behavior.trim().trim_end_matches('.');
        Self([
            format!("I will follow the expected behavior for {behavior}."),
            format!(
                "I will break a rule during {behavior} (for example, interrupting, pushing, or skipping the line)."
            ),
            format!("I will avoid {behavior} by walking away to do something else."),
        ])
    }

    /// The option bound to `role`.
    pub fn get(&self, role: OptionRole) -> &str {
        &self.0[role.index()]
    }

    /// Options in A, B, C order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for DecisionOptions {
    type Error = ValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        let [a, b, c]: [String; 3] = value
            .try_into()
            .map_err(|_| ValidationError::new("options", "must contain exactly 3 entries"))?;
        Self::new(a, b, c)
    }
}

impl From<DecisionOptions> for Vec<String> {
    fn from(options: DecisionOptions) -> Self {
        options.0.into()
    }
}
