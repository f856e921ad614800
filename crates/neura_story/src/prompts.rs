//! Prompt templates for the three story flows.
//!
//! Every builder is pure: the same profile always yields the same prompt.
//! Blank interest fields are rendered as `"not specified"`.

use neura_core::ChildProfile;

/// The only emotion words a story may use.
pub const EMOTION_WORDS: [&str; 37] = [
    "joyful",
    "glad",
    "happy",
    "excited",
    "sad",
    "angry",
    "upset",
    "scared",
    "afraid",
    "surprised",
    "amazed",
    "bored",
    "worried",
    "uncomfortable",
    "tired",
    "stressed",
    "sorry",
    "shy",
    "satisfied",
    "relieved",
    "relaxed",
    "regretful",
    "puzzled",
    "proud",
    "overwhelmed",
    "nervous",
    "guilty",
    "grateful",
    "frustrated",
    "exhausted",
    "embarrassed",
    "disappointed",
    "content",
    "comfortable",
    "calm",
    "brave",
    "anxious",
];

const ROLE: &str = "[Role]\nYou are a story writer for children with Autism Spectrum Disorder (ASD).";

const STRICTER_SUFFIX: &str =
    "\nIf any option repeats or is too similar, rewrite the Decision so A, B, and C are distinct.\n";

fn child_inputs(profile: &ChildProfile) -> String {
    format!(
        "Name: {}\nGender: {}\nAge: {}\nFavorite Color: {}\nFavorite Animal: {}\nFavorite Food: {}\nFavorite Cartoon: {}",
        profile.username(),
        profile.gender(),
        profile.age(),
        profile.favorite_color(),
        profile.favorite_animal(),
        profile.favorite_food(),
        profile.favorite_cartoon(),
    )
}

/// Prompt for a complete nine-section story in one response.
///
/// # Examples
///
/// ```
/// use neura_core::ChildProfile;
/// use neura_story::build_full_story_prompt;
///
/// let profile = ChildProfile::builder()
///     .username("Sam")
///     .age(7u8)
///     .target_behavior("waiting in line")
///     .build()
///     .unwrap();
/// let prompt = build_full_story_prompt(&profile);
/// assert!(prompt.contains("Name: Sam"));
/// assert!(prompt.contains("Favorite Food: not specified"));
/// assert!(prompt.contains("9. Ending"));
/// ```
pub fn build_full_story_prompt(profile: &ChildProfile) -> String {
    let profile = profile.normalized();
    format!(
        r#"{ROLE}

[Task]
Write a short, realistic, and socially meaningful story for a child with ASD.
Use the child information and target behavior below to guide the content.
Make the story engaging by naturally weaving in one or more of the child's interests.
Follow every structure rule below.

[Inputs]
Child Information:
{inputs}

Story Parameters:
Target Behavior: {target}

[Story Structure and Rules]
1. The main character is the child (use the child's name).
2. Use third-person narration.
3. Keep a calm, supportive, and positive tone.
4. Use literal language. No metaphors, idioms, or figurative expressions (e.g., "just like...").
5. Use realistic, everyday social situations only (no fantasy or imagination-based elements).
6. Do not give thoughts or emotions to non-living objects.
7. Use simple sentences and vocabulary suitable for elementary students.
8. Keep the full story under 400 words.
9. Write in English.
10. Use only these emotion words: {emotions}.
11. You may include characters and places from provided candidate lists.
12. Follow the exact 9-section structure below.

[Story Format: 9 Sections]
Each section may include up to 2 sentences.

1. Title - Short and clear, about the main topic or behavior.
   - Avoid formats like "[child_name] and adventure".
   - Example titles: "When Playing Together", "Go to the Pool", "Do You Want to Be My Friend?"

2. Introduction - Introduce the situation or context.

3. Challenge - Present a social challenge the child faces. End with a question inviting the child to think.

4. Decision - Give exactly 3 options, each ONE sentence and clearly different:
   - A. <desirable (expected behavior)>
   - B. <undesirable (rule-breaking or disruptive)>
   - C. <undesirable (avoidance)>
   Do NOT reuse wording across options. Start lines with 'A.', 'B.', 'C.' only.

5. Consequence - Describe immediate outcomes and what others can see (no quotes or reflections).
   - Include (a) external events and (b) the child's visible emotion.

6. Repair - If the action was undesirable, show feedback from others (e.g., "That's not okay.").

7. Response - Give a simple, desirable response the child could use (e.g., "Sorry." / "I got it.").

8. Repaired Consequence - Show what happens after the child corrects their action.

9. Ending - End with one sentence showing the positive result of following the target behavior.

[Output]
Write the complete story in the format above."#,
        inputs = child_inputs(&profile),
        target = profile.target_behavior(),
        emotions = EMOTION_WORDS.join(", "),
    )
}

/// Prompt for sections 1-4 ending in the A/B/C decision.
///
/// `stricter` appends an instruction to rewrite options that repeat or are
/// too similar; it is used for the retry attempt.
pub fn build_start_prompt(profile: &ChildProfile, stricter: bool) -> String {
    let profile = profile.normalized();
    let mut prompt = format!(
        r#"{ROLE}

[Task]
Write only Sections 1 to 4 of a short, realistic, and socially meaningful story for a child with ASD.

[Inputs]
{inputs}
Target Behavior: {target}

[Rules]
- Third-person narration with calm, literal language.
- Realistic, everyday situations (no fantasy).
- Elementary-level vocabulary and sentence structure.
- Keep Sections 2-4 combined under 150 words.
- Each section may contain up to 2 sentences.
- Use only these emotion words: {emotions}.
- Decision (Section 4) must contain three short, distinct options:
  A. desirable (expected behavior)
  B. undesirable (rule-breaking or disruptive)
  C. undesirable (avoidance)
- Each option starts with "A.", "B.", or "C." with no bullets or extra formatting.

[Output]
Return only Sections 1 to 4 exactly in this format:

1. Title
<title>
2. <sentences>
3. <sentences>
4. Decision
A. <desirable option>
B. <undesirable option>
C. <avoidance option>"#,
        inputs = child_inputs(&profile),
        target = profile.target_behavior(),
        emotions = EMOTION_WORDS.join(", "),
    );
    if stricter {
        prompt.push_str(STRICTER_SUFFIX);
    }
    prompt
}

/// Prompt asking for sections 5-9 after the child picked `selected_option`.
///
/// The previous sections are embedded verbatim and the model is told not to
/// emit section labels.
pub fn build_continuation_prompt(partial_story: &str, selected_option: &str) -> String {
    format!(
        r#"Continue this children's story from where it stopped.

Previous sections 1 to 4:
{partial}

The child chose this option:
{selected}

Now write only the next five numbered sections:
5.
6.
7.
8.
9.

Rules for this continuation:
- Do NOT include any section titles or labels (no words like "Consequence", "Repair", "Response", etc.).
- Each section has up to 2 sentences, written directly after its number.
- Keep the same tone, constraints, and vocabulary limits as before.
- Use only these emotion words: {emotions}.
- Do not repeat earlier sections or these instructions.

[Output]
Return only sections 5 to 9 exactly in this format:

5. <sentences>
6. <sentences>
7. <sentences>
8. <sentences>
9. <sentences>"#,
        partial = partial_story.trim(),
        selected = selected_option.trim(),
        emotions = EMOTION_WORDS.join(", "),
    )
}
