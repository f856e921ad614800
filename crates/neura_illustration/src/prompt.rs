//! Storybook illustration prompt.

/// Longest prompt sent to the renderer, in characters.
pub const MAX_PROMPT_CHARS: usize = 6000;

const TEMPLATE_HEAD: &str =
    "Create a colorful and engaging illustration based on the following scene description.";

const TEMPLATE_BODY: &str = r#"The image should be in the warm, friendly, and imaginative style of a children's storybook.

[style]
The illustration is in the style of a classic children's storybook, evoking warmth, imagination, and emotional connection. It uses flat coloring with a hand-drawn, colored pencil texture that gives the image a soft, tactile feel. Shading is subtle and delicate, adding volume without harsh contrasts. Colors are warm, inviting, and gently saturated, favoring cozy tones like warm reds, soft browns, soft greens, and sky blues. Line work is clean but organic, as if sketched with colored pencils or crayons. The composition is clear and uncluttered so young children can read it easily, while still rich in detail that rewards closer inspection.

[contents]
Show the child's expressions and actions clearly, in a richly detailed environment that feels cozy and playful. Include the characters, objects, and background elements that bring the scene to life in a way young children can easily understand and enjoy.

Every character has complete, natural anatomy with visible heads, hands, and limbs. No missing or cropped body parts. Characters are in natural, relaxed poses with clear, expressive faces. No deformed, extra, or missing fingers. Frame characters fully without cutting off any limbs or heads.

Do not include any text, watermarks, or signatures in the image.

Use the provided reference images as the primary visual guide for the illustration.

The first image shows the main child character; closely match their facial features, hairstyle, and appearance.

The following images, in order, show other characters in the story; reflect their appearances accurately.

Any further images show the places where the story happens; keep the scene consistent with these environments.

Blend the reference images naturally into the scene, keeping the storybook style while faithfully showing the provided characters and settings."#;

/// Wraps `section_text` in the storybook prompt.
///
/// Non-empty `reference_images` are appended one per line under a
/// `[reference_images]` header. The result is cut to [`MAX_PROMPT_CHARS`]
/// characters.
///
/// # Examples
///
/// ```
/// use neura_illustration::build_illustration_prompt;
///
/// let prompt = build_illustration_prompt("  Sam waits for the slide. ", None);
/// assert!(prompt.contains("\nSam waits for the slide.\n"));
/// assert!(!prompt.contains("[reference_images]"));
/// ```
pub fn build_illustration_prompt(section_text: &str, reference_images: Option<&[String]>) -> String {
    let mut prompt = format!("{}\n{}\n\n{}", TEMPLATE_HEAD, section_text.trim(), TEMPLATE_BODY);
    if let Some(refs) = reference_images.filter(|refs| !refs.is_empty()) {
        prompt.push_str("\n\n[reference_images]\n");
        prompt.push_str(&refs.join("\n"));
    }
    if let Some((cut, _)) = prompt.char_indices().nth(MAX_PROMPT_CHARS) {
        tracing::debug!(chars = MAX_PROMPT_CHARS, "Truncating illustration prompt");
        prompt.truncate(cut);
    }
    prompt
}
