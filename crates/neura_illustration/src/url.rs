//! Renderer URL assembly.

/// Smallest dimension the renderer accepts.
pub const MIN_DIMENSION: u32 = 256;

/// Largest dimension the renderer accepts.
pub const MAX_DIMENSION: u32 = 1536;

/// Clamps a width or height into `256..=1536`.
pub fn clamp_dimension(value: u32) -> u32 {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Builds `<base_url><encoded prompt>?width=..&height=..[&seed=..][&model=..][&nologo=true]`.
///
/// The prompt is percent-encoded as a single path segment (spaces become
/// `%20`), dimensions are clamped, and query parameters always appear in that
/// order.
///
/// # Examples
///
/// ```
/// use neura_illustration::make_image_url;
///
/// let url = make_image_url("https://img.test/prompt/", "a dog", 10_000, 10, Some(7), None, true);
/// assert_eq!(url, "https://img.test/prompt/a%20dog?width=1536&height=256&seed=7&nologo=true");
/// ```
pub fn make_image_url(
    base_url: &str,
    prompt: &str,
    width: u32,
    height: u32,
    seed: Option<u64>,
    model: Option<&str>,
    nologo: bool,
) -> String {
    let mut query = vec![
        format!("width={}", clamp_dimension(width)),
        format!("height={}", clamp_dimension(height)),
    ];
    if let Some(seed) = seed {
        query.push(format!("seed={}", seed));
    }
    if let Some(model) = model.filter(|m| !m.is_empty()) {
        query.push(format!("model={}", urlencoding::encode(model)));
    }
    if nologo {
        query.push("nologo=true".to_string());
    }
    format!(
        "{}{}?{}",
        base_url,
        urlencoding::encode(prompt),
        query.join("&")
    )
}
