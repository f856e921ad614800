//! Single-line matchers for model output.
//!
//! Model text is split into lines once; every parser in
//! [`extraction`](crate::extraction) is a fold over these matchers.

use neura_core::OptionRole;
use regex::Regex;
use std::sync::LazyLock;

// Leading markdown emphasis ("**4. Decision**") is skipped.
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[*_#]*\s*(\d+)\.\s*(.*?)\s*$").expect("Valid numbered line regex")
});

static SECTION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[*_#]*\s*(\d+)\.[*_]*(?:\s|$)").expect("Valid section number regex")
});

// A leading section number is tolerated so "4. A. ..." still yields option A.
static LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+\.\s*)?(?:[-*•]\s*)?([ABCabc])\.\s+(.+?)\s*$")
        .expect("Valid labeled option regex")
});

static BULLETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•]\s+(.+?)\s*$").expect("Valid bullet regex"));

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:context|task|rules|output|example|note|additional information)\s*:")
        .expect("Valid instruction line regex")
});

/// `"<n>. <text>"` with the number and trimmed text.
///
/// # Examples
///
/// ```
/// use neura_story::numbered_line;
///
/// assert_eq!(numbered_line("  3. Challenge"), Some((3, "Challenge")));
/// assert_eq!(numbered_line("A. Wait"), None);
/// ```
pub fn numbered_line(line: &str) -> Option<(u32, &str)> {
    let caps = NUMBERED.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    Some((number, caps.get(2).map_or("", |m| m.as_str())))
}

/// Section number of a line that starts with `"<n>."` followed by whitespace
/// or the end of the line.
pub fn section_number(line: &str) -> Option<u32> {
    SECTION_NUMBER.captures(line)?.get(1)?.as_str().parse().ok()
}

/// Whether `line` is the heading `"<number>. <label>"`, ignoring case and
/// surrounding markdown emphasis.
///
/// # Examples
///
/// ```
/// use neura_story::section_heading;
///
/// assert!(section_heading("4. Decision", 4, "Decision"));
/// assert!(section_heading("4. **decision:**", 4, "Decision"));
/// assert!(!section_heading("4. Decisions", 4, "Decision"));
/// assert!(!section_heading("5. Decision", 4, "Decision"));
/// ```
pub fn section_heading(line: &str, number: u32, label: &str) -> bool {
    let Some((n, rest)) = numbered_line(line) else {
        return false;
    };
    if n != number {
        return false;
    }
    let rest = strip_markup(rest);
    match rest.get(..label.len()) {
        Some(head) if head.eq_ignore_ascii_case(label) => rest[label.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric()),
        _ => false,
    }
}

/// Whether `line` opens a numbered section whose text begins with a letter.
pub fn top_level_section(line: &str) -> bool {
    numbered_line(line)
        .and_then(|(_, rest)| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// `"A. text"`, `"- b. text"` or `"4. A. text"` as a role and option text.
///
/// # Examples
///
/// ```
/// use neura_core::OptionRole;
/// use neura_story::labeled_option;
///
/// assert_eq!(
///     labeled_option("  - b. Push ahead "),
///     Some((OptionRole::Disruptive, "Push ahead"))
/// );
/// assert_eq!(labeled_option("A.Wait"), None);
/// ```
pub fn labeled_option(line: &str) -> Option<(OptionRole, &str)> {
    let caps = LABELED.captures(line)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    Some((OptionRole::from_letter(letter)?, caps.get(2)?.as_str()))
}

/// Text of a `-`, `*` or `•` bulleted line.
pub fn bulleted_item(line: &str) -> Option<&str> {
    BULLETED.captures(line)?.get(1).map(|m| m.as_str())
}

/// Any non-blank line with bullet characters and spaces stripped from both ends.
pub fn raw_item(line: &str) -> Option<&str> {
    let item = line
        .trim_matches(|c| matches!(c, '-' | ' ' | '*' | '•'))
        .trim();
    (!item.is_empty()).then_some(item)
}

/// Whether `line` is prompt scaffolding such as `"Rules: ..."` or `"Note: ..."`.
pub fn instruction_line(line: &str) -> bool {
    INSTRUCTION.is_match(line)
}

/// Trims whitespace and markdown emphasis characters.
pub(crate) fn strip_markup(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '_' | '#'))
}
