//! Parsers that recover structure from free-text model output.
//!
//! The model is asked for numbered sections but routinely adds markdown,
//! echoes instructions or drops labels. Each parser here is tolerant of that
//! and never fails; callers decide what an empty result means.

use crate::matchers::{
    bulleted_item, instruction_line, labeled_option, numbered_line, raw_item, section_heading,
    section_number, strip_markup, top_level_section,
};
use neura_core::{StorySection, dedupe_options};
use regex::Regex;
use std::sync::LazyLock;

/// Title used when the model output has none.
pub const DEFAULT_TITLE: &str = "Story";

/// Most options a decision block can yield.
const MAX_OPTIONS: usize = 3;

/// Most sections [`split_sections`] returns.
const MAX_SECTIONS: usize = 9;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]+\]").expect("Valid bracket regex"));

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Valid blank line regex"));

/// Story title from section 1.
///
/// Accepts `"1. Title"` followed by the title on the next non-blank line,
/// `"1. Title: <title>"` and a bare `"1. <title>"`. Only the first line
/// numbered 1 is considered.
///
/// # Examples
///
/// ```
/// use neura_story::extract_title;
///
/// assert_eq!(extract_title("1. Title\nWaiting My Turn\n2. Sam..."), "Waiting My Turn");
/// assert_eq!(extract_title("1. Taking Turns at the Slide\n2. ..."), "Taking Turns at the Slide");
/// assert_eq!(extract_title("Once upon a time"), "Story");
/// ```
#[tracing::instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn extract_title(raw: &str) -> String {
    let mut lines = raw.lines();
    let Some(rest) = lines.by_ref().find_map(|line| match numbered_line(line) {
        Some((1, rest)) => Some(strip_markup(rest)),
        _ => None,
    }) else {
        tracing::debug!("No section 1 found, using default title");
        return DEFAULT_TITLE.to_string();
    };

    let labeled = rest
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("title"))
        && rest[5..].chars().next().is_none_or(|c| !c.is_alphanumeric());
    let title = if labeled {
        let inline = strip_markup(rest[5..].trim_start_matches([':', '-', ' ']));
        if inline.is_empty() {
            lines
                .map(str::trim)
                .find(|line| !line.is_empty())
                .filter(|line| numbered_line(line).is_none())
                .unwrap_or("")
        } else {
            inline
        }
    } else {
        rest
    };

    let title = clean_title(title);
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

fn clean_title(title: &str) -> &str {
    strip_markup(title).trim_matches(|c| matches!(c, '"' | '\'' | '“' | '”'))
}

/// Body of section `number` labeled `label`.
///
/// Runs from the line after the heading to the next numbered line whose text
/// starts with a letter, or to the end. If no heading matches, the whole text
/// is returned. The result is trimmed.
///
/// # Examples
///
/// ```
/// use neura_story::locate_section;
///
/// let raw = "3. Challenge\nWhat now?\n4. Decision\nA. Wait\nB. Push\n5. Consequence\n...";
/// assert_eq!(locate_section(raw, 4, "Decision"), "A. Wait\nB. Push");
/// assert_eq!(locate_section("A. Wait", 4, "Decision"), "A. Wait");
/// ```
pub fn locate_section(raw: &str, number: u32, label: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let Some(heading) = lines
        .iter()
        .position(|line| section_heading(line, number, label))
    else {
        return raw.trim().to_string();
    };
    let body = &lines[heading + 1..];
    let end = body
        .iter()
        .position(|line| top_level_section(line))
        .unwrap_or(body.len());
    body[..end].join("\n").trim().to_string()
}

/// Up to three distinct options from a decision block.
///
/// Three tiers are tried and the first one that matches any line wins:
/// lines labeled `A.`/`B.`/`C.` (first occurrence of each letter, in letter
/// order), then bulleted lines, then every non-blank line. The winning tier is
/// de-duplicated ignoring case and whitespace.
///
/// # Examples
///
/// ```
/// use neura_story::extract_options;
///
/// let block = "C. Walk away.\nA. Wait.\nB. Push.\nA. Wait again.";
/// assert_eq!(extract_options(block), vec!["Wait.", "Push.", "Walk away."]);
/// assert!(extract_options("").is_empty());
/// ```
pub fn extract_options(block: &str) -> Vec<String> {
    let lines: Vec<&str> = block.lines().collect();

    let mut slots: [Option<&str>; 3] = [None; 3];
    let mut labeled = false;
    for (role, text) in lines.iter().filter_map(|line| labeled_option(line)) {
        labeled = true;
        if slots[role.index()].is_none() {
            slots[role.index()] = Some(text);
        }
    }
    let tier: Vec<&str> = if labeled {
        slots.into_iter().flatten().collect()
    } else {
        let bullets: Vec<&str> = lines.iter().filter_map(|line| bulleted_item(line)).collect();
        if bullets.is_empty() {
            lines.iter().filter_map(|line| raw_item(line)).collect()
        } else {
            bullets
        }
    };

    let mut options = dedupe_options(tier);
    options.truncate(MAX_OPTIONS);
    options
}

/// Sections 5 through 9 from a continuation response.
///
/// Bracketed placeholders and echoed instruction lines (`"Rules: ..."`) are
/// removed first. The result starts at the first line numbered 5 and ends
/// before the first numbered line following section 9. Runs of three or more
/// newlines collapse to two. If no section 5 is present, the original text is
/// returned trimmed and unchanged.
pub fn extract_continuation_sections(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n");
    let without_placeholders = BRACKETED.replace_all(&normalized, "");
    let lines: Vec<&str> = without_placeholders
        .split('\n')
        .map(|line| if instruction_line(line) { "" } else { line })
        .collect();

    let Some(start) = lines.iter().position(|line| section_number(line) == Some(5)) else {
        tracing::debug!("Continuation has no section 5, returning it unchanged");
        return raw.trim().to_string();
    };
    let tail = &lines[start..];
    let end = tail
        .iter()
        .position(|line| section_number(line) == Some(9))
        .and_then(|nine| {
            tail[nine + 1..]
                .iter()
                .position(|line| section_number(line).is_some())
                .map(|next| nine + 1 + next)
        })
        .unwrap_or(tail.len());

    let joined = tail[..end].join("\n");
    EXTRA_BLANK_LINES
        .replace_all(joined.trim(), "\n\n")
        .into_owned()
}

/// Whether `text` contains a line starting with `"5."` and whitespace.
pub fn has_section_five(text: &str) -> bool {
    text.lines().any(|line| section_number(line) == Some(5))
}

/// Splits a story into numbered sections for paging and illustration.
///
/// Every line starting `"<n>."` opens a section; its text becomes the heading
/// (`"Section <n>"` when blank) and the following lines the body. Text with no
/// numbered lines becomes a single section 1 headed [`DEFAULT_TITLE`].
/// Sections are ordered by number and capped at nine.
///
/// # Examples
///
/// ```
/// use neura_story::split_sections;
///
/// let sections = split_sections("5. Sam waits.\nHe smiles.\n6. Mia says thanks.");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].number, 5);
/// assert_eq!(sections[0].body, "He smiles.");
/// ```
pub fn split_sections(text: &str) -> Vec<StorySection> {
    let text = text.replace("\r\n", "\n");
    let text = EXTRA_BLANK_LINES.replace_all(text.trim(), "\n\n");

    let mut sections: Vec<(StorySection, Vec<&str>)> = Vec::new();
    for line in text.lines() {
        let opened = numbered_line(line)
            .and_then(|(number, rest)| u8::try_from(number).ok().map(|n| (n, rest)));
        match opened {
            Some((number, rest)) => {
                let heading = if rest.is_empty() {
                    format!("Section {number}")
                } else {
                    rest.to_string()
                };
                sections.push((
                    StorySection {
                        number,
                        heading,
                        body: String::new(),
                    },
                    Vec::new(),
                ));
            }
            None => {
                if let Some((_, body)) = sections.last_mut() {
                    body.push(line);
                }
            }
        }
    }

    if sections.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![StorySection {
                number: 1,
                heading: DEFAULT_TITLE.to_string(),
                body: text.to_string(),
            }]
        };
    }

    let mut sections: Vec<StorySection> = sections
        .into_iter()
        .map(|(mut section, body)| {
            section.body = body.join("\n").trim().to_string();
            section
        })
        .collect();
    sections.sort_by_key(|section| section.number);
    sections.truncate(MAX_SECTIONS);
    sections
}
