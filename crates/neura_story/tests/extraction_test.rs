//! Parsing realistic model output.

use neura_core::DecisionOptions;
use neura_story::{
    extract_continuation_sections, extract_options, extract_title, has_section_five,
    locate_section, split_sections,
};

const INLINE_DECISION: &str = "1. Prasad and the Slide\n\n\
2. Prasad is at the playground near his house.\n\n\
3. Many children are waiting for the slide. What should Prasad do?\n\n\
4. A. Prasad waits for his turn and counts to ten.\n   \
B. Prasad pushes another child to get to the front.\n   \
C. Prasad walks away and plays alone on the swings.";

const MARKDOWN: &str = "**1. Title:** Sharing the Red Ball\n\
**2. Introduction** Mia has a red ball at recess.\n\
**3. Challenge** Leo wants to play too. What should Mia do?\n\
**4. Decision**\n\
- A. Mia rolls the ball to Leo.\n\
- B. Mia grabs the ball and runs.\n\
- C. Mia puts the ball away and sits alone.\n";

#[test]
fn decision_on_numbered_line_without_label() {
    let block = locate_section(INLINE_DECISION, 4, "Decision");
    assert_eq!(block, INLINE_DECISION.trim());
    let options = DecisionOptions::from_candidates(extract_options(&block)).unwrap();
    assert_eq!(
        options.as_slice(),
        &[
            "Prasad waits for his turn and counts to ten.",
            "Prasad pushes another child to get to the front.",
            "Prasad walks away and plays alone on the swings.",
        ]
    );
    assert_eq!(extract_title(INLINE_DECISION), "Prasad and the Slide");
}

#[test]
fn markdown_headings_and_bulleted_labels() {
    assert_eq!(extract_title(MARKDOWN), "Sharing the Red Ball");
    let options = extract_options(&locate_section(MARKDOWN, 4, "Decision"));
    assert_eq!(
        options,
        vec![
            "Mia rolls the ball to Leo.",
            "Mia grabs the ball and runs.",
            "Mia puts the ball away and sits alone.",
        ]
    );
}

#[test]
fn garbage_decision_blocks_yield_nothing() {
    assert!(extract_options("").is_empty());
    assert!(extract_options("\n  \n - \n * • \n").is_empty());
}

#[test]
fn options_never_exceed_three() {
    let block = "A. One.\nB. Two.\nC. Three.\n- Four.\n- Five.";
    assert_eq!(extract_options(block).len(), 3);
    let bullets = "- One\n- Two\n- Three\n- Four";
    assert_eq!(extract_options(bullets), vec!["One", "Two", "Three"]);
}

#[test]
fn continuation_with_preamble_and_trailing_chatter() {
    let raw = "Here is the rest of the story:\n\n\
5. Prasad pushes and the other child falls. Prasad feels sorry.\n\
6. Ms. Lee says, \"That's not okay.\"\n\
7. Prasad says, \"Sorry.\"\n\
8. Prasad waits at the back of the line. He feels calm.\n\
9. Prasad slides down and feels happy.\n\
1. Let me know if you want another story!";
    let cleaned = extract_continuation_sections(raw);
    assert!(cleaned.starts_with("5. Prasad pushes"));
    assert!(cleaned.ends_with("feels happy."));
    assert!(has_section_five(&cleaned));
}

#[test]
fn sections_of_a_joined_story() {
    let story = format!(
        "{}\n\n{}",
        INLINE_DECISION,
        "5. Prasad waits.\n6. Nobody is upset.\n7. Prasad says thanks.\n8. Prasad slides.\n9. Prasad is happy."
    );
    let sections = split_sections(&story);
    assert_eq!(sections.len(), 9);
    assert_eq!(sections[0].heading, "Prasad and the Slide");
    assert_eq!(sections[3].number, 4);
    assert!(sections[3].body.contains("B. Prasad pushes"));
    assert_eq!(sections[8].illustration_text(), "9. Prasad is happy.\n");
}
