//! Changelog section extraction.
//!
//! Recognizes one narrow pattern in a changelog document: a `###` heading
//! followed immediately by a list. Each match becomes a named section whose
//! changes are the list re-serialized with a fixed style (bullet `-`,
//! emphasis `_`), regardless of how the source document was written.

use crate::types::Section;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};
use pulldown_cmark_to_cmark::{Options as CmarkOptions, cmark_with_options};

/// Extract (heading, list) section pairs from changelog markdown.
///
/// The document's top-level blocks are scanned with a one-block lookahead.
/// The scan advances one block per step; matched pairs are not consumed
/// specially, so a list directly following another qualifying list is
/// evaluated on its own in the next iteration. The last block has no
/// successor and is never evaluated as a section header: a trailing heading
/// with no list yields no section.
pub fn extract_sections(text: &str) -> Vec<Section> {
    let events: Vec<Event> = Parser::new(text).collect();
    let blocks = top_level_blocks(events);
    let mut sections = Vec::new();

    for pair in blocks.windows(2) {
        let Some(name) = section_name(&pair[0]) else {
            continue;
        };
        if !is_change_list(&pair[1]) {
            continue;
        }
        if let Some(changes) = render_changes(&pair[1]) {
            sections.push(Section { name, changes });
        }
    }

    sections
}

/// Group a parsed event stream into top-level block event runs.
///
/// Each run is one block-level node: everything from a depth-zero `Start`
/// to its matching `End`, or a single bare top-level event such as a
/// thematic break.
fn top_level_blocks(events: Vec<Event<'_>>) -> Vec<Vec<Event<'_>>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;

    for event in events {
        match &event {
            Event::Start(_) => {
                depth += 1;
                current.push(event);
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                current.push(event);
                if depth == 0 {
                    blocks.push(std::mem::take(&mut current));
                }
            }
            _ => {
                current.push(event);
                if depth == 0 {
                    blocks.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// The heading's leading text, if the block is a depth-3 heading whose first
/// inline child is plain text. A heading opening with emphasis, code, or a
/// link does not name a section.
fn section_name(block: &[Event<'_>]) -> Option<String> {
    let mut events = block.iter();
    match events.next()? {
        Event::Start(Tag::Heading {
            level: HeadingLevel::H3,
            ..
        }) => {}
        _ => return None,
    }
    match events.next()? {
        Event::Text(text) => Some(text.to_string()),
        _ => None,
    }
}

/// Whether the block is a list with at least one item.
fn is_change_list(block: &[Event<'_>]) -> bool {
    if !matches!(block.first(), Some(Event::Start(Tag::List(_)))) {
        return false;
    }
    block
        .iter()
        .any(|event| matches!(event, Event::Start(Tag::Item)))
}

/// Re-serialize a change list to markdown with the fixed output style.
fn render_changes(block: &[Event<'_>]) -> Option<String> {
    let mut out = String::new();
    let mut options = CmarkOptions::default();
    options.list_token = '-';
    options.emphasis_token = '_';
    cmark_with_options(block.iter(), &mut out, options).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_named_sections_in_document_order() {
        let text = "### Features\n- Add X\n- Add Y\n\n### Fixes\n- Fix Z\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Features");
        assert_eq!(sections[0].changes, "- Add X\n- Add Y");
        assert_eq!(sections[1].name, "Fixes");
        assert_eq!(sections[1].changes, "- Fix Z");
    }

    #[test]
    fn renders_changes_with_fixed_style() {
        // Source list uses `*` bullets and `*emphasis*`; output style is fixed
        let text = "### Features\n* Add *X*\n* Add Y\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].changes, "- Add _X_\n- Add Y");
    }

    #[test]
    fn document_without_pairs_yields_nothing() {
        assert!(extract_sections("").is_empty());
        assert!(extract_sections("Just a paragraph.\n\nAnother one.\n").is_empty());
        assert!(extract_sections("### Heading\n\nNot a list after it.\n").is_empty());
    }

    #[test]
    fn trailing_heading_without_list_yields_no_section() {
        let text = "### Features\n- Add X\n\n### Deprecated\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Features");
    }

    #[test]
    fn only_depth_three_headings_qualify() {
        let text = "## Features\n- Add X\n\n#### Fixes\n- Fix Z\n\n### Chores\n- Tidy\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Chores");
    }

    #[test]
    fn headings_opening_with_markup_do_not_qualify() {
        for text in [
            "### _Features_\n- Add X\n",
            "### `Features`\n- Add X\n",
            "### [Features](https://example.com)\n- Add X\n",
        ] {
            assert!(extract_sections(text).is_empty(), "matched: {text}");
        }
    }

    #[test]
    fn list_following_a_matched_list_is_evaluated_independently() {
        // The marker change starts a second list block. It has no heading
        // directly before it, so only the first pair matches; the scan still
        // advances one block at a time.
        let text = "### Features\n- Add X\n\n* Stray item\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].changes, "- Add X");
    }

    #[test]
    fn surrounding_blocks_are_skipped_not_errors() {
        let text = "# 2.0.0\n\nIntro paragraph.\n\n---\n\n### Features\n- Add X\n\nOutro.\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Features");
        assert_eq!(sections[0].changes, "- Add X");
    }

    #[test]
    fn heading_text_stops_at_the_first_inline_child() {
        let text = "### Bug `fixes`\n- Fix Z\n";
        let sections = extract_sections(text);
        assert_eq!(sections.len(), 1);
        // Only the leading plain-text child names the section
        assert_eq!(sections[0].name, "Bug ");
    }
}
