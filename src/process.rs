//! The ordered conversion pipeline.

use crate::{breaks, code, emphasis, headings, links, lists};

type Pass = fn(String) -> String;

// Conversion passes in execution order. The order is behavioural, not
// stylistic: code regions must be protected before any inline styling,
// the image pass must precede the link pass it overlaps with, emphasis
// must precede headings, rules and lists follow headings, and
// line-break conversion runs strictly last because every earlier pass
// finds line boundaries by the raw newline character.
const PASSES: [Pass; 9] = [
    code::convert_fences,
    code::escape_code_entities,
    links::convert_images,
    links::convert_links,
    emphasis::convert_emphasis,
    headings::convert_headings,
    breaks::convert_rules,
    lists::convert_lists,
    breaks::finalize,
];

/// Convert raw post markup into an HTML fragment.
///
/// Conversion is best effort: unterminated constructs stop their pass
/// early, replacements already applied are kept, and the unconverted
/// remainder passes through as literal text. The output is rendered as
/// far as possible, never all-or-nothing.
///
/// # Examples
///
/// ```
/// assert_eq!(mdpost::convert("**bold**"), "<b>bold</b>");
/// ```
#[must_use]
pub fn convert(text: &str) -> String {
    PASSES.iter().fold(text.to_string(), |buf, pass| pass(buf))
}
