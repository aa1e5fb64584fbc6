//! Emphasis conversion.
//!
//! The token table is ordered longest first: `*` is a literal prefix of
//! `**`, so running the italic pass before the bold pass would consume
//! one asterisk of every bold pair and corrupt it.

use crate::tokens::replace_paired;

const EMPHASIS_TOKENS: [(&str, &str, &str); 2] = [("**", "<b>", "</b>"), ("*", "<i>", "</i>")];

/// Run the bold pass, then the italic pass.
#[must_use]
pub fn convert_emphasis(buf: String) -> String {
    EMPHASIS_TOKENS
        .iter()
        .fold(buf, |buf, &(token, open, close)| {
            replace_paired(buf, token, open, close)
        })
}
