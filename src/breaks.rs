//! Horizontal rules and line-break finalization.

use crate::tokens::replace_each;

/// Convert every `---` outside code zones into a rule element.
///
/// Unlike headings there is no line-start constraint; a `---` in running
/// text converts too.
#[must_use]
pub fn convert_rules(buf: String) -> String {
    replace_each(buf, "---", "<hr />")
}

/// Trim the buffer, then convert the remaining newlines to `<br/>`.
///
/// Must run last: every earlier pass locates line boundaries by the raw
/// newline character. Newlines inside code zones stay literal.
#[must_use]
pub fn finalize(buf: String) -> String {
    replace_each(buf.trim().to_string(), "\n", "<br/>")
}
