//! Fenced code block conversion and code-content escaping.
//!
//! The fence pass is the first pass of the pipeline: the regions it
//! commits to `<pre><code>` blocks become exclusion zones for everything
//! that follows. The escaper is the one pass allowed to rewrite zone
//! content, and only to turn angle brackets into entities.

use crate::zones::CodeZones;

const FENCE: &str = "```";
const OPEN_TAG: &str = "<pre><code>";
const CLOSE_TAG: &str = "</code></pre>";

/// Convert paired triple-backtick fences into `<pre><code>` blocks.
///
/// The opening delimiter consumes the newline that follows it and the
/// closing delimiter the newline that precedes it, so fence markers leave
/// no stray breaks inside the emitted block. An opening fence without a
/// close is converted and the pass stops silently, leaving the remainder
/// of the buffer unmodified.
#[must_use]
pub fn convert_fences(mut buf: String) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(rel) = buf[cursor..].find(FENCE) {
        let open = cursor + rel;
        if zones.contains(open) {
            cursor = open + FENCE.len();
            continue;
        }
        let mut open_len = FENCE.len();
        if buf[open + open_len..].starts_with('\n') {
            open_len += 1;
        }
        buf.replace_range(open..open + open_len, OPEN_TAG);
        zones.shift(open, open_len, OPEN_TAG.len());
        let content = open + OPEN_TAG.len();
        let Some(rel_close) = buf[content..].find(FENCE) else {
            break;
        };
        let mut close = content + rel_close;
        let mut close_len = FENCE.len();
        if close > content && buf.as_bytes()[close - 1] == b'\n' {
            close -= 1;
            close_len += 1;
        }
        buf.replace_range(close..close + close_len, CLOSE_TAG);
        zones.shift(close, close_len, CLOSE_TAG.len());
        cursor = close + CLOSE_TAG.len();
    }
    buf
}

/// Escape angle brackets inside code zones.
///
/// Each `<` found inside a zone becomes `&lt;`. The next `>` is escaped
/// only while it is also inside a zone; a `>` past the span boundary is
/// left alone and scanning moves on. Best effort, not validated for
/// well-formedness.
#[must_use]
pub fn escape_code_entities(mut buf: String) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(rel) = buf[cursor..].find('<') {
        let open = cursor + rel;
        if !zones.contains(open) {
            cursor = open + 1;
            continue;
        }
        buf.replace_range(open..open + 1, "&lt;");
        zones.shift(open, 1, "&lt;".len());
        match buf[open..].find('>') {
            Some(rel_close) => {
                let close = open + rel_close;
                if zones.contains(close) {
                    buf.replace_range(close..close + 1, "&gt;");
                    zones.shift(close, 1, "&gt;".len());
                    cursor = close;
                } else {
                    cursor = open + 1;
                }
            }
            None => cursor = open + 1,
        }
    }
    buf
}
