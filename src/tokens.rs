//! Guarded token-replacement engines shared by the conversion passes.
//!
//! Both engines scan left to right, skip occurrences inside exclusion
//! zones, and resume after each inserted replacement so a token is never
//! re-read in the shifted index space.

use crate::zones::CodeZones;

/// Replace every guarded occurrence of `token` with `replacement`.
///
/// Occurrences inside code zones are left untouched and scanning
/// continues past them.
///
/// # Examples
///
/// ```
/// use mdpost::replace_each;
///
/// assert_eq!(replace_each("a---b".to_string(), "---", "<hr />"), "a<hr />b");
/// ```
#[must_use]
pub fn replace_each(mut buf: String, token: &str, replacement: &str) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(rel) = buf[cursor..].find(token) {
        let pos = cursor + rel;
        if zones.contains(pos) {
            cursor = pos + token.len();
            continue;
        }
        buf.replace_range(pos..pos + token.len(), replacement);
        zones.shift(pos, token.len(), replacement.len());
        cursor = pos + replacement.len();
    }
    buf
}

/// Replace guarded `token` pairs with `open_tag` and `close_tag`.
///
/// The first guarded occurrence opens a pair; the nearest following
/// occurrence closes it. A missing close leaves the opening tag in place
/// and ends the pass (partial conversion, not an error).
///
/// # Examples
///
/// ```
/// use mdpost::replace_paired;
///
/// assert_eq!(
///     replace_paired("**hi**".to_string(), "**", "<b>", "</b>"),
///     "<b>hi</b>"
/// );
/// ```
#[must_use]
pub fn replace_paired(mut buf: String, token: &str, open_tag: &str, close_tag: &str) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(rel) = buf[cursor..].find(token) {
        let open = cursor + rel;
        if zones.contains(open) {
            cursor = open + token.len();
            continue;
        }
        buf.replace_range(open..open + token.len(), open_tag);
        zones.shift(open, token.len(), open_tag.len());
        let search = open + open_tag.len();
        let Some(rel_close) = buf[search..].find(token) else {
            break;
        };
        let close = search + rel_close;
        buf.replace_range(close..close + token.len(), close_tag);
        zones.shift(close, token.len(), close_tag.len());
        cursor = close + close_tag.len();
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let out = replace_each("a---b---c".to_string(), "---", "<hr />");
        assert_eq!(out, "a<hr />b<hr />c");
    }

    #[test]
    fn skips_occurrences_inside_code() {
        let out = replace_each("<code>---</code>---".to_string(), "---", "<hr />");
        assert_eq!(out, "<code>---</code><hr />");
    }

    #[test]
    fn pairs_consume_nearest_close() {
        let out = replace_paired("*a* and *b*".to_string(), "*", "<i>", "</i>");
        assert_eq!(out, "<i>a</i> and <i>b</i>");
    }

    #[test]
    fn missing_close_keeps_opening_tag() {
        let out = replace_paired("**dangling".to_string(), "**", "<b>", "</b>");
        assert_eq!(out, "<b>dangling");
    }

    #[test]
    fn paired_tokens_inside_code_stay_raw() {
        let out = replace_paired("<code>**x**</code>".to_string(), "**", "<b>", "</b>");
        assert_eq!(out, "<code>**x**</code>");
    }
}
