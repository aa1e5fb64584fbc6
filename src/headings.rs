//! Heading conversion.
//!
//! One pass per level, longest token first so a shorter token never
//! prefix-matches inside a longer one. A token qualifies only when it is
//! the first non-whitespace content on its line; the closing tag goes
//! immediately before the line's terminating break, or at the end of the
//! buffer when the heading ends the input.

use std::sync::LazyLock;

use regex::Regex;

use crate::zones::CodeZones;

const HEADING_LEVELS: [(&str, &str, &str); 4] = [
    ("####", "<h4>", "</h4>"),
    ("###", "<h3>", "</h3>"),
    ("##", "<h2>", "</h2>"),
    ("#", "<h1>", "</h1>"),
];

// Anchored so a token preceded by anything but blanks on its line is
// never a candidate.
static HEADING_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    HEADING_LEVELS
        .iter()
        .map(|(token, _, _)| {
            Regex::new(&format!(r"(?m)^[ \t]*{}", regex::escape(token)))
                .expect("valid heading regex")
        })
        .collect()
});

/// Convert ATX-style heading lines, deepest level first.
///
/// # Panics
/// Panics if a heading regex fails to compile.
#[must_use]
pub fn convert_headings(buf: String) -> String {
    HEADING_LEVELS
        .iter()
        .zip(HEADING_RES.iter())
        .fold(buf, |buf, (&(token, open, close), re)| {
            convert_level(buf, token, open, close, re)
        })
}

fn convert_level(
    mut buf: String,
    token: &str,
    open_tag: &str,
    close_tag: &str,
    re: &Regex,
) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(m) = re.find_at(&buf, cursor) {
        let end = m.end();
        let pos = end - token.len();
        if zones.contains(pos) {
            cursor = end;
            continue;
        }
        buf.replace_range(pos..end, open_tag);
        zones.shift(pos, token.len(), open_tag.len());
        let after = pos + open_tag.len();
        let insert_at = buf[after..].find('\n').map_or(buf.len(), |rel| after + rel);
        buf.insert_str(insert_at, close_tag);
        zones.shift(insert_at, 0, close_tag.len());
        cursor = insert_at + close_tag.len();
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title\nbody", "<h1> Title</h1>\nbody")]
    #[case("## Title\nbody", "<h2> Title</h2>\nbody")]
    #[case("### Title\nbody", "<h3> Title</h3>\nbody")]
    #[case("#### Title\nbody", "<h4> Title</h4>\nbody")]
    fn converts_each_level(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_headings(input.to_string()), expected);
    }

    #[test]
    fn heading_at_end_of_input_closes_at_buffer_end() {
        assert_eq!(convert_headings("## End".to_string()), "<h2> End</h2>");
    }

    #[test]
    fn mid_line_hashes_are_not_headings() {
        assert_eq!(
            convert_headings("see #tag here".to_string()),
            "see #tag here"
        );
    }

    #[test]
    fn indented_heading_converts_and_keeps_indent() {
        assert_eq!(
            convert_headings("  # Deep\n".to_string()),
            "  <h1> Deep</h1>\n"
        );
    }

    #[test]
    fn hashes_inside_code_stay_raw() {
        assert_eq!(
            convert_headings("<code>x\n# not a heading\n</code>".to_string()),
            "<code>x\n# not a heading\n</code>"
        );
    }
}
