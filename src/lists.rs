//! List building.
//!
//! A list run starts at a line-leading marker and consumes consecutive
//! marker-led lines, one `<li>` per line. A blank line or any line
//! without the marker ends the run, and the whole run is replaced in one
//! operation. Nested markers are not interpreted and stay literal text.

use std::sync::LazyLock;

use regex::Regex;

use crate::{lazy_regex, zones::CodeZones};

static ULIST_MARKER_RE: LazyLock<Regex> = lazy_regex!(r"(?m)^- ", "valid unordered marker regex");
static OLIST_MARKER_RE: LazyLock<Regex> = lazy_regex!(r"(?m)^1\. ", "valid ordered marker regex");

/// Build unordered lists, then ordered lists.
///
/// Every item line carries the literal marker: `- ` for unordered runs
/// and `1. ` for ordered runs.
///
/// # Panics
/// Panics if a list marker regex fails to compile.
#[must_use]
pub fn convert_lists(buf: String) -> String {
    let styles = [
        ("- ", "<ul>", "</ul>", &*ULIST_MARKER_RE),
        ("1. ", "<ol>", "</ol>", &*OLIST_MARKER_RE),
    ];
    styles
        .into_iter()
        .fold(buf, |buf, (marker, open, close, re)| {
            build_lists(buf, marker, open, close, re)
        })
}

fn build_lists(
    mut buf: String,
    marker: &str,
    open_tag: &str,
    close_tag: &str,
    re: &Regex,
) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(m) = re.find_at(&buf, cursor) {
        let (start, end) = (m.start(), m.end());
        if zones.contains(start) {
            cursor = end;
            continue;
        }
        let mut html = String::from(open_tag);
        let mut line_start = start;
        let run_end = loop {
            let item_start = line_start + marker.len();
            let (item_end, next_line) = match buf[item_start..].find('\n') {
                Some(rel) => (item_start + rel, item_start + rel + 1),
                None => (buf.len(), buf.len()),
            };
            html.push_str("<li>");
            html.push_str(&buf[item_start..item_end]);
            html.push_str("</li>");
            if next_line >= buf.len() || !buf[next_line..].starts_with(marker) {
                break next_line;
            }
            line_start = next_line;
        };
        html.push_str(close_tag);
        buf.replace_range(start..run_end, &html);
        zones.shift(start, run_end - start, html.len());
        cursor = start + html.len();
    }
    buf
}
