//! Exclusion-zone tracking for converted code spans.
//!
//! Once the fence pass has committed a region of the buffer to a code
//! span, no later pass may reinterpret its contents as markup. The
//! detector pairs `<code` markers with the nearest following `</code>`
//! and answers strictly-inside queries. Zones are collected in one scan
//! per pass and kept valid across replacements by boundary shifting,
//! rather than re-scanning the buffer for every query.

const OPEN_MARKER: &str = "<code";
const CLOSE_MARKER: &str = "</code>";

/// Ordered set of code-span ranges within the working buffer.
///
/// Each zone runs from the first byte of its `<code` marker to the first
/// byte of the matching `</code>` marker. A position counts as inside
/// only when it lies strictly between the two, so the markers themselves
/// are never treated as protected content.
///
/// # Examples
///
/// ```
/// use mdpost::CodeZones;
///
/// let zones = CodeZones::scan("a <code>x</code> b");
/// assert!(zones.contains(8)); // the `x`
/// assert!(!zones.contains(0));
/// ```
#[derive(Debug, Default)]
pub struct CodeZones {
    zones: Vec<(usize, usize)>,
}

impl CodeZones {
    /// Collect the code zones currently present in `buf`.
    ///
    /// An unmatched `<code` marker opens a zone that extends to the end
    /// of the buffer, so an unterminated fence still protects its tail.
    #[must_use]
    pub fn scan(buf: &str) -> Self {
        let mut zones = Vec::new();
        let mut cursor = 0;
        while let Some(rel) = buf[cursor..].find(OPEN_MARKER) {
            let start = cursor + rel;
            match buf[start..].find(CLOSE_MARKER) {
                Some(rel_end) => {
                    let end = start + rel_end;
                    zones.push((start, end));
                    cursor = end + CLOSE_MARKER.len();
                }
                None => {
                    zones.push((start, buf.len()));
                    break;
                }
            }
        }
        Self { zones }
    }

    /// Report whether `idx` lies strictly inside a code zone.
    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        match self.zones.binary_search_by(|&(start, _)| start.cmp(&idx)) {
            // `idx` sits on an opening marker, not on span content.
            Ok(_) | Err(0) => false,
            Err(slot) => {
                let (start, end) = self.zones[slot - 1];
                idx > start && idx < end
            }
        }
    }

    /// Adjust zone boundaries after `old_len` bytes at `at` were replaced
    /// by `new_len` bytes.
    ///
    /// Replacements made by the passes never straddle a zone boundary, so
    /// every boundary past the replacement site moves by the same amount.
    pub fn shift(&mut self, at: usize, old_len: usize, new_len: usize) {
        for (start, end) in &mut self.zones {
            if *start > at {
                *start = *start - old_len + new_len;
            }
            if *end > at {
                *end = *end - old_len + new_len;
            }
        }
    }
}
