//! Image and text link conversion.
//!
//! Both passes recognise their pattern by explicit bracket and
//! parenthesis scanning. The image pass runs first and only claims
//! occurrences whose URL carries a recognised raster extension; anything
//! it rejects is left intact for the text-link pass, which then converts
//! the bracket portion and leaves the leading `!` behind as literal
//! text. Unterminated brackets or parentheses end the pass, leaving the
//! remainder unconverted.

use crate::zones::CodeZones;

/// URL substrings accepted by the image pass.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".png", ".jpeg", ".gif"];

const IMAGE_CLASS: &str = "d-block img-fluid mx-auto";

/// Convert `![label](url)` tokens whose URL looks like a raster image.
///
/// The extension check is a substring match anywhere in the URL, not a
/// suffix match. Rejected occurrences are left completely unmodified.
#[must_use]
pub fn convert_images(mut buf: String) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(rel) = buf[cursor..].find("![") {
        let start = cursor + rel;
        if zones.contains(start) {
            cursor = start + 2;
            continue;
        }
        let Some(bracket_rel) = buf[start..].find("](") else {
            break;
        };
        let bracket = start + bracket_rel;
        let Some(end_rel) = buf[bracket..].find(')') else {
            break;
        };
        let end = bracket + end_rel;
        let url = buf[bracket + 2..end].to_string();
        if !IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext)) {
            // Not an image URL; the link pass will claim the brackets.
            cursor = end;
            continue;
        }
        let alt = buf[start + 2..bracket].to_string();
        let tag = format!("<img src=\"{url}\" alt=\"{alt}\" class=\"{IMAGE_CLASS}\" />");
        buf.replace_range(start..=end, &tag);
        zones.shift(start, end + 1 - start, tag.len());
        cursor = start + tag.len();
    }
    buf
}

/// Convert `[label](url)` tokens into anchors opening a new tab.
#[must_use]
pub fn convert_links(mut buf: String) -> String {
    let mut zones = CodeZones::scan(&buf);
    let mut cursor = 0;
    while let Some(rel) = buf[cursor..].find('[') {
        let start = cursor + rel;
        if zones.contains(start) {
            cursor = start + 1;
            continue;
        }
        let Some(bracket_rel) = buf[start..].find("](") else {
            break;
        };
        let bracket = start + bracket_rel;
        let Some(end_rel) = buf[bracket..].find(')') else {
            break;
        };
        let end = bracket + end_rel;
        let label = buf[start + 1..bracket].to_string();
        let url = buf[bracket + 2..end].to_string();
        let tag = format!("<a href=\"{url}\" target=\"_blank\">{label}</a>");
        buf.replace_range(start..=end, &tag);
        zones.shift(start, end + 1 - start, tag.len());
        cursor = start + tag.len();
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_a_recognised_image() {
        let out = convert_images("![alt](pic.png)".to_string());
        assert_eq!(
            out,
            "<img src=\"pic.png\" alt=\"alt\" class=\"d-block img-fluid mx-auto\" />"
        );
    }

    #[test]
    fn extension_matches_anywhere_in_the_url() {
        let out = convert_images("![a](cdn/.png/raw)".to_string());
        assert!(out.starts_with("<img src=\"cdn/.png/raw\""));
    }

    #[test]
    fn rejected_extension_is_left_intact() {
        let out = convert_images("![alt](pic.bmp)".to_string());
        assert_eq!(out, "![alt](pic.bmp)");
    }

    #[test]
    fn converts_a_link() {
        let out = convert_links("[here](https://example.com)".to_string());
        assert_eq!(
            out,
            "<a href=\"https://example.com\" target=\"_blank\">here</a>"
        );
    }

    #[test]
    fn unterminated_link_stops_the_pass() {
        let out = convert_links("[broken](no-close".to_string());
        assert_eq!(out, "[broken](no-close");
    }

    #[test]
    fn links_inside_code_stay_raw() {
        let out = convert_links("<code>[x](y)</code>".to_string());
        assert_eq!(out, "<code>[x](y)</code>");
    }
}
