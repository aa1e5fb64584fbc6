//! Utility helpers shared across integration tests.

/// Join string literals into a single newline-separated document.
macro_rules! md {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}

/// Build the expected `<img>` element for a converted image link.
pub fn img_tag(src: &str, alt: &str) -> String {
    format!("<img src=\"{src}\" alt=\"{alt}\" class=\"d-block img-fluid mx-auto\" />")
}

/// Build the expected anchor element for a converted text link.
pub fn anchor_tag(url: &str, label: &str) -> String {
    format!("<a href=\"{url}\" target=\"_blank\">{label}</a>")
}
