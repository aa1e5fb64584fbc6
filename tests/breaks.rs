//! Integration tests for horizontal rules and line-break finalization.

use mdpost::convert;

#[macro_use]
mod prelude;

#[test]
fn rule_on_its_own_line() {
    let out = convert(&md!["above", "---", "below"]);
    assert_eq!(out, "above<br/><hr /><br/>below");
}

#[test]
fn rule_in_running_text_converts_too() {
    assert_eq!(convert("a --- b"), "a <hr /> b");
}

#[test]
fn rules_inside_fences_stay_raw() {
    let out = convert(&md!["```", "---", "```"]);
    assert_eq!(out, "<pre><code>---</code></pre>");
}

#[test]
fn rule_tokens_inside_earlier_output_still_convert() {
    // The rule pass runs after the link pass and enforces no line-start
    // constraint, so a `---` inside an emitted href converts as well.
    let out = convert("[x](a---b)");
    assert_eq!(out, "<a href=\"a<hr />b\" target=\"_blank\">x</a>");
}

#[test]
fn every_newline_becomes_a_break() {
    assert_eq!(convert("a\nb\n\nc"), "a<br/>b<br/><br/>c");
}

#[test]
fn outer_whitespace_is_trimmed_before_breaks() {
    assert_eq!(convert("\n a\nb \n"), "a<br/>b");
}
