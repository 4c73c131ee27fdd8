//! Tests for the structural field selector against HTML fixtures
//!
//! The selector built by `structural_selector` runs inside the browser at
//! runtime; here it is exercised through `scraper`, which uses the same CSS
//! matching engine, against markup shaped like real tool pages.

use backlink_runner::form_probe::structural_selector;
use backlink_runner::utils::constants::{KEYWORD_FIELD_HINTS, URL_FIELD_HINTS};
use scraper::{Html, Selector};

fn first_match<'a>(html: &'a Html, hints: &[&str]) -> Option<String> {
    let selector = Selector::parse(&structural_selector(hints)).ok()?;
    html.select(&selector)
        .next()
        .and_then(|el| el.value().attr("name").map(str::to_string))
}

#[test]
fn name_attribute_matches_url_hints() {
    let html = Html::parse_document(
        r#"
        <form>
            <input type="text" name="email">
            <input type="text" name="site_url">
        </form>
    "#,
    );
    assert_eq!(
        first_match(&html, &URL_FIELD_HINTS),
        Some("site_url".to_string())
    );
}

#[test]
fn attribute_matching_is_case_insensitive() {
    let html = Html::parse_document(r#"<input name="Website_Address">"#);
    assert_eq!(
        first_match(&html, &URL_FIELD_HINTS),
        Some("Website_Address".to_string())
    );
}

#[test]
fn placeholder_and_aria_label_are_consulted() {
    let html = Html::parse_document(
        r#"
        <input name="q1" placeholder="Enter your URL here">
        <textarea name="q2" aria-label="Anchor text"></textarea>
    "#,
    );
    assert_eq!(first_match(&html, &URL_FIELD_HINTS), Some("q1".to_string()));
    assert_eq!(
        first_match(&html, &KEYWORD_FIELD_HINTS),
        Some("q2".to_string())
    );
}

#[test]
fn unrelated_fields_do_not_match() {
    let html = Html::parse_document(
        r#"
        <input name="email" placeholder="Your email">
        <input name="captcha">
    "#,
    );
    assert_eq!(first_match(&html, &URL_FIELD_HINTS), None);
    assert_eq!(first_match(&html, &KEYWORD_FIELD_HINTS), None);
}

#[test]
fn selector_parses_for_both_hint_sets() {
    assert!(Selector::parse(&structural_selector(&URL_FIELD_HINTS)).is_ok());
    assert!(Selector::parse(&structural_selector(&KEYWORD_FIELD_HINTS)).is_ok());
}
