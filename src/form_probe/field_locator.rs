//! Heuristic location and filling of form fields on tool pages.
//!
//! Two passes, in order:
//! 1. accessible labels: inventory every label with a resolvable control,
//!    match label text against the hints Rust-side;
//! 2. structural attributes: one combined case-insensitive CSS selector
//!    over input/textarea placeholder/name/id/aria-label.
//!
//! No match is not an error. Tool pages vary wildly and the caller simply
//! skips a field it cannot find.

use anyhow::{Context, Result};
use chromiumoxide::{Element, Page};
use regex::RegexBuilder;
use serde::Deserialize;
use std::time::Duration;

use super::js_scripts::{CLEAR_FIELD_FN, LABEL_INVENTORY_SCRIPT};

/// Attributes consulted by the structural pass, in no particular order
/// (the combined selector returns the first match in document order).
const STRUCTURAL_ATTRS: [&str; 4] = ["placeholder", "name", "id", "aria-label"];

#[derive(Debug, Deserialize)]
struct LabelEntry {
    index: u32,
    text: String,
}

/// Locate the most plausible field for the given hints.
///
/// Returns `Ok(None)` when neither pass produces a match; probe failures
/// inside a pass are logged at debug level and treated as no-match so a
/// broken tool page never aborts the batch.
pub async fn locate_field(page: &Page, hints: &[&str]) -> Result<Option<Element>> {
    if let Some(element) = locate_by_label(page, hints).await {
        return Ok(Some(element));
    }

    let selector = structural_selector(hints);
    match page.find_element(&selector).await {
        Ok(element) => Ok(Some(element)),
        Err(e) => {
            log::debug!("Structural field probe found nothing: {e}");
            Ok(None)
        }
    }
}

/// Label pass: match label text against each hint in priority order.
async fn locate_by_label(page: &Page, hints: &[&str]) -> Option<Element> {
    let entries = match label_inventory(page).await {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Label inventory failed: {e}");
            return None;
        }
    };

    if entries.is_empty() {
        return None;
    }

    for hint in hints {
        let Some(entry) = first_matching_entry(&entries, hint) else {
            continue;
        };
        let tag_selector = format!("[data-blr-control=\"{}\"]", entry.index);
        match page.find_element(&tag_selector).await {
            Ok(element) => return Some(element),
            Err(e) => {
                // Tagged node vanished between inventory and resolution,
                // likely rewritten by the page's own scripts.
                log::debug!("Tagged control {} not resolvable: {e}", entry.index);
            }
        }
    }

    None
}

async fn label_inventory(page: &Page) -> Result<Vec<LabelEntry>> {
    let result = page
        .evaluate(LABEL_INVENTORY_SCRIPT)
        .await
        .context("Failed to run label inventory script")?;

    let value = result
        .into_value::<serde_json::Value>()
        .context("Label inventory returned no value")?;

    serde_json::from_value(value).context("Failed to parse label inventory")
}

fn first_matching_entry<'a>(entries: &'a [LabelEntry], hint: &str) -> Option<&'a LabelEntry> {
    let pattern = RegexBuilder::new(&regex::escape(hint))
        .case_insensitive(true)
        .build()
        .ok()?;
    entries.iter().find(|entry| pattern.is_match(&entry.text))
}

/// Build the combined structural selector for a hint list.
///
/// One union selector keeps this a single round-trip; the browser returns
/// the first match in document order.
#[must_use]
pub fn structural_selector(hints: &[&str]) -> String {
    let mut parts = Vec::with_capacity(hints.len() * STRUCTURAL_ATTRS.len() * 2);
    for hint in hints {
        for attr in STRUCTURAL_ATTRS {
            parts.push(format!("input[{attr}*=\"{hint}\" i]"));
            parts.push(format!("textarea[{attr}*=\"{hint}\" i]"));
        }
    }
    parts.join(", ")
}

/// Fill a located field: scroll it into view, focus it with a click, clear
/// any prefilled value, then type the text with a per-keystroke delay so
/// the page's input handlers fire per character.
pub async fn fill_field(element: &Element, text: &str, type_delay_ms: u64) -> Result<()> {
    element
        .scroll_into_view()
        .await
        .context("Failed to scroll field into view")?;
    element.click().await.context("Failed to focus field")?;
    element
        .call_js_fn(CLEAR_FIELD_FN, false)
        .await
        .context("Failed to clear field")?;

    if type_delay_ms == 0 {
        element
            .type_str(text)
            .await
            .context("Failed to type into field")?;
        return Ok(());
    }

    let delay = Duration::from_millis(type_delay_ms);
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        element
            .type_str(ch.encode_utf8(&mut buf))
            .await
            .context("Failed to type into field")?;
        tokio::time::sleep(delay).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_selector_covers_all_attrs() {
        let selector = structural_selector(&["url", "website"]);
        assert!(selector.contains("input[placeholder*=\"url\" i]"));
        assert!(selector.contains("input[name*=\"website\" i]"));
        assert!(selector.contains("textarea[id*=\"url\" i]"));
        assert!(selector.contains("input[aria-label*=\"website\" i]"));
    }

    #[test]
    fn label_match_is_case_insensitive_substring() {
        let entries = vec![
            LabelEntry {
                index: 0,
                text: "Your Email".into(),
            },
            LabelEntry {
                index: 1,
                text: "Website URL".into(),
            },
        ];
        let found = first_matching_entry(&entries, "url").map(|e| e.index);
        assert_eq!(found, Some(1));
        assert!(first_matching_entry(&entries, "anchor").is_none());
    }

    #[test]
    fn earlier_hint_wins_over_document_order() {
        let entries = vec![
            LabelEntry {
                index: 0,
                text: "Site address".into(),
            },
            LabelEntry {
                index: 1,
                text: "Target URL".into(),
            },
        ];
        // hints are consulted in order, so "url" beats "site" here
        let mut chosen = None;
        for hint in ["url", "site"] {
            if let Some(entry) = first_matching_entry(&entries, hint) {
                chosen = Some(entry.index);
                break;
            }
        }
        assert_eq!(chosen, Some(1));
    }
}
