//! Heuristic form submission.
//!
//! Strategy order mirrors what actually works across the tool catalog:
//! 1. a native submit-typed control, clicked directly;
//! 2. the labeled-control inventory, matched against a fixed priority list
//!    of action words (accessible name first, then button text, then input
//!    value, per word);
//! 3. a page-level Enter key dispatched over CDP.
//!
//! Every sub-step is allowed to fail quietly; the return value only says
//! whether some submission action was taken.

use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchKeyEventParams, DispatchKeyEventType,
};
use regex::RegexBuilder;
use serde::Deserialize;

use super::js_scripts::SUBMIT_INVENTORY_SCRIPT;
use crate::utils::constants::SUBMIT_LABEL_KEYWORDS;

const NATIVE_SUBMIT_SELECTOR: &str = "input[type=\"submit\"], button[type=\"submit\"]";

#[derive(Debug, Deserialize)]
pub(crate) struct ActionEntry {
    pub(crate) index: u32,
    pub(crate) tag: String,
    pub(crate) text: String,
    pub(crate) value: String,
    pub(crate) aria: String,
}

/// Attempt to submit the form currently on the page.
///
/// Returns `true` if any submission action was performed, `false` when all
/// strategies came up empty. Never errors; a page where nothing is
/// clickable just ends up unsubmitted.
pub async fn try_submit(page: &Page) -> bool {
    if click_native_submit(page).await {
        return true;
    }

    if click_labeled_action(page).await {
        return true;
    }

    press_enter(page).await
}

async fn click_native_submit(page: &Page) -> bool {
    match page.find_element(NATIVE_SUBMIT_SELECTOR).await {
        Ok(element) => match element.click().await {
            Ok(_) => {
                log::debug!("Clicked native submit control");
                true
            }
            Err(e) => {
                log::debug!("Native submit control not clickable: {e}");
                false
            }
        },
        Err(e) => {
            log::debug!("No native submit control: {e}");
            false
        }
    }
}

async fn click_labeled_action(page: &Page) -> bool {
    let entries = match action_inventory(page).await {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Action inventory failed: {e}");
            return false;
        }
    };

    let Some(entry) = match_action(&entries, &SUBMIT_LABEL_KEYWORDS) else {
        return false;
    };

    let selector = format!("[data-blr-action=\"{}\"]", entry.index);
    match page.find_element(&selector).await {
        Ok(element) => match element.click().await {
            Ok(_) => {
                log::debug!("Clicked action control {:?}", entry.text);
                true
            }
            Err(e) => {
                log::debug!("Action control {} not clickable: {e}", entry.index);
                false
            }
        },
        Err(e) => {
            log::debug!("Tagged action {} not resolvable: {e}", entry.index);
            false
        }
    }
}

async fn action_inventory(page: &Page) -> anyhow::Result<Vec<ActionEntry>> {
    let result = page.evaluate(SUBMIT_INVENTORY_SCRIPT).await?;
    let value = result.into_value::<serde_json::Value>()?;
    Ok(serde_json::from_value(value)?)
}

/// Accessible name of an action control: an explicit `aria-label`/`title`
/// wins, otherwise buttons and anchors are named by their text content and
/// clickable inputs by their `value`.
fn accessible_name(entry: &ActionEntry) -> &str {
    if !entry.aria.is_empty() {
        &entry.aria
    } else if entry.tag == "input" {
        &entry.value
    } else {
        &entry.text
    }
}

/// Pick the first action entry matching the label priority list.
///
/// Labels are consulted in order; within one label the accessible names
/// are checked across all entries first, then raw button/anchor text, then
/// raw input values as a catch-all. This keeps a page with both a "Search"
/// nav button and a "Generate" form button resolving to "Generate".
pub(crate) fn match_action<'a>(
    entries: &'a [ActionEntry],
    labels: &[&str],
) -> Option<&'a ActionEntry> {
    for label in labels {
        let pattern = RegexBuilder::new(&regex::escape(label))
            .case_insensitive(true)
            .build()
            .ok()?;

        if let Some(entry) = entries
            .iter()
            .find(|e| pattern.is_match(accessible_name(e)))
        {
            return Some(entry);
        }
        if let Some(entry) = entries
            .iter()
            .find(|e| e.tag != "input" && pattern.is_match(&e.text))
        {
            return Some(entry);
        }
        if let Some(entry) = entries
            .iter()
            .find(|e| e.tag == "input" && pattern.is_match(&e.value))
        {
            return Some(entry);
        }
    }
    None
}

/// Dispatch a page-level Enter keypress over CDP.
///
/// Counts as a submission action when the dispatch itself succeeds; many
/// single-field tools submit on Enter even without a visible button.
async fn press_enter(page: &Page) -> bool {
    let events = [
        (DispatchKeyEventType::KeyDown, Some("\r")),
        (DispatchKeyEventType::KeyUp, None),
    ];

    for (event_type, text) in events {
        let mut builder = DispatchKeyEventParams::builder()
            .r#type(event_type)
            .key("Enter")
            .code("Enter")
            .windows_virtual_key_code(13)
            .native_virtual_key_code(13);
        if let Some(text) = text {
            builder = builder.text(text);
        }

        let params = match builder.build() {
            Ok(params) => params,
            Err(e) => {
                log::debug!("Failed to build key event: {e}");
                return false;
            }
        };

        if let Err(e) = page.execute(params).await {
            log::debug!("Enter dispatch failed: {e}");
            return false;
        }
    }

    log::debug!("Dispatched page-level Enter");
    true
}
