//! Form probing: heuristic field location and submission.

pub mod field_locator;
mod js_scripts;
pub mod submitter;

pub use field_locator::{fill_field, locate_field, structural_selector};
pub use submitter::try_submit;
