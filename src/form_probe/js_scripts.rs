//! JavaScript probes used to inventory form controls.
//!
//! Each inventory script walks the live DOM, tags every candidate node with
//! a `data-blr-*` index attribute, and returns a JSON array describing the
//! candidates. Matching happens Rust-side; the chosen node is then
//! re-resolved through its tag attribute with a plain CSS query. This keeps
//! all heuristics out of the page context, where third-party scripts could
//! interfere with them.

/// Inventory all `<label>` elements that resolve to a fillable control.
///
/// Resolution follows the `for` attribute first, then the first
/// input/textarea/select nested inside the label. Each resolved control is
/// tagged with `data-blr-control="<index>"`; the returned entries carry the
/// index and the label's visible text.
pub const LABEL_INVENTORY_SCRIPT: &str = r#"
    (() => {
        const entries = [];
        let index = 0;
        document.querySelectorAll('label').forEach(label => {
            let control = null;
            const forId = label.getAttribute('for');
            if (forId) {
                control = document.getElementById(forId);
            }
            if (!control) {
                control = label.querySelector('input, textarea, select');
            }
            if (!control) {
                return;
            }
            const tag = control.tagName.toLowerCase();
            if (tag === 'input') {
                const type = (control.getAttribute('type') || 'text').toLowerCase();
                if (['hidden', 'submit', 'button', 'checkbox', 'radio', 'file', 'image'].includes(type)) {
                    return;
                }
            }
            control.setAttribute('data-blr-control', String(index));
            entries.push({
                index: index,
                text: (label.textContent || '').trim()
            });
            index += 1;
        });
        return entries;
    })()
"#;

/// Inventory every control that could plausibly trigger submission.
///
/// Covers `<button>`, clickable `<input>` variants, and anchors with a
/// button role. Each is tagged with `data-blr-action="<index>"`; entries
/// carry visible text, the `value` attribute, and the accessible name from
/// `aria-label`/`title`, all of which the label matcher consults in turn.
pub const SUBMIT_INVENTORY_SCRIPT: &str = r#"
    (() => {
        const entries = [];
        let index = 0;
        const candidates = document.querySelectorAll(
            'button, input[type="submit"], input[type="button"], input[type="image"], a[role="button"]'
        );
        candidates.forEach(el => {
            el.setAttribute('data-blr-action', String(index));
            entries.push({
                index: index,
                tag: el.tagName.toLowerCase(),
                text: (el.textContent || '').trim(),
                value: el.getAttribute('value') || '',
                aria: el.getAttribute('aria-label') || el.getAttribute('title') || ''
            });
            index += 1;
        });
        return entries;
    })()
"#;

/// Element-scoped function that empties a field and fires an `input` event
/// so the page's own change handlers observe the clear.
pub const CLEAR_FIELD_FN: &str = r"
    function() {
        this.value = '';
        this.dispatchEvent(new Event('input', { bubbles: true }));
    }
";
