//! JavaScript evaluation scripts
//!
//! Scripts only read raw text out of the DOM (or click reveal controls).
//! Trimming, marker stripping, filtering and naming happen in Rust so they
//! can be tested without a browser.

use super::{AnchorLocator, PreviewLocator, RevealLocator, TableLocator};
use crate::dom::{DomContext, Script, ScriptKind, js_string};

fn js_array(values: &[&str]) -> String {
    serde_json::Value::from(values.to_vec()).to_string()
}

/// True once the preview iframe exists and its document has a body
#[must_use]
pub fn frame_check(preview: &PreviewLocator) -> Script {
    Script::new(
        ScriptKind::FrameCheck,
        format!(
            r#"(() => {{
  const frame = document.querySelector({});
  if (!frame) {{ return false; }}
  try {{
    return !!(frame.contentDocument && frame.contentDocument.body);
  }} catch (e) {{
    return false;
  }}
}})()"#,
            js_string(preview.frame_selector)
        ),
    )
}

/// True once the top-level document reports `readyState === "complete"`
#[must_use]
pub fn ready_state_check() -> Script {
    Script::new(
        ScriptKind::ReadyState,
        "(() => document.readyState === 'complete')()",
    )
}

/// Title plus the raw cell texts of every body row of the matched tables
///
/// Returns `{ title, tableCount, tableSelector, rows: [[cell, ...], ...] }`.
#[must_use]
pub fn prop_tables(context: &DomContext, tables: &TableLocator) -> Script {
    let body = format!(
        r#"  const text = (el) => (el ? (el.innerText ?? el.textContent ?? '') : '');
  let title = null;
  for (const sel of {titles}) {{
    const el = root.querySelector(sel);
    const value = text(el).trim();
    if (value) {{ title = value; break; }}
  }}
  let matched = [];
  let tableSelector = null;
  for (const sel of {tiers}) {{
    const found = Array.from(root.querySelectorAll(sel));
    if (found.length > 0) {{ matched = found; tableSelector = sel; break; }}
  }}
  const rows = [];
  for (const table of matched) {{
    for (const row of table.querySelectorAll({rows})) {{
      rows.push(Array.from(row.querySelectorAll({cells})).map(text));
    }}
  }}
  return {{ title, tableCount: matched.length, tableSelector, rows }};"#,
        titles = js_array(&tables.title_selectors),
        tiers = js_array(&tables.table_selectors),
        rows = js_string(tables.row_selector),
        cells = js_string(tables.cell_selector),
    );
    Script::new(ScriptKind::PropTables, context.wrap(&body))
}

/// Click every reveal control; returns the number clicked
#[must_use]
pub fn reveal_controls(context: &DomContext, reveal: &RevealLocator) -> Script {
    let body = format!(
        r#"  const label = {label};
  const toggleClass = {toggle};
  const controls = Array.from(root.querySelectorAll({controls})).filter((el) =>
    (el.innerText ?? el.textContent ?? '').toLowerCase().includes(label) ||
    el.classList.contains(toggleClass)
  );
  controls.forEach((el) => el.click());
  return controls.length;"#,
        label = js_string(reveal.label),
        toggle = js_string(reveal.toggle_class),
        controls = js_string(reveal.control_selector),
    );
    Script::new(ScriptKind::RevealControls, context.wrap(&body))
}

/// Every example anchor in document order with its heading and code text
///
/// Returns `[{ id, heading, code }, ...]`; `heading`/`code` are null when the
/// element is absent.
#[must_use]
pub fn example_anchors(context: &DomContext, anchors: &AnchorLocator) -> Script {
    let body = format!(
        r#"  const text = (el) => (el ? (el.innerText ?? el.textContent ?? '') : null);
  const codeTiers = {code};
  return Array.from(root.querySelectorAll({anchor})).map((anchor) => {{
    let codeEl = null;
    for (const sel of codeTiers) {{
      codeEl = anchor.querySelector(sel);
      if (codeEl) {{ break; }}
    }}
    return {{
      id: anchor.id || null,
      heading: text(anchor.querySelector({heading})),
      code: text(codeEl),
    }};
  }});"#,
        code = js_array(&anchors.code_selectors),
        anchor = js_string(anchors.anchor_selector),
        heading = js_string(anchors.heading_selector),
    );
    Script::new(ScriptKind::ExampleAnchors, context.wrap(&body))
}
