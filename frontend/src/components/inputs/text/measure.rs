//! DOM measurement for the auto-resizing textarea.
//!
//! The live node is never resized to measure it. Instead a hidden "shadow"
//! textarea is kept in the document, the sizing-relevant computed styles of
//! the live node are copied onto it, and its `scrollHeight` is read twice:
//! once with the real content and once with a single character, which gives
//! the row height for the current font.

use autosize_common::layout::{Measurement, SizingData};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, HtmlTextAreaElement, Window};
use yew::NodeRef;

/// Computed-style properties that influence how text wraps and how tall a
/// line is. Everything else is irrelevant to the measurement.
const SIZING_PROPERTIES: &[&str] = &[
    "letter-spacing",
    "line-height",
    "padding-top",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "font-family",
    "font-weight",
    "font-size",
    "font-style",
    "font-variant",
    "text-rendering",
    "text-transform",
    "text-indent",
    "width",
    "border-width",
    "border-style",
    "box-sizing",
    "tab-size",
    "white-space",
    "word-break",
    "overflow-wrap",
];

/// Keeps the shadow out of sight and out of layout.
const HIDDEN_STYLE: &str = "min-height:0 !important;max-height:none !important;\
    height:0 !important;visibility:hidden !important;overflow:hidden !important;\
    position:absolute !important;z-index:-1000 !important;top:0 !important;\
    right:0 !important;pointer-events:none !important;";

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("textarea is not attached to the document")]
    TargetUnavailable,
    #[error("no global window")]
    NoWindow,
    #[error("window has no document body")]
    NoDocument,
    #[error("computed style is unavailable")]
    Style,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MeasureError {
    fn from(value: JsValue) -> Self {
        MeasureError::Dom(format!("{value:?}"))
    }
}

/// Owns the shadow textarea of one text input. Removing it from the
/// document happens on [`ShadowMeasurer::release`] or on drop.
#[derive(Default)]
pub struct ShadowMeasurer {
    shadow: Option<HtmlTextAreaElement>,
}

impl ShadowMeasurer {
    /// Measures the textarea behind `target`.
    pub fn measure(&mut self, target: &NodeRef) -> Result<Measurement, MeasureError> {
        let textarea = target
            .cast::<HtmlTextAreaElement>()
            .filter(|textarea| textarea.is_connected())
            .ok_or(MeasureError::TargetUnavailable)?;
        let window = web_sys::window().ok_or(MeasureError::NoWindow)?;
        let computed = window
            .get_computed_style(&textarea)?
            .ok_or(MeasureError::Style)?;

        let sizing = SizingData::from_css(
            &read(&computed, "box-sizing"),
            &read(&computed, "padding-top"),
            &read(&computed, "padding-bottom"),
            &read(&computed, "border-top-width"),
            &read(&computed, "border-bottom-width"),
        );

        let shadow = self.shadow(&window)?;
        shadow.set_attribute("style", &shadow_css(|name| read(&computed, name)))?;

        let value = textarea.value();
        let placeholder = textarea.placeholder();
        shadow.set_value(shadow_text(&value, &placeholder));
        let content_scroll = f64::from(shadow.scroll_height());

        shadow.set_value("x");
        let single_row_scroll = f64::from(shadow.scroll_height());

        Ok(sizing.measurement(content_scroll, single_row_scroll))
    }

    /// Detaches the shadow node. A later `measure` recreates it.
    pub fn release(&mut self) {
        if let Some(shadow) = self.shadow.take() {
            shadow.remove();
        }
    }

    fn shadow(&mut self, window: &Window) -> Result<HtmlTextAreaElement, MeasureError> {
        if let Some(shadow) = self.shadow.as_ref().filter(|shadow| shadow.is_connected()) {
            return Ok(shadow.clone());
        }

        let document = window.document().ok_or(MeasureError::NoDocument)?;
        let body = document.body().ok_or(MeasureError::NoDocument)?;
        let shadow = document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| MeasureError::Dom("created element is not a textarea".to_string()))?;
        shadow.set_attribute("aria-hidden", "true")?;
        shadow.set_attribute("tabindex", "-1")?;
        shadow.set_attribute("rows", "1")?;
        body.append_child(&shadow)?;

        self.shadow = Some(shadow.clone());
        Ok(shadow)
    }
}

impl Drop for ShadowMeasurer {
    fn drop(&mut self) {
        self.release();
    }
}

fn read(style: &CssStyleDeclaration, name: &str) -> String {
    style.get_property_value(name).unwrap_or_default()
}

/// Inline style for the shadow: the copied sizing properties followed by
/// the hiding rules, which must win.
fn shadow_css(read: impl Fn(&str) -> String) -> String {
    let mut css = String::new();
    for &name in SIZING_PROPERTIES {
        let value = read(name);
        if !value.is_empty() {
            css.push_str(&format!("{name}:{value} !important;"));
        }
    }
    css.push_str(HIDDEN_STYLE);
    css
}

/// Text placed in the shadow for the content measurement. An empty field is
/// as tall as its placeholder, or one row.
fn shadow_text<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if !value.is_empty() {
        value
    } else if !placeholder.is_empty() {
        placeholder
    } else {
        "x"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_measures_placeholder_then_one_row() {
        assert_eq!(shadow_text("hola", "Escribe"), "hola");
        assert_eq!(shadow_text("", "Escribe"), "Escribe");
        assert_eq!(shadow_text("", ""), "x");
    }

    #[test]
    fn shadow_css_copies_known_values_and_hides_last() {
        let css = shadow_css(|name| match name {
            "line-height" => "20px".to_string(),
            "box-sizing" => "border-box".to_string(),
            _ => String::new(),
        });
        assert!(css.starts_with("line-height:20px !important;box-sizing:border-box !important;"));
        assert!(css.ends_with(HIDDEN_STYLE));
        assert!(!css.contains("font-size"));
    }
}
