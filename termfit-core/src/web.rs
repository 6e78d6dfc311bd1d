//! Browser bindings: fit an xterm.js terminal living in the DOM and keep a
//! paired canvas in step with it.
//!
//! xterm.js only exposes cell and scrollbar measurements through its private
//! `_core` object. Those lookups are confined to [`XtermTerminal`]'s
//! `CellMetricsProvider` impl; a missing field reads as zero, which the fit
//! treats as "not measured yet".

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlCanvasElement};

use crate::constants::{PROP_HEIGHT, PROP_WIDTH};
use crate::fit::fit;
use crate::geometry::CellMetrics;
use crate::style::ComputedStyle;
use crate::surface::BackingSurface;
use crate::terminal::{CellMetricsProvider, LayoutElement, TerminalHandle};

const CELL_WIDTH_PATH: &[&str] = &["_core", "_renderService", "dimensions", "actualCellWidth"];
const CELL_HEIGHT_PATH: &[&str] = &["_core", "_renderService", "dimensions", "actualCellHeight"];
const SCROLLBAR_WIDTH_PATH: &[&str] = &["_core", "viewport", "scrollBarWidth"];

/// Computed style of a DOM element; empty when the window has none to give
pub struct DomStyle(Option<CssStyleDeclaration>);

impl ComputedStyle for DomStyle {
    fn property_value(&self, name: &str) -> String {
        self.0
            .as_ref()
            .and_then(|decl| decl.get_property_value(name).ok())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl LayoutElement for DomElement {
    type Style = DomStyle;

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomElement)
    }

    fn computed_style(&self) -> DomStyle {
        let decl = web_sys::window().and_then(|window| window.get_computed_style(&self.0).ok().flatten());
        DomStyle(decl)
    }
}

/// An xterm.js `Terminal` instance
pub struct XtermTerminal {
    term: JsValue,
}

impl XtermTerminal {
    pub fn new(term: JsValue) -> Self {
        Self { term }
    }

    fn number(&self, path: &[&str]) -> Option<f64> {
        lookup(&self.term, path)?.as_f64()
    }
}

impl CellMetricsProvider for XtermTerminal {
    fn cell_metrics(&self) -> CellMetrics {
        CellMetrics::new(
            self.number(CELL_WIDTH_PATH).unwrap_or(0.0),
            self.number(CELL_HEIGHT_PATH).unwrap_or(0.0),
        )
    }

    fn scrollbar_width(&self) -> i64 {
        self.number(SCROLLBAR_WIDTH_PATH).map_or(0, |w| w as i64)
    }
}

impl TerminalHandle for XtermTerminal {
    type Element = DomElement;

    fn element(&self) -> Option<DomElement> {
        lookup(&self.term, &["element"])?
            .dyn_into::<Element>()
            .ok()
            .map(DomElement)
    }

    fn cols(&self) -> usize {
        self.number(&["cols"]).map_or(0, |c| c as usize)
    }

    fn rows(&self) -> usize {
        self.number(&["rows"]).map_or(0, |r| r as usize)
    }

    fn resize(&mut self, cols: usize, rows: usize) {
        let Some(resize) = lookup(&self.term, &["resize"]).and_then(|f| f.dyn_into::<Function>().ok()) else {
            return;
        };
        let _ = resize.call2(
            &self.term,
            &JsValue::from_f64(cols as f64),
            &JsValue::from_f64(rows as f64),
        );
    }
}

impl BackingSurface for HtmlCanvasElement {
    fn set_pixel_size(&mut self, width: i64, height: i64) {
        self.set_width(canvas_dimension(width));
        self.set_height(canvas_dimension(height));
    }

    fn set_style_size(&mut self, width: &str, height: &str) {
        let style = self.style();
        let _ = style.set_property(PROP_WIDTH, width);
        let _ = style.set_property(PROP_HEIGHT, height);
    }
}

/// Fit `terminal` to its container and resize `front` to the available area.
///
/// A `null` or `undefined` terminal is ignored.
#[wasm_bindgen(js_name = termFit)]
pub fn term_fit(terminal: JsValue, front: HtmlCanvasElement) {
    let mut front = front;
    let mut terminal = if terminal.is_undefined() || terminal.is_null() {
        None
    } else {
        Some(XtermTerminal::new(terminal))
    };
    fit(terminal.as_mut(), &mut front);
}

/// Walk `path` from `target`, stopping at the first null or undefined link
fn lookup(target: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = target.clone();
    for key in path {
        if current.is_undefined() || current.is_null() {
            return None;
        }
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
    }
    if current.is_undefined() || current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Canvas dimensions are unsigned; negative areas collapse to an empty canvas
fn canvas_dimension(pixels: i64) -> u32 {
    u32::try_from(pixels.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_dimension_clamps() {
        assert_eq!(canvas_dimension(800), 800);
        assert_eq!(canvas_dimension(0), 0);
        assert_eq!(canvas_dimension(-15), 0);
        assert_eq!(canvas_dimension(i64::MAX), u32::MAX);
    }
}
