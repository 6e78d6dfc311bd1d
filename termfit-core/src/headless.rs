//! Headless host: an in-memory element tree and an Alacritty-backed terminal
//! that satisfy the fit collaborator traits without a browser.

use std::rc::Rc;

use crate::geometry::CellMetrics;
use crate::style::StyleMap;
use crate::terminal::{CellMetricsProvider, LayoutElement, TerminalHandle, Terminal};

/// A node in the headless layout tree
#[derive(Debug, Clone)]
pub struct ElementNode {
    style: StyleMap,
    parent: Option<Rc<ElementNode>>,
}

impl ElementNode {
    /// A node with no container
    pub fn detached(style: StyleMap) -> Rc<Self> {
        Rc::new(Self {
            style,
            parent: None,
        })
    }

    /// A node placed inside `parent`
    pub fn child_of(parent: &Rc<ElementNode>, style: StyleMap) -> Rc<Self> {
        Rc::new(Self {
            style,
            parent: Some(Rc::clone(parent)),
        })
    }

    pub fn style(&self) -> &StyleMap {
        &self.style
    }
}

impl LayoutElement for Rc<ElementNode> {
    type Style = StyleMap;

    fn parent(&self) -> Option<Self> {
        self.parent.clone()
    }

    fn computed_style(&self) -> StyleMap {
        self.style.clone()
    }
}

/// Terminal grid plus the render measurements a widget would report
pub struct HeadlessTerminal {
    terminal: Terminal,
    element: Option<Rc<ElementNode>>,
    cell: CellMetrics,
    scrollbar_width: i64,
}

impl HeadlessTerminal {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            terminal: Terminal::new(cols, rows),
            element: None,
            cell: CellMetrics::unmeasured(),
            scrollbar_width: 0,
        }
    }

    /// Attach the terminal's root element
    pub fn open(&mut self, element: Rc<ElementNode>) {
        self.element = Some(element);
    }

    pub fn set_cell_metrics(&mut self, cell: CellMetrics) {
        self.cell = cell;
    }

    pub fn set_scrollbar_width(&mut self, width: i64) {
        self.scrollbar_width = width;
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }
}

impl CellMetricsProvider for HeadlessTerminal {
    fn cell_metrics(&self) -> CellMetrics {
        self.cell
    }

    fn scrollbar_width(&self) -> i64 {
        self.scrollbar_width
    }
}

impl TerminalHandle for HeadlessTerminal {
    type Element = Rc<ElementNode>;

    fn element(&self) -> Option<Rc<ElementNode>> {
        self.element.clone()
    }

    fn cols(&self) -> usize {
        self.terminal.dimensions().0
    }

    fn rows(&self) -> usize {
        self.terminal.dimensions().1
    }

    fn resize(&mut self, cols: usize, rows: usize) {
        self.terminal.resize(cols, rows);
    }
}
