use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use termfit_core::{
    CellMetrics, Config, ElementNode, FontMetrics, HeadlessTerminal, StyleMap,
};

/// A terminal placed in a container, described in TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    /// Computed style of the containing element
    pub container: StyleMap,
    /// Computed style of the terminal's own element (padding)
    pub element: StyleMap,
    /// Whether the terminal element sits inside the container
    pub attached: bool,
    pub cell: CellSpec,
    pub scrollbar_width: i64,
    pub grid: GridSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CellSpec {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Monospace font to measure instead of explicit sizes
    pub font: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            container: StyleMap::new(),
            element: StyleMap::new(),
            attached: true,
            cell: CellSpec::default(),
            scrollbar_width: 0,
            grid: GridSpec::default(),
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        let mut scene: Scene = toml::from_str(&contents)
            .with_context(|| format!("parsing scene {}", path.display()))?;
        scene.validate()?;

        // Font paths are relative to the scene file
        if let (Some(font), Some(dir)) = (scene.cell.font.as_mut(), path.parent()) {
            if font.is_relative() {
                *font = dir.join(&*font);
            }
        }
        Ok(scene)
    }

    /// Reject grids the terminal can't start with
    pub fn validate(&self) -> Result<()> {
        if self.grid.cols == 0 || self.grid.rows == 0 {
            bail!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.cols,
                self.grid.rows
            );
        }
        Ok(())
    }

    /// Cell size from the explicit values or the configured font
    pub fn cell_metrics(&self, config: &Config) -> Result<CellMetrics> {
        if let Some(font) = &self.cell.font {
            let metrics = FontMetrics::from_file(font, config.font.size, config.font.scale_factor)?;
            return Ok(metrics.cell_metrics());
        }
        Ok(CellMetrics::new(
            self.cell.width.unwrap_or(0.0),
            self.cell.height.unwrap_or(0.0),
        ))
    }

    /// Build the headless terminal this scene describes
    pub fn build_terminal(&self, config: &Config) -> Result<HeadlessTerminal> {
        self.validate()?;
        let mut terminal = HeadlessTerminal::new(self.grid.cols, self.grid.rows);
        terminal.set_cell_metrics(self.cell_metrics(config)?);
        terminal.set_scrollbar_width(self.scrollbar_width);

        let element = if self.attached {
            let container = ElementNode::detached(self.container.clone());
            ElementNode::child_of(&container, self.element.clone())
        } else {
            ElementNode::detached(self.element.clone())
        };
        terminal.open(element);
        Ok(terminal)
    }
}
