use anyhow::Result;
use log::info;
use serde::Serialize;
use std::fmt;
use termfit_core::{
    Config, FitCalculator, FitOptions, GridSize, LayoutMeasurement, PixelSurface,
    TerminalHandle,
};

use crate::scene::Scene;

/// Main application state
pub struct App {
    config: Config,
    calculator: FitCalculator,
}

/// What a single fit did to the scene's terminal and surface
#[derive(Debug, Serialize)]
pub struct FitReport {
    pub before: GridSize,
    pub after: GridSize,
    pub resized: bool,
    /// `None` when the terminal wasn't ready to be fitted
    pub measurement: Option<LayoutMeasurement>,
    pub surface: PixelSurface,
}

impl App {
    pub fn new(config: Config) -> Self {
        let calculator = FitCalculator::new(FitOptions::from(&config.fit));
        Self { config, calculator }
    }

    /// Fit the terminal described by `scene`
    pub fn run(&self, scene: &Scene) -> Result<FitReport> {
        let mut terminal = scene.build_terminal(&self.config)?;
        let mut surface = PixelSurface::new();

        let before = terminal.grid();
        let measurement = self.calculator.propose(Some(&terminal));
        self.calculator.fit(Some(&mut terminal), &mut surface);
        let after = terminal.grid();

        info!("Fitted terminal {}x{} -> {}x{}", before.cols, before.rows, after.cols, after.rows);

        Ok(FitReport {
            before,
            after,
            resized: before != after,
            measurement,
            surface,
        })
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(measurement) = &self.measurement else {
            return write!(f, "not ready: grid stays {}x{}", self.before.cols, self.before.rows);
        };

        writeln!(
            f,
            "available: {}x{}px",
            measurement.available_width, measurement.available_height
        )?;
        if self.resized {
            writeln!(
                f,
                "grid: {}x{} -> {}x{}",
                self.before.cols, self.before.rows, self.after.cols, self.after.rows
            )?;
        } else {
            writeln!(f, "grid: {}x{} (unchanged)", self.after.cols, self.after.rows)?;
        }
        write!(
            f,
            "surface: {}x{} (style {} x {})",
            self.surface.width, self.surface.height, self.surface.style_width, self.surface.style_height
        )
    }
}
