//! Reporting sink: error curves, a text chart, and final summaries.
//!
//! Purely observational; nothing here feeds back into training.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Grid rows in the rendered chart.
const CHART_HEIGHT: usize = 20;
/// Widest chart before periods share columns.
const CHART_MAX_WIDTH: usize = 60;
/// Y-axis ceiling; RMSE values are clamped into `0..=CHART_Y_MAX`.
const CHART_Y_MAX: f32 = 50.0;

/// Per-period RMSE curves for the training and validation sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RmseCurves {
    /// Training-set RMSE, one entry per period.
    pub training: Vec<f32>,
    /// Validation-set RMSE, one entry per period.
    pub validation: Vec<f32>,
}

impl RmseCurves {
    /// Bundles two curves.
    pub fn new(training: Vec<f32>, validation: Vec<f32>) -> Self {
        Self {
            training,
            validation,
        }
    }

    /// Number of recorded periods.
    pub fn periods(&self) -> usize {
        self.training.len().max(self.validation.len())
    }

    /// RMSE of the last training period, if any.
    pub fn final_training(&self) -> Option<f32> {
        self.training.last().copied()
    }

    /// RMSE of the last validation period, if any.
    pub fn final_validation(&self) -> Option<f32> {
        self.validation.last().copied()
    }

    /// Saves the curves as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Renders a two-series text chart of RMSE vs. period.
///
/// Training points are drawn with `x`, validation points with `o`, and
/// overlaps with `*`. The y axis is fixed at `0..=50`; values outside that
/// range are clamped onto the border. When there are more periods than
/// columns, neighboring periods share a column.
pub fn render_chart(curves: &RmseCurves) -> String {
    let periods = curves.periods();
    if periods == 0 {
        return String::from("(no periods recorded)\n");
    }
    let width = periods.min(CHART_MAX_WIDTH);

    let column_for = |period: usize| {
        if periods == 1 {
            0
        } else {
            period * (width - 1) / (periods - 1)
        }
    };
    let row_for = |value: f32| {
        let scaled = value.clamp(0.0, CHART_Y_MAX) / CHART_Y_MAX * (CHART_HEIGHT - 1) as f32;
        CHART_HEIGHT - 1 - scaled.round() as usize
    };

    let mut grid = vec![vec![' '; width]; CHART_HEIGHT];
    for (period, &value) in curves.validation.iter().enumerate() {
        grid[row_for(value)][column_for(period)] = 'o';
    }
    for (period, &value) in curves.training.iter().enumerate() {
        let cell = &mut grid[row_for(value)][column_for(period)];
        *cell = if *cell == 'o' { '*' } else { 'x' };
    }

    let mut out = String::from("Root Mean Squared Error vs. Periods\n");
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{CHART_Y_MAX:>5.1}")
        } else if row == CHART_HEIGHT - 1 {
            format!("{:>5.1}", 0.0)
        } else {
            " ".repeat(5)
        };
        let line: String = cells.iter().collect();
        out.push_str(&label);
        out.push_str(" |");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str("      +");
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str("        x training   o validation\n");
    out
}

/// Final-period summary lines.
pub fn summary(curves: &RmseCurves) -> String {
    format!(
        "Final RMSE (on training data):   {:.2}\nFinal RMSE (on validation data): {:.2}",
        curves.final_training().unwrap_or(f32::NAN),
        curves.final_validation().unwrap_or(f32::NAN)
    )
}

/// Prints the chart and summary to stdout.
pub fn print_report(curves: &RmseCurves) {
    println!("{}", render_chart(curves));
    println!("{}", summary(curves));
}
