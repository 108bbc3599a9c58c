//! Grid-to-pixel conversion constants.

use serde::{Deserialize, Serialize};

/// Default width of one grid column, in pixels.
pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;
/// Default height of one grid row, in pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 80.0;
/// Default width of a spot cell, in pixels.
pub const DEFAULT_CELL_WIDTH: f32 = 130.0;
/// Default height of a spot cell, in pixels.
pub const DEFAULT_CELL_HEIGHT: f32 = 80.0;

/// Pixel sizes of the timeline grid.
///
/// A spot at grid slot (column, row) lands at pixel position
/// `(column · column_width − cell_width/2, (0.5 + row) · row_height −
/// cell_height/2)`, i.e. cells are centered on their grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    pub column_width: f32,
    pub row_height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// One rejected `SPOTLINE_*` environment override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsError {
    pub variable: &'static str,
    pub value: String,
    pub message: &'static str,
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}={:?} ignored: {}",
            self.variable, self.value, self.message
        )
    }
}

impl std::error::Error for MetricsError {}

/// Result of reading metrics from the environment: the effective metrics
/// plus every override that was rejected (and fell back to the default).
#[derive(Debug, Clone, PartialEq)]
pub struct CellMetricsParse {
    pub metrics: CellMetrics,
    pub errors: Vec<MetricsError>,
}

impl CellMetrics {
    /// Read `SPOTLINE_*` overrides from the environment, ignoring malformed
    /// values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().metrics
    }

    /// Read `SPOTLINE_*` overrides and report rejected values.
    #[must_use]
    pub fn from_env_with_diagnostics() -> CellMetricsParse {
        from_env_with(|name| std::env::var(name).ok())
    }
}

/// Environment parsing with an injectable getter, so tests never touch the
/// process environment.
fn from_env_with<F>(mut get: F) -> CellMetricsParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut metrics = CellMetrics::default();
    let mut errors = Vec::new();

    let mut field = |variable: &'static str, slot: &mut f32| {
        let Some(raw) = get(variable) else { return };
        match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() && v > 0.0 => *slot = v,
            Ok(_) => errors.push(MetricsError {
                variable,
                value: raw,
                message: "must be a positive finite number",
            }),
            Err(_) => errors.push(MetricsError {
                variable,
                value: raw,
                message: "not a number",
            }),
        }
    };

    field("SPOTLINE_COLUMN_WIDTH", &mut metrics.column_width);
    field("SPOTLINE_ROW_HEIGHT", &mut metrics.row_height);
    field("SPOTLINE_CELL_WIDTH", &mut metrics.cell_width);
    field("SPOTLINE_CELL_HEIGHT", &mut metrics.cell_height);

    CellMetricsParse { metrics, errors }
}
