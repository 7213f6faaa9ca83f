//! Layout configuration constants for figure rendering.

/// Configuration for the plotting area.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor applied to autoscaled limits (0.15 = 15% margin).
    pub autoscale_padding: f64,
    /// Upper bound on grid lines per axis.
    pub max_grid_lines: usize,
    /// Base dash length as a fraction of the larger axis span.
    pub dash_fraction: f64,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            autoscale_padding: 0.15,
            max_grid_lines: 12,
            dash_fraction: 0.012,
        }
    }
}

/// Configuration for the legend box.
#[derive(Debug, Clone)]
pub struct LegendLayoutConfig {
    /// Maximum number of entries shown.
    pub max_entries: usize,
    /// Maximum label width in terminal columns.
    pub max_label_width: usize,
}

impl Default for LegendLayoutConfig {
    fn default() -> Self {
        Self {
            max_entries: 8,
            max_label_width: 24,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the plotting area.
    pub plot: PlotLayoutConfig,
    /// Configuration for the legend.
    pub legend: LegendLayoutConfig,
}
