use crate::errors::GrowthError;
use crate::models::{ChartPoints, ChartView, RawRecord, ViewMode};
use crate::stats::{aggregate_weekly, build_daily_series, summarize};
use crate::trend::classify_trend;
use tracing::debug;

/// Holds the mode of one chart page and derives what that page shows.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    mode: ViewMode,
}

impl ViewController {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches to `mode`. Returns whether anything changed.
    pub fn select(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(from = %self.mode, to = %mode, "view mode changed");
        self.mode = mode;
        true
    }

    pub fn render(&self, records: &[RawRecord]) -> Result<ChartView, GrowthError> {
        render_mode(records, self.mode)
    }
}

/// Derives the chart payload for `mode`. Summary figures always come from
/// the daily series.
pub fn render_mode(records: &[RawRecord], mode: ViewMode) -> Result<ChartView, GrowthError> {
    let daily = build_daily_series(records)?;
    let summary = summarize(&daily);

    let (points, trend) = match mode {
        ViewMode::Daily => {
            let trend = classify_trend(&daily);
            (ChartPoints::Daily(daily), trend)
        }
        ViewMode::Weekly => {
            let weekly = aggregate_weekly(&daily)?;
            let trend = classify_trend(&weekly);
            (ChartPoints::Weekly(weekly), trend)
        }
    };

    Ok(ChartView {
        mode,
        x_key: mode.x_key(),
        y_key: mode.y_key(),
        series_name: mode.series_name(),
        tooltip_prefix: mode.tooltip_prefix(),
        points,
        summary,
        trend,
    })
}
