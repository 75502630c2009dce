use crate::models::{DailyPoint, TrendLabel, TrendResult, WeeklyPoint};

const WINDOW: usize = 3;
const THRESHOLD_PERCENT: f64 = 10.0;

/// The plotted value of a series point.
pub trait SeriesValue {
    fn value(&self) -> u64;
}

impl SeriesValue for DailyPoint {
    fn value(&self) -> u64 {
        self.count
    }
}

impl SeriesValue for WeeklyPoint {
    fn value(&self) -> u64 {
        self.total
    }
}

/// Compares the mean of the last three points with the three before them.
///
/// With no earlier points the change is zero. An earlier window that
/// averages zero has no meaningful percentage and reports insufficient data.
pub fn classify_trend<P: SeriesValue>(series: &[P]) -> TrendResult {
    if series.len() < WINDOW {
        return TrendResult::insufficient();
    }

    let split = series.len() - WINDOW;
    let recent = &series[split..];
    let older = &series[split.saturating_sub(WINDOW)..split];

    let recent_avg = mean(recent).unwrap_or(0.0);
    let change = match mean(older) {
        None => 0.0,
        Some(older_avg) if older_avg == 0.0 => return TrendResult::insufficient(),
        Some(older_avg) => (recent_avg - older_avg) * 100.0 / older_avg,
    };

    let label = if change > THRESHOLD_PERCENT {
        TrendLabel::Rising
    } else if change < -THRESHOLD_PERCENT {
        TrendLabel::Falling
    } else {
        TrendLabel::Flat
    };

    TrendResult {
        label,
        change_percent: Some((change * 10.0).round() / 10.0),
    }
}

fn mean<P: SeriesValue>(points: &[P]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let sum: f64 = points.iter().map(|point| point.value() as f64).sum();
    Some(sum / points.len() as f64)
}
