use crate::errors::GrowthError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One observation as it appears in the source table. `count` is `None`
/// while the day has not been observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    pub id: u64,
    pub date: &'static str,
    pub count: Option<u64>,
}

impl RawRecord {
    pub const fn new(id: u64, date: &'static str, count: Option<u64>) -> Self {
        Self { id, date, count }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub week_start: NaiveDate,
    pub label: String,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendLabel {
    InsufficientData,
    Rising,
    Falling,
    Flat,
}

impl TrendLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient-data",
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Flat => "flat",
        }
    }

    /// Badge colour used by the chart page.
    pub fn color(self) -> &'static str {
        match self {
            Self::InsufficientData => "#666666",
            Self::Rising => "#22c55e",
            Self::Falling => "#ef4444",
            Self::Flat => "#f59e0b",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub label: TrendLabel,
    pub change_percent: Option<f64>,
}

impl TrendResult {
    pub fn insufficient() -> Self {
        Self {
            label: TrendLabel::InsufficientData,
            change_percent: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_records: usize,
    pub daily_average: u64,
    pub max_daily: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Daily,
    #[default]
    Weekly,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Field of the active point type the chart plots.
    pub fn y_key(self) -> &'static str {
        match self {
            Self::Daily => "count",
            Self::Weekly => "total",
        }
    }

    /// Both point types carry their category text in `label`.
    pub fn x_key(self) -> &'static str {
        "label"
    }

    pub fn series_name(self) -> &'static str {
        match self {
            Self::Daily => "New users (day)",
            Self::Weekly => "New users (week)",
        }
    }

    pub fn tooltip_prefix(self) -> &'static str {
        match self {
            Self::Daily => "Date:",
            Self::Weekly => "Week of",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(GrowthError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartPoints {
    Daily(Vec<DailyPoint>),
    Weekly(Vec<WeeklyPoint>),
}

impl ChartPoints {
    pub fn len(&self) -> usize {
        match self {
            Self::Daily(points) => points.len(),
            Self::Weekly(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the chart renderer needs for one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub mode: ViewMode,
    pub x_key: &'static str,
    pub y_key: &'static str,
    pub series_name: &'static str,
    pub tooltip_prefix: &'static str,
    pub points: ChartPoints,
    pub summary: Summary,
    pub trend: TrendResult,
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModeQuery {
    pub mode: Option<ViewMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_parses_known_names() {
        assert_eq!("daily".parse::<ViewMode>(), Ok(ViewMode::Daily));
        assert_eq!(" weekly ".parse::<ViewMode>(), Ok(ViewMode::Weekly));
        assert_eq!(
            "monthly".parse::<ViewMode>(),
            Err(GrowthError::UnknownMode("monthly".into()))
        );
    }

    #[test]
    fn view_mode_defaults_to_weekly() {
        assert_eq!(ViewMode::default(), ViewMode::Weekly);
    }

    #[test]
    fn trend_label_serializes_kebab_case() {
        let json = serde_json::to_string(&TrendResult::insufficient()).unwrap();
        assert_eq!(json, r#"{"label":"insufficient-data","change_percent":null}"#);
    }
}
