use serde::{Deserialize, Serialize};

/// All analytics tunables, grouped per component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub prediction: PredictionConfig,
    pub history: HistoryConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Minimum purchases of one product by one customer before an interval
    /// can be established. One observation is no signal.
    pub min_purchases: usize,
    /// Average intervals below this are incidental same-week top-ups, not a
    /// replenishment cycle. They are dropped, not reported.
    pub min_interval_days: i64,
    /// How many days overdue a forecast may be and still be shown.
    pub max_overdue_days: i64,
    /// How far ahead a forecast may reach and still be shown.
    pub max_lookahead_days: i64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_purchases: 2,
            min_interval_days: 3,
            max_overdue_days: 10,
            max_lookahead_days: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Most recent daily points kept after sorting.
    pub daily_points: usize,
    /// Most recent weekly points kept after sorting.
    pub weekly_points: usize,
    /// Most recent monthly points kept after sorting.
    pub monthly_points: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            daily_points: 30,
            weekly_points: 12,
            monthly_points: 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard cap on distinct customers returned per search.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 50 }
    }
}
