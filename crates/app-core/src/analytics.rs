//! Analytics chart data
//!
//! The charting renderer is an external collaborator: it receives ordered,
//! labeled numeric series and draws them. This module owns the series
//! themselves and the small amount of math done on them before rendering.

use serde::{Deserialize, Serialize};

/// One labeled numeric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label
    pub label: String,
    /// Values, one per x-axis label
    pub data: Vec<f64>,
    /// Stroke color as `(r, g, b)`
    pub color: (u8, u8, u8),
}

impl ChartSeries {
    /// Create a series
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: (u8, u8, u8)) -> Self {
        Self {
            label: label.into(),
            data,
            color,
        }
    }

    /// CSS color string at the given opacity
    pub fn rgba(&self, opacity: f32) -> String {
        let (r, g, b) = self.color;
        format!("rgba({}, {}, {}, {})", r, g, b, opacity.clamp(0.0, 1.0))
    }
}

/// Data handed to a line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// X-axis labels
    pub labels: Vec<String>,
    /// Series to plot
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    fn new(labels: &[&str], datasets: Vec<ChartSeries>) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets,
        }
    }

    /// Copy of this data with every value multiplied by `factor`
    ///
    /// Used to grow the chart from zero while its entry animation runs.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            labels: self.labels.clone(),
            datasets: self
                .datasets
                .iter()
                .map(|s| ChartSeries {
                    data: s.data.iter().map(|v| v * factor).collect(),
                    ..s.clone()
                })
                .collect(),
        }
    }

    /// Legend labels in series order
    pub fn legend(&self) -> Vec<&str> {
        self.datasets.iter().map(|s| s.label.as_str()).collect()
    }

    /// Largest value across all series (0 when empty)
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

const CALL_CENTER: (u8, u8, u8) = (134, 65, 244);
const MESSAGE: (u8, u8, u8) = (34, 128, 176);
const MESSAGE_DASHBOARD: (u8, u8, u8) = (255, 99, 132);

/// Time range selectable on the analytics chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnalyticsRange {
    /// Days of the current week
    #[default]
    Daily,
    /// Weeks of the current month
    Weekly,
    /// Months of the current half-year
    Monthly,
    /// Recent years
    Yearly,
}

impl AnalyticsRange {
    /// All ranges in tab order
    pub fn all() -> [AnalyticsRange; 4] {
        [
            AnalyticsRange::Daily,
            AnalyticsRange::Weekly,
            AnalyticsRange::Monthly,
            AnalyticsRange::Yearly,
        ]
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsRange::Daily => "Daily",
            AnalyticsRange::Weekly => "Weekly",
            AnalyticsRange::Monthly => "Monthly",
            AnalyticsRange::Yearly => "Yearly",
        }
    }

    /// Call center vs message volume for this range
    pub fn chart_data(&self) -> ChartData {
        let series = |calls: Vec<f64>, messages: Vec<f64>| {
            vec![
                ChartSeries::new("Call center", calls, CALL_CENTER),
                ChartSeries::new("Message", messages, MESSAGE),
            ]
        };
        match self {
            AnalyticsRange::Daily => ChartData::new(
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                series(
                    vec![30.0, 45.0, 28.0, 80.0, 99.0, 43.0, 50.0],
                    vec![20.0, 35.0, 18.0, 60.0, 79.0, 33.0, 40.0],
                ),
            ),
            AnalyticsRange::Weekly => ChartData::new(
                &["Week 1", "Week 2", "Week 3", "Week 4"],
                series(
                    vec![200.0, 450.0, 280.0, 800.0],
                    vec![150.0, 350.0, 180.0, 600.0],
                ),
            ),
            AnalyticsRange::Monthly => ChartData::new(
                &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                series(
                    vec![800.0, 1200.0, 900.0, 1400.0, 1300.0, 1500.0],
                    vec![600.0, 900.0, 700.0, 1100.0, 1000.0, 1200.0],
                ),
            ),
            AnalyticsRange::Yearly => ChartData::new(
                &["2019", "2020", "2021", "2022", "2023"],
                series(
                    vec![5000.0, 7000.0, 6500.0, 8000.0, 9000.0],
                    vec![4000.0, 6000.0, 5500.0, 7000.0, 8000.0],
                ),
            ),
        }
    }
}

impl std::fmt::Display for AnalyticsRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The activity graph on the dashboard
pub fn dashboard_activity() -> ChartData {
    ChartData::new(
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        vec![
            ChartSeries::new(
                "Call center",
                vec![600.0, 850.0, 700.0, 1300.0, 1200.0, 1400.0],
                CALL_CENTER,
            ),
            ChartSeries::new(
                "Message",
                vec![700.0, 950.0, 800.0, 1400.0, 1300.0, 1500.0],
                MESSAGE_DASHBOARD,
            ),
        ],
    )
}

// =============================================================================
// Pie chart
// =============================================================================

/// One slice of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Slice name
    pub name: String,
    /// Absolute amount
    pub amount: f64,
    /// Fill color
    pub color: String,
}

/// Expense statistics breakdown
pub fn expense_statistics() -> Vec<PieSlice> {
    let slice = |name: &str, amount: f64, color: &str| PieSlice {
        name: name.to_string(),
        amount,
        color: color.to_string(),
    };
    vec![
        slice("Entertainment", 215_000.0, "#FF00FF"),
        slice("Bill Expense", 280_000.0, "#FFA500"),
        slice("Investment", 527_612.0, "#00BFFF"),
        slice("Others", 853_800.0, "#8A2BE2"),
    ]
}

/// Fraction of the whole for each slice
///
/// Negative and non-finite amounts count as zero. When nothing remains the
/// shares are all zero rather than NaN.
pub fn pie_shares(slices: &[PieSlice]) -> Vec<f64> {
    let amount = |s: &PieSlice| if s.amount.is_finite() { s.amount.max(0.0) } else { 0.0 };
    let total: f64 = slices.iter().map(amount).sum();
    if total <= 0.0 {
        return vec![0.0; slices.len()];
    }
    slices.iter().map(|s| amount(s) / total).collect()
}
