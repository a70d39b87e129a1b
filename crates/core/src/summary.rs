//! Headline statistics for the dashboard tiles

use cloud_insights_types::TelemetrySnapshot;

/// The three stat tiles at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    /// Sum of the usage series (GB)
    pub total_usage: u64,
    /// Sum of the cost series ($)
    pub total_cost: u64,
    /// Usage change from first to last point, in percent
    pub usage_trend_percent: f64,
}

impl DashboardSummary {
    /// Compute the summary for a snapshot
    ///
    /// An empty series, or a first sample of zero, yields a trend of 0
    /// rather than a division error; totals of an empty series are 0.
    pub fn from_snapshot(snapshot: &TelemetrySnapshot) -> Self {
        Self {
            total_usage: snapshot.usage.total(),
            total_cost: snapshot.cost.total(),
            usage_trend_percent: trend_percent(
                snapshot.usage.points.first().map(|p| p.value),
                snapshot.usage.points.last().map(|p| p.value),
            ),
        }
    }
}

fn trend_percent(first: Option<u64>, last: Option<u64>) -> f64 {
    match (first, last) {
        (Some(first), Some(last)) if first > 0 => {
            (last as f64 - first as f64) / first as f64 * 100.0
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_insights_types::{Series, TimePoint};

    fn snapshot(usage: Vec<u64>, cost: Vec<u64>) -> TelemetrySnapshot {
        let to_series = |values: Vec<u64>| {
            Series::new(
                values
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| TimePoint::new(format!("Jan {:02}", i + 1), v))
                    .collect(),
            )
        };
        TelemetrySnapshot {
            usage: to_series(usage),
            cost: to_series(cost),
            ..TelemetrySnapshot::default()
        }
    }

    #[test]
    fn test_totals_and_trend() {
        let summary = DashboardSummary::from_snapshot(&snapshot(vec![50, 60, 75], vec![500, 700]));
        assert_eq!(summary.total_usage, 185);
        assert_eq!(summary.total_cost, 1200);
        assert!((summary.usage_trend_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_series_is_neutral() {
        let summary = DashboardSummary::from_snapshot(&TelemetrySnapshot::default());
        assert_eq!(summary.total_usage, 0);
        assert_eq!(summary.total_cost, 0);
        assert_eq!(summary.usage_trend_percent, 0.0);
    }

    #[test]
    fn test_zero_first_sample_is_neutral() {
        let summary = DashboardSummary::from_snapshot(&snapshot(vec![0, 80], vec![]));
        assert_eq!(summary.usage_trend_percent, 0.0);
    }

    #[test]
    fn test_downward_trend() {
        let summary = DashboardSummary::from_snapshot(&snapshot(vec![80, 20], vec![]));
        assert!((summary.usage_trend_percent + 75.0).abs() < f64::EPSILON);
    }
}
