//! Time-labeled sample series

use serde::{Deserialize, Serialize};

/// A single labeled sample in a series
///
/// The label is a formatted calendar date ("Jan 02" for daily cadence,
/// "Jan 2026" for monthly cadence). Values are bounded, non-negative
/// integers produced by the mock generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    pub label: String,
    pub value: u64,
}

impl TimePoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered sequence of time points
///
/// Invariants maintained by the generators and the refresh scheduler:
/// labels are unique and chronologically ascending, and the length is
/// fixed by the active range selection. A timer refresh replaces values
/// in place; only a range change rebuilds the label sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<TimePoint>,
}

impl Series {
    pub fn new(points: Vec<TimePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimePoint> {
        self.points.iter()
    }

    /// Label sequence in series order
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    /// Value sequence in series order
    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Replace values positionally while keeping the label sequence
    ///
    /// Used by the refresh scheduler on timer ticks so that chart labels
    /// never flicker. Extra fresh values are ignored; missing ones leave
    /// the tail untouched.
    pub fn adopt_values(&mut self, fresh: &[u64]) {
        for (point, value) in self.points.iter_mut().zip(fresh.iter()) {
            point.value = *value;
        }
    }

    /// Sum of all values
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Largest value in the series, 0 when empty
    pub fn max_value(&self) -> u64 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a TimePoint;
    type IntoIter = std::slice::Iter<'a, TimePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::new(vec![
            TimePoint::new("Jan 01", 10),
            TimePoint::new("Jan 02", 20),
            TimePoint::new("Jan 03", 30),
        ])
    }

    #[test]
    fn test_adopt_values_keeps_labels() {
        let mut series = sample();
        let labels_before: Vec<String> =
            series.labels().iter().map(|s| s.to_string()).collect();

        series.adopt_values(&[5, 6, 7]);

        let labels_after: Vec<String> =
            series.labels().iter().map(|s| s.to_string()).collect();
        assert_eq!(labels_before, labels_after);
        assert_eq!(series.values(), vec![5, 6, 7]);
    }

    #[test]
    fn test_adopt_values_length_mismatch() {
        let mut series = sample();
        series.adopt_values(&[1, 2]);
        assert_eq!(series.values(), vec![1, 2, 30]);

        series.adopt_values(&[9, 9, 9, 9]);
        assert_eq!(series.values(), vec![9, 9, 9]);
    }

    #[test]
    fn test_totals() {
        assert_eq!(sample().total(), 60);
        assert_eq!(sample().max_value(), 30);
        assert_eq!(Series::default().total(), 0);
        assert_eq!(Series::default().max_value(), 0);
    }

    #[test]
    fn test_series_serialization() {
        let series = sample();
        let json = serde_json::to_string(&series).unwrap();
        let deserialized: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, series);
    }
}
