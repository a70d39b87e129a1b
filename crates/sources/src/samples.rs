//! Time-labeled sample generation

use chrono::{Days, Local, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::Rng;

use cloud_insights_types::{RangeSelection, Series, TimePoint};

/// Fixed configuration of one mock sample series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    /// Unique identifier for this series
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// What the series pretends to measure
    pub description: &'static str,
    /// Inclusive lower value bound
    pub min: u64,
    /// Inclusive upper value bound
    pub max: u64,
}

/// Usage samples: GB figures in [0, 100]
pub const USAGE_SERIES: SeriesSpec = SeriesSpec {
    id: "usage",
    name: "Cloud Usage",
    description: "Mock storage usage per period, in GB",
    min: 0,
    max: 100,
};

/// Cost samples: dollar figures in [500, 1000]
pub const COST_SERIES: SeriesSpec = SeriesSpec {
    id: "cost",
    name: "Predicted Cost",
    description: "Mock predicted spend per period, in dollars",
    min: 500,
    max: 1000,
};

/// Consecutive calendar labels ending at the anchor date
///
/// Daily cadence yields "Jan 02"-style labels, monthly cadence
/// "Jan 2026"-style labels. Consecutive calendar units make the
/// sequence strictly chronological and the labels unique.
fn labels(range: RangeSelection, anchor: NaiveDate) -> Vec<String> {
    let count = range.point_count();
    (0..count)
        .map(|i| {
            let back = (count - 1 - i) as u32;
            match range {
                RangeSelection::ThirtyDays => anchor
                    .checked_sub_days(Days::new(back as u64))
                    .unwrap_or(anchor)
                    .format("%b %d")
                    .to_string(),
                RangeSelection::TwelveMonths => anchor
                    .checked_sub_months(Months::new(back))
                    .unwrap_or(anchor)
                    .format("%b %Y")
                    .to_string(),
            }
        })
        .collect()
}

fn uniform_values(spec: &SeriesSpec, count: usize, rng: &mut StdRng) -> Vec<u64> {
    (0..count).map(|_| rng.gen_range(spec.min..=spec.max)).collect()
}

/// Generate a full series: N labeled points, values uniform in bounds
pub fn generate_series(
    spec: &SeriesSpec,
    range: RangeSelection,
    anchor: NaiveDate,
    rng: &mut StdRng,
) -> Series {
    let points = labels(range, anchor)
        .into_iter()
        .zip(uniform_values(spec, range.point_count(), rng))
        .map(|(label, value)| TimePoint::new(label, value))
        .collect();
    Series::new(points)
}

/// A mock series source holding its current samples
///
/// Timer refreshes draw fresh values onto the existing labels; only a
/// range change rebuilds the label sequence.
pub struct SampleSeriesSource {
    spec: &'static SeriesSpec,
    series: Series,
}

impl SampleSeriesSource {
    pub fn new(
        spec: &'static SeriesSpec,
        range: RangeSelection,
        anchor: NaiveDate,
        rng: &mut StdRng,
    ) -> Self {
        Self {
            spec,
            series: generate_series(spec, range, anchor, rng),
        }
    }

    pub fn spec(&self) -> &SeriesSpec {
        self.spec
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Replace every value, keeping the label sequence positionally
    pub fn refresh(&mut self, rng: &mut StdRng) {
        let fresh = uniform_values(self.spec, self.series.len(), rng);
        self.series.adopt_values(&fresh);
    }

    /// Rebuild labels and values for a new range
    pub fn rebuild(&mut self, range: RangeSelection, anchor: NaiveDate, rng: &mut StdRng) {
        self.series = generate_series(self.spec, range, anchor, rng);
    }
}

/// Today's date, the default label anchor
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 30).unwrap()
    }

    #[test]
    fn test_usage_series_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_series(&USAGE_SERIES, RangeSelection::ThirtyDays, anchor(), &mut rng);

        assert_eq!(series.len(), 30);
        for point in &series {
            assert!(point.value <= 100, "value {} out of bounds", point.value);
        }

        // Thirty consecutive January days, strictly chronological
        let expected: Vec<String> = (1..=30)
            .map(|day| {
                NaiveDate::from_ymd_opt(2024, 1, day)
                    .unwrap()
                    .format("%b %d")
                    .to_string()
            })
            .collect();
        assert_eq!(series.labels(), expected.iter().map(String::as_str).collect::<Vec<_>>());

        let unique: HashSet<&str> = series.labels().into_iter().collect();
        assert_eq!(unique.len(), series.len());
    }

    #[test]
    fn test_cost_series_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        let end = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        let series = generate_series(&COST_SERIES, RangeSelection::TwelveMonths, end, &mut rng);

        assert_eq!(series.len(), 12);
        for point in &series {
            assert!(
                (500..=1000).contains(&point.value),
                "value {} out of bounds",
                point.value
            );
        }

        let expected: Vec<String> = (1..=12)
            .map(|month| {
                NaiveDate::from_ymd_opt(2024, month, 15)
                    .unwrap()
                    .format("%b %Y")
                    .to_string()
            })
            .collect();
        assert_eq!(series.labels(), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let series_a = generate_series(
            &USAGE_SERIES,
            RangeSelection::ThirtyDays,
            anchor(),
            &mut StdRng::seed_from_u64(42),
        );
        let series_b = generate_series(
            &USAGE_SERIES,
            RangeSelection::ThirtyDays,
            anchor(),
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(series_a, series_b);
    }

    #[test]
    fn test_daily_labels_cross_month_boundary() {
        let mut rng = StdRng::seed_from_u64(3);
        let end = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let series = generate_series(&USAGE_SERIES, RangeSelection::ThirtyDays, end, &mut rng);

        assert_eq!(series.points.first().unwrap().label, "Jan 07");
        assert_eq!(series.points.last().unwrap().label, "Feb 05");
    }

    #[test]
    fn test_refresh_keeps_labels() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut source =
            SampleSeriesSource::new(&USAGE_SERIES, RangeSelection::ThirtyDays, anchor(), &mut rng);
        let labels_before: Vec<String> = source
            .series()
            .labels()
            .iter()
            .map(|s| s.to_string())
            .collect();

        source.refresh(&mut rng);

        let labels_after: Vec<String> = source
            .series()
            .labels()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(labels_before, labels_after);
        assert_eq!(source.series().len(), 30);
    }

    #[test]
    fn test_rebuild_switches_length_and_cadence() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut source =
            SampleSeriesSource::new(&COST_SERIES, RangeSelection::ThirtyDays, anchor(), &mut rng);
        assert_eq!(source.series().len(), 30);

        source.rebuild(RangeSelection::TwelveMonths, anchor(), &mut rng);
        assert_eq!(source.series().len(), 12);
        assert!(source.series().points[0].label.contains("20"), "monthly labels carry a year");

        source.rebuild(RangeSelection::ThirtyDays, anchor(), &mut rng);
        assert_eq!(source.series().len(), 30);
    }
}
