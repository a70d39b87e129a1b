//! The complete mock telemetry set behind the dashboard

use chrono::NaiveDate;
use log::debug;
use rand::rngs::StdRng;

use cloud_insights_core::TelemetryProvider;
use cloud_insights_types::{RangeSelection, TelemetrySnapshot};

use crate::categories::CategorySource;
use crate::samples::{today, SampleSeriesSource, COST_SERIES, USAGE_SERIES};

/// Usage series, cost series and category split as one provider
///
/// The scheduler owns an instance of this behind the
/// [`TelemetryProvider`] seam. The label anchor is today unless a fixed
/// date was injected for tests.
pub struct MockTelemetry {
    usage: SampleSeriesSource,
    cost: SampleSeriesSource,
    categories: CategorySource,
    range: RangeSelection,
    fixed_anchor: Option<NaiveDate>,
}

impl MockTelemetry {
    /// Build the default telemetry set, anchored at today
    pub fn new(range: RangeSelection, rng: &mut StdRng) -> Self {
        Self::build(range, None, rng)
    }

    /// Build with a fixed label anchor (tests)
    pub fn with_anchor(range: RangeSelection, anchor: NaiveDate, rng: &mut StdRng) -> Self {
        Self::build(range, Some(anchor), rng)
    }

    fn build(range: RangeSelection, fixed_anchor: Option<NaiveDate>, rng: &mut StdRng) -> Self {
        let anchor = fixed_anchor.unwrap_or_else(today);
        Self {
            usage: SampleSeriesSource::new(&USAGE_SERIES, range, anchor, rng),
            cost: SampleSeriesSource::new(&COST_SERIES, range, anchor, rng),
            categories: CategorySource::new(rng),
            range,
            fixed_anchor,
        }
    }

    fn anchor(&self) -> NaiveDate {
        self.fixed_anchor.unwrap_or_else(today)
    }
}

impl TelemetryProvider for MockTelemetry {
    fn refresh_values(&mut self, rng: &mut StdRng) {
        self.usage.refresh(rng);
        self.cost.refresh(rng);
        self.categories.regenerate(rng);
    }

    fn rebuild(&mut self, range: RangeSelection, rng: &mut StdRng) {
        let anchor = self.anchor();
        debug!("Rebuilding mock telemetry for {:?} ending {}", range, anchor);
        self.range = range;
        self.usage.rebuild(range, anchor, rng);
        self.cost.rebuild(range, anchor, rng);
        self.categories.regenerate(rng);
    }

    fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            usage: self.usage.series().clone(),
            cost: self.cost.series().clone(),
            shares: self.categories.shares().to_vec(),
            range: self.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_insights_core::{RefreshScheduler, TelemetryHub};
    use rand::SeedableRng;
    use std::time::Duration;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_refresh_touches_values_not_labels() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut telemetry =
            MockTelemetry::with_anchor(RangeSelection::ThirtyDays, anchor(), &mut rng);
        let before = telemetry.snapshot();

        telemetry.refresh_values(&mut rng);
        let after = telemetry.snapshot();

        assert_eq!(before.usage.labels(), after.usage.labels());
        assert_eq!(before.cost.labels(), after.cost.labels());
        assert_eq!(after.shares.len(), 4);
    }

    #[test]
    fn test_rebuild_switches_both_series() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut telemetry =
            MockTelemetry::with_anchor(RangeSelection::ThirtyDays, anchor(), &mut rng);

        telemetry.rebuild(RangeSelection::TwelveMonths, &mut rng);
        let snapshot = telemetry.snapshot();
        assert_eq!(snapshot.usage.len(), 12);
        assert_eq!(snapshot.cost.len(), 12);
        assert_eq!(snapshot.range, RangeSelection::TwelveMonths);
    }

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_drives_mock_telemetry() {
        let hub = TelemetryHub::new();
        let mut rng = StdRng::seed_from_u64(23);
        let telemetry = MockTelemetry::with_anchor(RangeSelection::ThirtyDays, anchor(), &mut rng);
        let (scheduler, task) = RefreshScheduler::new(
            Box::new(telemetry),
            hub.clone(),
            StdRng::seed_from_u64(24),
            Duration::from_secs(60),
            RangeSelection::ThirtyDays,
        );
        let handle = tokio::spawn(task.run());
        settle().await;

        let initial = hub.snapshot();
        assert_eq!(initial.usage.len(), 30);
        assert!(initial.usage.values().iter().all(|v| *v <= 100));
        assert!(initial
            .cost
            .values()
            .iter()
            .all(|v| (500..=1000).contains(v)));

        tokio::time::advance(Duration::from_secs(61)).await;
        settle().await;
        let ticked = hub.snapshot();
        assert_eq!(initial.usage.labels(), ticked.usage.labels());

        scheduler.set_range(RangeSelection::TwelveMonths);
        settle().await;
        let rebuilt = hub.snapshot();
        assert_eq!(rebuilt.usage.len(), 12);
        assert_eq!(rebuilt.cost.len(), 12);

        scheduler.cancel();
        handle.await.unwrap();
    }
}
