//! cloud-insights-sources: Mock telemetry generators for CloudInsights.
//!
//! There is no real data source anywhere in the application; these
//! generators produce bounded random samples on demand. Randomness and
//! the label anchor date are injected so tests can pin both down.

mod categories;
mod mock;
mod samples;

pub use categories::{split_categories, CategorySource};
pub use mock::MockTelemetry;
pub use samples::{generate_series, SampleSeriesSource, SeriesSpec, COST_SERIES, USAGE_SERIES};
