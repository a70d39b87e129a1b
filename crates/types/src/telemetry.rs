//! Snapshot of the mock telemetry published by the refresh scheduler

use serde::{Deserialize, Serialize};

use crate::category::CategoryShare;
use crate::range::RangeSelection;
use crate::series::Series;

/// One complete generation of dashboard data
///
/// The scheduler publishes a fresh snapshot on every tick and on every
/// range change; readers never see a partially updated generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Usage samples (GB), bounded [0, 100]
    pub usage: Series,
    /// Cost samples ($), bounded [500, 1000]
    pub cost: Series,
    /// Resource allocation split, always four entries
    pub shares: Vec<CategoryShare>,
    /// The range selection this snapshot was generated under
    pub range: RangeSelection,
}
