//! Shared constants for the application

use std::time::Duration;

/// Cadence of the automatic telemetry refresh
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// How long a toast stays on screen before it expires
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// File name of the exported usage series
pub const EXPORT_FILE_NAME: &str = "cloud_usage_data.csv";
