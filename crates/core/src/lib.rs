//! cloud-insights-core: Behavioral core of the CloudInsights dashboard.
//!
//! This crate owns everything with a testable contract:
//! - The refresh scheduler that regenerates mock telemetry on a cadence
//! - The telemetry hub publishing snapshots to the UI
//! - The view filter, export encoder and summary statistics
//! - The shell state reducer and the notification center

pub mod constants;
pub mod export;
pub mod filter;
pub mod notifications;
pub mod scheduler;
pub mod state;
pub mod summary;
pub mod telemetry;

pub use export::{default_export_dir, encode_csv, write_export};
pub use filter::filter_series;
pub use notifications::NotificationCenter;
pub use scheduler::{RefreshScheduler, SchedulerTask};
pub use state::{reduce, ActiveView, UiEvent, UiState};
pub use summary::DashboardSummary;
pub use telemetry::{BoxedProvider, TelemetryHub, TelemetryProvider};
