//! GTK user interface components

pub mod charts;
mod dashboard_view;
mod profile_view;
mod theme;
mod toasts;

pub use dashboard_view::DashboardView;
pub use profile_view::build_profile_page;
pub use theme::{apply_dark_mode, load_css};
pub use toasts::ToastStack;
