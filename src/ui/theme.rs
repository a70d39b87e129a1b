//! Application CSS and dark-mode handling

use gdk4::Display;
use gtk4::CssProvider;
use log::{info, warn};

/// Load the application stylesheet
pub fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(
        "
        .nav-bar {
            padding: 8px 16px;
            border-bottom: 1px solid alpha(currentColor, 0.15);
        }

        .nav-title {
            font-size: 18px;
            font-weight: 600;
        }

        .nav-link {
            background: none;
            border: none;
        }

        .nav-link-active {
            font-weight: 700;
        }

        .sidebar {
            padding: 12px;
            min-width: 220px;
        }

        .sidebar-heading {
            font-size: 15px;
            font-weight: 600;
            margin-bottom: 8px;
        }

        .page-title {
            font-size: 24px;
            font-weight: 600;
        }

        .card {
            border-radius: 8px;
            padding: 14px;
            background: alpha(currentColor, 0.04);
        }

        .card-title {
            font-weight: 600;
        }

        .stat-caption {
            font-size: 12px;
            color: alpha(currentColor, 0.65);
        }

        .stat-value {
            font-size: 22px;
            font-weight: 700;
        }

        .muted {
            color: alpha(currentColor, 0.6);
        }

        .skill-chip {
            border-radius: 999px;
            padding: 2px 10px;
            background: alpha(#3b82f6, 0.18);
            font-size: 12px;
        }

        .avatar {
            border-radius: 999px;
            background: alpha(#3b82f6, 0.25);
            font-size: 32px;
            font-weight: 700;
            min-width: 96px;
            min-height: 96px;
        }

        .toast {
            background: #3b82f6;
            color: white;
            border-radius: 6px;
            padding: 8px 14px;
            margin: 4px;
        }

        .footer {
            padding: 10px 16px;
            border-top: 1px solid alpha(currentColor, 0.15);
        }
        ",
    );

    match Display::default() {
        Some(display) => {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        None => warn!("No display available; stylesheet not applied"),
    }
}

/// Flip the toolkit-wide dark preference
pub fn apply_dark_mode(dark: bool) {
    if let Some(settings) = gtk4::Settings::default() {
        settings.set_gtk_application_prefer_dark_theme(dark);
        info!("Applied color scheme: {}", if dark { "dark" } else { "light" });
    }
}
