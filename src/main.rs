use clap::Parser;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, Image, Label, ListBox,
    Orientation, Overlay, Revealer, RevealerTransitionType, SelectionMode, Stack,
    StackTransitionType,
};
use log::{error, info, warn};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use cloud_insights::config::AppConfig;
use cloud_insights::ui::{
    apply_dark_mode, build_profile_page, load_css, DashboardView, ToastStack,
};
use cloud_insights_core::constants::REFRESH_INTERVAL;
use cloud_insights_core::{
    default_export_dir, reduce, write_export, ActiveView, NotificationCenter, RefreshScheduler,
    TelemetryHub, UiEvent, UiState,
};
use cloud_insights_sources::MockTelemetry;
use cloud_insights_types::UserProfile;
use rand::rngs::StdRng;
use rand::SeedableRng;

const APP_ID: &str = "com.github.cloudinsights.cloud_insights";

/// CloudInsights - a dashboard for mock cloud cost and usage telemetry
#[derive(Parser, Debug, Clone)]
#[command(name = "cloud-insights")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Launch in fullscreen mode
    #[arg(short = 'f', long = "fullscreen")]
    fullscreen: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag;
    // RUST_LOG overrides the CLI setting
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting CloudInsights v{}", env!("CARGO_PKG_VERSION"));

    CLI_OPTIONS.set(cli).expect("CLI options already set");

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["cloud-insights"]);
}

fn build_ui(app: &Application) {
    let cli = CLI_OPTIONS.get().cloned().unwrap_or_else(|| Cli {
        fullscreen: false,
        debug: 0,
        config: None,
    });

    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    let app_config = match app_config {
        Ok(config) => {
            info!("Loaded configuration from disk");
            config
        }
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };
    let app_config = Rc::new(RefCell::new(app_config));
    let ui_state = Rc::new(RefCell::new(app_config.borrow().initial_ui_state()));

    load_css();
    apply_dark_mode(ui_state.borrow().dark_mode);

    let window = {
        let cfg = app_config.borrow();
        ApplicationWindow::builder()
            .application(app)
            .title("CloudInsights - Cloud Cost Optimizer")
            .default_width(cfg.window.width)
            .default_height(cfg.window.height)
            .build()
    };
    if cli.fullscreen || app_config.borrow().window.fullscreen_enabled {
        window.fullscreen();
    }

    // Telemetry backbone: hub shared with the scheduler thread
    let hub = TelemetryHub::new();
    let initial_range = ui_state.borrow().range;
    let mut seed_rng = StdRng::from_entropy();
    let telemetry = MockTelemetry::new(initial_range, &mut seed_rng);
    let (scheduler, task) = RefreshScheduler::new(
        Box::new(telemetry),
        hub.clone(),
        seed_rng,
        REFRESH_INTERVAL,
        initial_range,
    );
    let scheduler = Rc::new(scheduler);

    // Spawn tokio runtime for the refresh loop
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {}", e);
                return;
            }
        };
        info!("Starting refresh loop");
        rt.block_on(task.run());
    });

    let notifications = Arc::new(NotificationCenter::new());
    let toasts = Rc::new(ToastStack::new(notifications));

    // Dashboard page with its interaction callbacks
    let dashboard = {
        let ui_state_for_search = ui_state.clone();
        let ui_state_for_range = ui_state.clone();
        let scheduler_for_range = scheduler.clone();
        let toasts_for_range = toasts.clone();
        let hub_for_export = hub.clone();
        let toasts_for_export = toasts.clone();
        Rc::new(DashboardView::new(
            initial_range,
            move |query| {
                let mut state = ui_state_for_search.borrow_mut();
                *state = reduce(state.clone(), UiEvent::SearchChanged(query.to_string()));
            },
            move |range| {
                {
                    let mut state = ui_state_for_range.borrow_mut();
                    if state.range == range {
                        return;
                    }
                    *state = reduce(state.clone(), UiEvent::RangeSelected(range));
                }
                scheduler_for_range.set_range(range);
                toasts_for_range.show(&format!("Date range set to {}", range.display_name()));
            },
            move || {
                let snapshot = hub_for_export.snapshot();
                match write_export(&snapshot.usage, &default_export_dir()) {
                    Ok(path) => {
                        toasts_for_export.show(&format!("Exported to {}", path.display()));
                    }
                    Err(e) => {
                        error!("Export failed: {}", e);
                        toasts_for_export.show("Export failed");
                    }
                }
            },
        ))
    };

    let profile_page = build_profile_page(&UserProfile::sample());

    // Main stack
    let stack = Stack::new();
    stack.set_transition_type(StackTransitionType::Crossfade);
    stack.add_named(dashboard.widget(), Some(ActiveView::Dashboard.page_name()));
    stack.add_named(&profile_page, Some(ActiveView::Profile.page_name()));
    stack.set_vexpand(true);

    // Page heading with sidebar toggle
    let page_title = Label::new(Some(ActiveView::Dashboard.title()));
    page_title.add_css_class("page-title");
    page_title.set_halign(Align::Start);
    page_title.set_hexpand(true);

    let sidebar = build_sidebar();
    let sidebar_revealer = Revealer::new();
    sidebar_revealer.set_transition_type(RevealerTransitionType::SlideRight);
    sidebar_revealer.set_child(Some(&sidebar));
    sidebar_revealer.set_reveal_child(ui_state.borrow().sidebar_open);

    let sidebar_toggle = Button::from_icon_name("open-menu-symbolic");
    {
        let ui_state = ui_state.clone();
        let sidebar_revealer = sidebar_revealer.clone();
        sidebar_toggle.connect_clicked(move |_| {
            let open = {
                let mut state = ui_state.borrow_mut();
                *state = reduce(state.clone(), UiEvent::ToggleSidebar);
                state.sidebar_open
            };
            sidebar_revealer.set_reveal_child(open);
        });
    }

    let header_row = GtkBox::new(Orientation::Horizontal, 8);
    header_row.set_margin_top(12);
    header_row.set_margin_start(12);
    header_row.set_margin_end(12);
    header_row.append(&page_title);
    header_row.append(&sidebar_toggle);

    let content_column = GtkBox::new(Orientation::Vertical, 0);
    content_column.set_hexpand(true);
    content_column.append(&header_row);
    content_column.append(&stack);

    let content_row = GtkBox::new(Orientation::Horizontal, 0);
    content_row.set_vexpand(true);
    content_row.append(&sidebar_revealer);
    content_row.append(&content_column);

    // Navigation bar with view switcher and dark-mode toggle
    let nav_dashboard = Button::with_label("Dashboard");
    let nav_profile = Button::with_label("Profile");
    for button in [&nav_dashboard, &nav_profile] {
        button.add_css_class("nav-link");
    }
    nav_dashboard.add_css_class("nav-link-active");

    let select_view: Rc<dyn Fn(ActiveView)> = {
        let ui_state = ui_state.clone();
        let stack = stack.clone();
        let page_title = page_title.clone();
        let nav_dashboard = nav_dashboard.clone();
        let nav_profile = nav_profile.clone();
        Rc::new(move |view: ActiveView| {
            {
                let mut state = ui_state.borrow_mut();
                *state = reduce(state.clone(), UiEvent::SelectView(view));
            }
            stack.set_visible_child_name(view.page_name());
            page_title.set_text(view.title());
            let (active, inactive) = match view {
                ActiveView::Dashboard => (&nav_dashboard, &nav_profile),
                ActiveView::Profile => (&nav_profile, &nav_dashboard),
            };
            active.add_css_class("nav-link-active");
            inactive.remove_css_class("nav-link-active");
        })
    };
    {
        let select_view = select_view.clone();
        nav_dashboard.connect_clicked(move |_| select_view(ActiveView::Dashboard));
    }
    {
        let select_view = select_view.clone();
        nav_profile.connect_clicked(move |_| select_view(ActiveView::Profile));
    }

    let dark_toggle = Button::from_icon_name(if ui_state.borrow().dark_mode {
        "weather-clear-symbolic"
    } else {
        "weather-clear-night-symbolic"
    });
    {
        let ui_state = ui_state.clone();
        dark_toggle.connect_clicked(move |button| {
            let dark = {
                let mut state = ui_state.borrow_mut();
                *state = reduce(state.clone(), UiEvent::ToggleDarkMode);
                state.dark_mode
            };
            apply_dark_mode(dark);
            button.set_icon_name(if dark {
                "weather-clear-symbolic"
            } else {
                "weather-clear-night-symbolic"
            });
        });
    }

    let nav_bar = GtkBox::new(Orientation::Horizontal, 12);
    nav_bar.add_css_class("nav-bar");
    let brand = GtkBox::new(Orientation::Horizontal, 8);
    brand.append(&Image::from_icon_name("weather-few-clouds-symbolic"));
    let brand_label = Label::new(Some("CloudInsights"));
    brand_label.add_css_class("nav-title");
    brand.append(&brand_label);
    brand.set_hexpand(true);
    nav_bar.append(&brand);
    nav_bar.append(&nav_dashboard);
    nav_bar.append(&nav_profile);
    nav_bar.append(&dark_toggle);
    nav_bar.append(&Button::from_icon_name("preferences-system-notifications-symbolic"));

    // Footer
    let footer = GtkBox::new(Orientation::Horizontal, 8);
    footer.add_css_class("footer");
    let footer_brand = Label::new(Some("CloudInsights — Empowering your cloud decisions"));
    footer_brand.add_css_class("muted");
    footer_brand.set_hexpand(true);
    footer_brand.set_halign(Align::Start);
    footer.append(&footer_brand);
    let footer_note = Label::new(Some("© 2024 CloudInsights. All rights reserved."));
    footer_note.add_css_class("muted");
    footer.append(&footer_note);

    let page = GtkBox::new(Orientation::Vertical, 0);
    page.append(&nav_bar);
    page.append(&content_row);
    page.append(&footer);

    // Toasts float above everything
    let overlay = Overlay::new();
    overlay.set_child(Some(&page));
    overlay.add_overlay(toasts.widget());
    window.set_child(Some(&overlay));

    // Poll the hub for fresh generations and repaint
    let poll_source: Rc<RefCell<Option<glib::SourceId>>> = Rc::new(RefCell::new(None));
    {
        let hub = hub.clone();
        let dashboard = dashboard.clone();
        let last_generation = Cell::new(0u64);
        let source_id = glib::timeout_add_local(std::time::Duration::from_millis(500), move || {
            let generation = hub.generation();
            if generation != last_generation.get() {
                last_generation.set(generation);
                dashboard.set_snapshot(hub.snapshot());
            }
            glib::ControlFlow::Continue
        });
        *poll_source.borrow_mut() = Some(source_id);
    }

    // Teardown: stop the refresh loop before the window goes away
    {
        let scheduler = scheduler.clone();
        let poll_source = poll_source.clone();
        let app_config = app_config.clone();
        let ui_state = ui_state.clone();
        window.connect_close_request(move |_| {
            scheduler.cancel();
            if let Some(source_id) = poll_source.borrow_mut().take() {
                source_id.remove();
            }

            let mut config = app_config.borrow_mut();
            config.absorb_ui_state(&ui_state.borrow());
            if let Err(e) = config.save() {
                warn!("Failed to save config: {}", e);
            }
            glib::Propagation::Proceed
        });
    }

    window.present();
}

/// Static navigation sidebar
fn build_sidebar() -> GtkBox {
    let sidebar = GtkBox::new(Orientation::Vertical, 4);
    sidebar.add_css_class("sidebar");

    let heading = Label::new(Some("Menu"));
    heading.add_css_class("sidebar-heading");
    heading.set_halign(Align::Start);
    sidebar.append(&heading);

    let list = ListBox::new();
    list.set_selection_mode(SelectionMode::None);
    for (icon, label) in [
        ("utilities-system-monitor-symbolic", "Analytics"),
        ("wallet-open-symbolic", "Billing"),
        ("preferences-system-symbolic", "Settings"),
        ("help-browser-symbolic", "Help"),
    ] {
        let row = GtkBox::new(Orientation::Horizontal, 8);
        row.set_margin_top(4);
        row.set_margin_bottom(4);
        row.append(&Image::from_icon_name(icon));
        row.append(&Label::new(Some(label)));
        list.append(&row);
    }
    sidebar.append(&list);
    sidebar
}
