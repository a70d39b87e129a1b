//! Dashboard page: stat tiles, controls and charts

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, Button, DrawingArea, DropDown, Label, Orientation, SearchEntry,
};
use log::warn;

use cloud_insights_core::{filter_series, DashboardSummary};
use cloud_insights_types::{RangeSelection, TelemetrySnapshot, CATEGORY_NAMES};

use super::charts;

/// Data the draw functions read on every frame
struct ViewModel {
    snapshot: Arc<TelemetrySnapshot>,
    query: String,
}

/// The dashboard page and its update entry points
pub struct DashboardView {
    root: GtkBox,
    usage_total: Label,
    cost_total: Label,
    trend: Label,
    usage_area: DrawingArea,
    cost_area: DrawingArea,
    pie_area: DrawingArea,
    legend_values: Vec<Label>,
    model: Rc<RefCell<ViewModel>>,
}

fn stat_tile(caption: &str) -> (GtkBox, Label) {
    let tile = GtkBox::new(Orientation::Vertical, 4);
    tile.add_css_class("card");
    tile.set_hexpand(true);
    let caption_label = Label::new(Some(caption));
    caption_label.add_css_class("stat-caption");
    caption_label.set_halign(Align::Start);
    let value_label = Label::new(Some("—"));
    value_label.add_css_class("stat-value");
    value_label.set_halign(Align::Start);
    tile.append(&caption_label);
    tile.append(&value_label);
    (tile, value_label)
}

fn chart_card(title: &str, area: &DrawingArea) -> GtkBox {
    let card = GtkBox::new(Orientation::Vertical, 6);
    card.add_css_class("card");
    card.set_hexpand(true);
    let title_label = Label::new(Some(title));
    title_label.add_css_class("card-title");
    title_label.set_halign(Align::Start);
    card.append(&title_label);
    card.append(area);
    card
}

fn chart_area(height: i32) -> DrawingArea {
    let area = DrawingArea::new();
    area.set_content_height(height);
    area.set_hexpand(true);
    area.set_vexpand(false);
    area
}

impl DashboardView {
    /// Build the page
    ///
    /// The callbacks report user interactions upward; the view keeps
    /// its own copy of the query so chart redraws stay local.
    pub fn new(
        initial_range: RangeSelection,
        on_search: impl Fn(&str) + 'static,
        on_range: impl Fn(RangeSelection) + 'static,
        on_export: impl Fn() + 'static,
    ) -> Self {
        let model = Rc::new(RefCell::new(ViewModel {
            snapshot: Arc::new(TelemetrySnapshot::default()),
            query: String::new(),
        }));

        let root = GtkBox::new(Orientation::Vertical, 16);
        root.set_margin_top(12);
        root.set_margin_bottom(12);
        root.set_margin_start(12);
        root.set_margin_end(12);

        // Search and date range controls
        let controls = GtkBox::new(Orientation::Horizontal, 12);
        let search = SearchEntry::new();
        search.set_placeholder_text(Some("Search..."));
        search.set_hexpand(true);
        controls.append(&search);

        let range_label = Label::new(Some("Date Range:"));
        range_label.add_css_class("muted");
        controls.append(&range_label);

        let range_names: Vec<&str> = RangeSelection::all()
            .iter()
            .map(|r| r.display_name())
            .collect();
        let range_combo = DropDown::from_strings(&range_names);
        range_combo.set_selected(initial_range.index() as u32);
        range_combo.connect_selected_notify(move |combo| {
            on_range(RangeSelection::from_index(combo.selected() as usize));
        });
        controls.append(&range_combo);
        root.append(&controls);

        // Top-level metric tiles
        let tiles = GtkBox::new(Orientation::Horizontal, 12);
        tiles.set_homogeneous(true);
        let (usage_tile, usage_total) = stat_tile("Total Usage");
        let (cost_tile, cost_total) = stat_tile("Total Cost");
        let (trend_tile, trend) = stat_tile("Usage Trend");
        tiles.append(&usage_tile);
        tiles.append(&cost_tile);
        tiles.append(&trend_tile);
        root.append(&tiles);

        // Usage and cost charts, side by side
        let usage_area = chart_area(280);
        let cost_area = chart_area(280);
        {
            let model = model.clone();
            usage_area.set_draw_func(move |_, cr, width, height| {
                let model = model.borrow();
                let filtered = filter_series(&model.snapshot.usage, &model.query);
                if let Err(e) =
                    charts::draw_area_chart(cr, &filtered, width as f64, height as f64)
                {
                    warn!("Usage chart rendering failed: {e}");
                }
            });
        }
        {
            let model = model.clone();
            cost_area.set_draw_func(move |_, cr, width, height| {
                let model = model.borrow();
                if let Err(e) =
                    charts::draw_bar_chart(cr, &model.snapshot.cost, width as f64, height as f64)
                {
                    warn!("Cost chart rendering failed: {e}");
                }
            });
        }
        // Every keystroke re-derives the filtered view immediately
        {
            let model = model.clone();
            let usage_area = usage_area.clone();
            search.connect_search_changed(move |entry| {
                let text = entry.text().to_string();
                model.borrow_mut().query = text.clone();
                usage_area.queue_draw();
                on_search(&text);
            });
        }

        let chart_row = GtkBox::new(Orientation::Horizontal, 12);
        chart_row.set_homogeneous(true);
        chart_row.append(&chart_card("Cloud Usage Trends", &usage_area));
        chart_row.append(&chart_card("Predicted Future Costs", &cost_area));
        root.append(&chart_row);

        // Resource allocation pie with legend
        let pie_area = chart_area(260);
        {
            let model = model.clone();
            pie_area.set_draw_func(move |_, cr, width, height| {
                let model = model.borrow();
                if let Err(e) =
                    charts::draw_pie_chart(cr, &model.snapshot.shares, width as f64, height as f64)
                {
                    warn!("Allocation chart rendering failed: {e}");
                }
            });
        }
        let pie_card = chart_card("Resource Allocation", &pie_area);
        let legend = GtkBox::new(Orientation::Horizontal, 16);
        legend.set_halign(Align::Center);
        let mut legend_values = Vec::new();
        for (i, name) in CATEGORY_NAMES.iter().enumerate() {
            let entry = GtkBox::new(Orientation::Horizontal, 6);
            let swatch = DrawingArea::new();
            swatch.set_content_width(12);
            swatch.set_content_height(12);
            swatch.set_valign(Align::Center);
            swatch.set_draw_func(move |_, cr, width, height| {
                let color = charts::CATEGORY_COLORS[i % charts::CATEGORY_COLORS.len()];
                cr.set_source_rgb(color.r, color.g, color.b);
                cr.rectangle(0.0, 0.0, width as f64, height as f64);
                let _ = cr.fill();
            });
            entry.append(&swatch);
            let value_label = Label::new(Some(name.display_name()));
            value_label.add_css_class("muted");
            entry.append(&value_label);
            legend.append(&entry);
            legend_values.push(value_label);
        }
        pie_card.append(&legend);
        root.append(&pie_card);

        // Export control
        let export_row = GtkBox::new(Orientation::Horizontal, 0);
        export_row.set_halign(Align::End);
        let export_button = Button::with_label("Export Data");
        export_button.add_css_class("suggested-action");
        export_button.connect_clicked(move |_| on_export());
        export_row.append(&export_button);
        root.append(&export_row);

        Self {
            root,
            usage_total,
            cost_total,
            trend,
            usage_area,
            cost_area,
            pie_area,
            legend_values,
            model,
        }
    }

    pub fn widget(&self) -> &GtkBox {
        &self.root
    }

    /// Adopt a freshly published snapshot and repaint
    pub fn set_snapshot(&self, snapshot: Arc<TelemetrySnapshot>) {
        let summary = DashboardSummary::from_snapshot(&snapshot);
        self.usage_total
            .set_text(&format!("{} GB", summary.total_usage));
        self.cost_total
            .set_text(&format!("${}.00", summary.total_cost));
        self.trend
            .set_text(&format!("{:+.2}%", summary.usage_trend_percent));

        for (label, share) in self.legend_values.iter().zip(snapshot.shares.iter()) {
            label.set_text(&format!("{} · {}", share.name.display_name(), share.value));
        }

        self.model.borrow_mut().snapshot = snapshot;
        self.queue_draw();
    }

    fn queue_draw(&self) {
        self.usage_area.queue_draw();
        self.cost_area.queue_draw();
        self.pie_area.queue_draw();
    }
}
