//! Cairo chart rendering for the dashboard
//!
//! Three fixed chart kinds: an area chart for the filtered usage
//! series, a bar chart for the cost series and a pie chart for the
//! category split. Axis text goes through Pango rather than Cairo's
//! toy font API.

use anyhow::Result;
use cairo::{Context, LinearGradient};
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};

use cloud_insights_types::{CategoryShare, Series};

/// RGB color used by the chart renderers
#[derive(Debug, Clone, Copy)]
pub struct ChartColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ChartColor {
    const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    fn set(&self, cr: &Context, alpha: f64) {
        cr.set_source_rgba(self.r, self.g, self.b, alpha);
    }
}

/// Usage area line (#3B82F6)
pub const USAGE_COLOR: ChartColor = ChartColor::rgb8(0x3b, 0x82, 0xf6);
/// Cost bars (#10B981)
pub const COST_COLOR: ChartColor = ChartColor::rgb8(0x10, 0xb9, 0x81);
/// Pie slices, in category order
pub const CATEGORY_COLORS: [ChartColor; 4] = [
    ChartColor::rgb8(0x00, 0x88, 0xfe),
    ChartColor::rgb8(0x00, 0xc4, 0x9f),
    ChartColor::rgb8(0xff, 0xbb, 0x28),
    ChartColor::rgb8(0xff, 0x80, 0x42),
];

const AXIS_COLOR: ChartColor = ChartColor::rgb8(0x6b, 0x72, 0x80);
const GRID_COLOR: ChartColor = ChartColor::rgb8(0x37, 0x41, 0x51);

const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;
const LABEL_FONT_SIZE: f64 = 9.0;

fn label_font() -> FontDescription {
    let mut desc = FontDescription::new();
    desc.set_family("Sans");
    desc.set_absolute_size(LABEL_FONT_SIZE * pango::SCALE as f64);
    desc
}

fn show_label(cr: &Context, text: &str, x: f64, y: f64, centered: bool) {
    let layout = create_layout(cr);
    layout.set_font_description(Some(&label_font()));
    layout.set_text(text);
    let (width, height) = layout.pixel_size();
    let x = if centered { x - width as f64 / 2.0 } else { x };
    cr.move_to(x, y - height as f64 / 2.0);
    show_layout(cr, &layout);
}

struct PlotArea {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn plot_area(width: f64, height: f64) -> Option<PlotArea> {
    let plot = PlotArea {
        x: MARGIN_LEFT,
        y: MARGIN_TOP,
        width: width - MARGIN_LEFT - MARGIN_RIGHT,
        height: height - MARGIN_TOP - MARGIN_BOTTOM,
    };
    (plot.width > 0.0 && plot.height > 0.0).then_some(plot)
}

/// Round the value axis up to a friendly ceiling
fn axis_ceiling(max_value: u64) -> f64 {
    if max_value == 0 {
        return 1.0;
    }
    let step = 10_f64.powf((max_value as f64).log10().floor());
    (max_value as f64 / step).ceil() * step
}

fn draw_value_grid(cr: &Context, plot: &PlotArea, ceiling: f64) -> Result<()> {
    const STEPS: u32 = 4;
    cr.set_line_width(1.0);
    for step in 0..=STEPS {
        let fraction = step as f64 / STEPS as f64;
        let y = plot.y + plot.height * (1.0 - fraction);

        GRID_COLOR.set(cr, 0.35);
        cr.set_dash(&[3.0, 3.0], 0.0);
        cr.move_to(plot.x, y);
        cr.line_to(plot.x + plot.width, y);
        cr.stroke()?;
        cr.set_dash(&[], 0.0);

        AXIS_COLOR.set(cr, 1.0);
        show_label(
            cr,
            &format!("{}", (ceiling * fraction).round() as u64),
            6.0,
            y,
            false,
        );
    }
    Ok(())
}

fn draw_x_labels(cr: &Context, plot: &PlotArea, series: &Series) {
    if series.is_empty() {
        return;
    }
    // Thin out labels so they never collide: aim for ~6 across the axis
    let stride = (series.len() / 6).max(1);
    let slot = plot.width / series.len() as f64;
    AXIS_COLOR.set(cr, 1.0);
    for (i, point) in series.iter().enumerate() {
        if i % stride != 0 {
            continue;
        }
        let x = plot.x + slot * (i as f64 + 0.5);
        show_label(
            cr,
            &point.label,
            x,
            plot.y + plot.height + MARGIN_BOTTOM / 2.0,
            true,
        );
    }
}

/// Area chart of the (filtered) usage series
pub fn draw_area_chart(cr: &Context, series: &Series, width: f64, height: f64) -> Result<()> {
    let Some(plot) = plot_area(width, height) else {
        return Ok(());
    };
    let ceiling = axis_ceiling(series.max_value());
    draw_value_grid(cr, &plot, ceiling)?;
    draw_x_labels(cr, &plot, series);

    if series.is_empty() {
        return Ok(());
    }

    let slot = plot.width / series.len() as f64;
    let point_xy = |i: usize, value: u64| {
        let x = plot.x + slot * (i as f64 + 0.5);
        let y = plot.y + plot.height * (1.0 - value as f64 / ceiling);
        (x, y)
    };

    // Fill under the line, fading to transparent at the bottom
    let (first_x, _) = point_xy(0, 0);
    cr.move_to(first_x, plot.y + plot.height);
    for (i, point) in series.iter().enumerate() {
        let (x, y) = point_xy(i, point.value);
        cr.line_to(x, y);
    }
    let (last_x, _) = point_xy(series.len() - 1, 0);
    cr.line_to(last_x, plot.y + plot.height);
    cr.close_path();

    let gradient = LinearGradient::new(0.0, plot.y, 0.0, plot.y + plot.height);
    gradient.add_color_stop_rgba(0.0, USAGE_COLOR.r, USAGE_COLOR.g, USAGE_COLOR.b, 0.55);
    gradient.add_color_stop_rgba(1.0, USAGE_COLOR.r, USAGE_COLOR.g, USAGE_COLOR.b, 0.0);
    cr.set_source(&gradient)?;
    cr.fill()?;

    // The line itself
    USAGE_COLOR.set(cr, 1.0);
    cr.set_line_width(2.0);
    for (i, point) in series.iter().enumerate() {
        let (x, y) = point_xy(i, point.value);
        if i == 0 {
            cr.move_to(x, y);
        } else {
            cr.line_to(x, y);
        }
    }
    cr.stroke()?;

    Ok(())
}

/// Bar chart of the cost series
pub fn draw_bar_chart(cr: &Context, series: &Series, width: f64, height: f64) -> Result<()> {
    let Some(plot) = plot_area(width, height) else {
        return Ok(());
    };
    let ceiling = axis_ceiling(series.max_value());
    draw_value_grid(cr, &plot, ceiling)?;
    draw_x_labels(cr, &plot, series);

    if series.is_empty() {
        return Ok(());
    }

    let slot = plot.width / series.len() as f64;
    let bar_width = (slot * 0.6).max(1.0);
    COST_COLOR.set(cr, 0.9);
    for (i, point) in series.iter().enumerate() {
        let bar_height = plot.height * point.value as f64 / ceiling;
        let x = plot.x + slot * (i as f64 + 0.5) - bar_width / 2.0;
        cr.rectangle(x, plot.y + plot.height - bar_height, bar_width, bar_height);
        cr.fill()?;
    }

    Ok(())
}

/// Pie chart of the category split
///
/// Slice angles are proportional to each share of the total. A total of
/// zero draws an empty ring outline instead of dividing by zero.
pub fn draw_pie_chart(cr: &Context, shares: &[CategoryShare], width: f64, height: f64) -> Result<()> {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0 - 8.0).max(1.0);

    let total: u64 = shares.iter().map(|s| s.value).sum();
    if total == 0 {
        GRID_COLOR.set(cr, 0.6);
        cr.set_line_width(2.0);
        cr.arc(cx, cy, radius, 0.0, std::f64::consts::TAU);
        cr.stroke()?;
        return Ok(());
    }

    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (i, share) in shares.iter().enumerate() {
        let sweep = share.value as f64 / total as f64 * std::f64::consts::TAU;
        let color = CATEGORY_COLORS[i % CATEGORY_COLORS.len()];
        color.set(cr, 1.0);
        cr.move_to(cx, cy);
        cr.arc(cx, cy, radius, angle, angle + sweep);
        cr.close_path();
        cr.fill()?;
        angle += sweep;
    }

    Ok(())
}
