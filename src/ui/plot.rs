use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Painter, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot, PlotPoints, Points};

use crate::chart::spec::{
    BarSpec, BarStyle, CategoryCount, Dashboard, HistogramSpec, PieSpec, ScatterSpec,
};
use crate::color::{generate_palette, named_color, CategoryColors};

// ---------------------------------------------------------------------------
// Dashboard grid (central panel)
// ---------------------------------------------------------------------------

/// Render the four charts in a 2×2 grid.
pub fn dashboard(ui: &mut Ui, charts: &Dashboard) {
    let height = ((ui.available_height() - 90.0) / 2.0).max(240.0);

    ui.columns(2, |cols: &mut [Ui]| {
        scatter_chart(&mut cols[0], &charts.scatter, height);
        histogram_chart(&mut cols[1], &charts.histogram, height);
    });
    ui.separator();
    ui.columns(2, |cols: &mut [Ui]| {
        pie_chart(&mut cols[0], &charts.pie, height);
        bar_chart(&mut cols[1], &charts.bar, height);
    });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, height: f32) {
    ui.strong(spec.title.as_str());

    let colors = CategoryColors::new(&spec.color_order);
    let platforms = spec.platform_order.clone();

    Plot::new("scatter_plot")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .y_axis_formatter(move |mark: GridMark, _range| category_label(&platforms, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per sentiment so the legend lists them in slot order.
            for sentiment in &spec.color_order {
                let points: PlotPoints = spec
                    .points
                    .iter()
                    .filter(|p| &p.sentiment == sentiment)
                    .filter_map(|p| {
                        let y = spec.platform_order.iter().position(|q| q == &p.platform)?;
                        Some([p.retweets as f64, y as f64])
                    })
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(sentiment)
                        .color(colors.color_for(sentiment))
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram and bar
// ---------------------------------------------------------------------------

pub fn histogram_chart(ui: &mut Ui, spec: &HistogramSpec, height: f32) {
    ui.strong(spec.title.as_str());
    category_bar_plot(
        ui,
        "hist_plot",
        &spec.bins,
        &spec.style,
        spec.x_label.as_str(),
        "count",
        height,
    );
}

pub fn bar_chart(ui: &mut Ui, spec: &BarSpec, height: f32) {
    ui.strong(spec.title.as_str());
    category_bar_plot(
        ui,
        "bar_plot",
        &spec.bars,
        &spec.style,
        spec.x_label.as_str(),
        spec.y_label.as_str(),
        height,
    );
}

fn category_bar_plot(
    ui: &mut Ui,
    id: &str,
    counts: &[CategoryCount],
    style: &BarStyle,
    x_label: &str,
    y_label: &str,
    height: f32,
) {
    let categories: Vec<String> = counts.iter().map(|c| c.category.clone()).collect();
    let fill = named_color(&style.fill);
    let stroke = style
        .outline
        .as_deref()
        .map(|c| Stroke::new(style.outline_width, named_color(c)))
        .unwrap_or(Stroke::NONE);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .name(&c.category)
                .fill(fill)
                .stroke(stroke)
                .width(0.9)
        })
        .collect();

    Plot::new(id)
        .height(height)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&categories, mark.value))
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if !bars.is_empty() {
                plot_ui.bar_chart(BarChart::new(bars));
            }
        });
}

/// Axis label for a categorical axis: only integral positions get a name.
fn category_label(categories: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories.get(index as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

pub fn pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    ui.strong(spec.title.as_str());

    let colors = generate_palette(spec.slices.len());
    let total: f64 = spec.slices.iter().map(|s| s.value.max(0.0)).sum();

    ui.horizontal(|ui: &mut Ui| {
        let side = height.min(ui.available_width() * 0.6).max(80.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let center = response.rect.center();
        let radius = side * 0.45;

        if total > 0.0 {
            let mut start = -FRAC_PI_2;
            for (slice, color) in spec.slices.iter().zip(&colors) {
                let sweep = (slice.value.max(0.0) / total) as f32 * TAU;
                paint_sector(&painter, center, radius, start, sweep, *color);
                start += sweep;
            }
        } else {
            painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::DARK_GRAY));
        }

        ui.vertical(|ui: &mut Ui| {
            for (slice, color) in spec.slices.iter().zip(&colors) {
                let share = if total > 0.0 {
                    slice.value.max(0.0) / total * 100.0
                } else {
                    0.0
                };
                ui.label(
                    RichText::new(format!("■ {}  {share:.1}%", slice.label)).color(*color),
                );
            }
        });
    });
}

/// Fill a circular sector as a fan of thin triangles, each one convex.
fn paint_sector(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    if sweep <= 0.0 {
        return;
    }
    let steps = ((sweep / TAU) * 128.0).ceil().max(1.0) as usize;
    let step = sweep / steps as f32;
    for i in 0..steps {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        painter.add(Shape::convex_polygon(
            vec![
                center,
                center + radius * Vec2::angled(a0),
                center + radius * Vec2::angled(a1),
            ],
            color,
            Stroke::NONE,
        ));
    }
}
