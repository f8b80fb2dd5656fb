//! Distribution bar chart and pressure/temperature scatter plot.
//!
//! DESIGN
//! ======
//! Both plots are built as standalone SVG documents by pure functions so the
//! markup is testable natively; the component injects them via `inner_html`.
//! Layout comes from `util::chart_math`, colours from `util::palette`.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::net::types::{EquipmentRecord, UploadSummary};
use crate::util::chart_math::{
    AXIS_INTERVALS, PlotArea, POINT_RADIUS, VIEW_HEIGHT, VIEW_WIDTH, bar_marks, count_axis,
    fraction, linear_ticks, padded_range,
};
use crate::util::palette::SCATTER_FILL;

/// Side-by-side charts for the current summary, or a warning placeholder.
#[component]
pub fn ChartsView() -> impl IntoView {
    let current = expect_context::<RwSignal<Option<UploadSummary>>>();

    let has_data = move || current.with(has_chart_data);
    let bar_svg = move || {
        current.with(|data| data.as_ref().map(bar_chart_svg).unwrap_or_default())
    };
    let scatter_svg = move || {
        current.with(|data| {
            data.as_ref()
                .and_then(|summary| summary.equipment_records.as_deref())
                .map(scatter_chart_svg)
                .unwrap_or_default()
        })
    };

    view! {
        <Show
            when=has_data
            fallback=|| view! {
                <div class="alert alert--warning">
                    "No data available for visualization. Upload a CSV file to see charts."
                </div>
            }
        >
            <div class="charts">
                <div class="card charts__card">
                    <div class="card__body" inner_html=bar_svg></div>
                </div>
                <div class="card charts__card">
                    <div class="card__body" inner_html=scatter_svg></div>
                </div>
            </div>
        </Show>
    }
}

fn has_chart_data(data: &Option<UploadSummary>) -> bool {
    data.as_ref().is_some_and(UploadSummary::has_records)
}

/// Render the equipment-type distribution as an SVG document.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn bar_chart_svg(summary: &UploadSummary) -> String {
    let area = PlotArea::standard();
    let distribution = summary.type_distribution();
    let max_count = distribution.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let (axis_max, step) = count_axis(max_count);
    let marks = bar_marks(&distribution, area);

    let mut svg = svg_open("Equipment Type Distribution");
    for interval in 0..=AXIS_INTERVALS {
        let value = step * interval as i64;
        let y = area.y_at(value as f64 / axis_max as f64);
        svg.push_str(&format!(
            r#"<line class="chart__grid" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}"/>"#,
            x1 = area.left,
            x2 = area.right(),
        ));
        svg.push_str(&format!(
            r#"<text class="chart__tick chart__tick--y" x="{x:.1}" y="{ty:.1}">{value}</text>"#,
            x = area.left - 8.0,
            ty = y + 4.0,
        ));
    }
    for mark in &marks {
        svg.push_str(&format!(
            r#"<rect class="chart__bar" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}" stroke="{fill}"/>"#,
            x = mark.x,
            y = mark.y,
            w = mark.width,
            h = mark.height,
            fill = mark.fill,
        ));
        svg.push_str(&format!(
            r#"<text class="chart__tick chart__tick--x" x="{x:.1}" y="{y:.1}">{label}</text>"#,
            x = mark.x + mark.width / 2.0,
            y = area.bottom() + 16.0,
            label = xml_escape(&mark.label),
        ));
    }
    svg.push_str(&axis_titles("Equipment Type", "Count"));
    svg.push_str("</svg>");
    svg
}

/// Render pressure vs temperature as an SVG document, one point per record.
#[must_use]
pub fn scatter_chart_svg(records: &[EquipmentRecord]) -> String {
    let area = PlotArea::standard();
    let pressures: Vec<f64> = records.iter().map(|r| r.pressure).collect();
    let temperatures: Vec<f64> = records.iter().map(|r| r.temperature).collect();
    let (x_min, x_max) = padded_range(&pressures);
    let (y_min, y_max) = padded_range(&temperatures);

    let mut svg = svg_open("Pressure vs Temperature Analysis");
    for tick in linear_ticks(x_min, x_max) {
        let x = area.x_at(fraction(tick, x_min, x_max));
        svg.push_str(&format!(
            r#"<line class="chart__grid" x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}"/>"#,
            y1 = area.top,
            y2 = area.bottom(),
        ));
        svg.push_str(&format!(
            r#"<text class="chart__tick chart__tick--x" x="{x:.1}" y="{y:.1}">{tick:.1}</text>"#,
            y = area.bottom() + 16.0,
        ));
    }
    for tick in linear_ticks(y_min, y_max) {
        let y = area.y_at(fraction(tick, y_min, y_max));
        svg.push_str(&format!(
            r#"<line class="chart__grid" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}"/>"#,
            x1 = area.left,
            x2 = area.right(),
        ));
        svg.push_str(&format!(
            r#"<text class="chart__tick chart__tick--y" x="{x:.1}" y="{ty:.1}">{tick:.1}</text>"#,
            x = area.left - 8.0,
            ty = y + 4.0,
        ));
    }
    for record in records {
        let cx = area.x_at(fraction(record.pressure, x_min, x_max));
        let cy = area.y_at(fraction(record.temperature, y_min, y_max));
        svg.push_str(&format!(
            r#"<circle class="chart__point" cx="{cx:.1}" cy="{cy:.1}" r="{POINT_RADIUS}" fill="{SCATTER_FILL}"/>"#
        ));
    }
    svg.push_str(&axis_titles("Pressure (bar)", "Temperature (\u{b0}C)"));
    svg.push_str("</svg>");
    svg
}

fn svg_open(title: &str) -> String {
    let mut svg = format!(
        r#"<svg class="chart__svg" viewBox="0 0 {VIEW_WIDTH} {VIEW_HEIGHT}" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMid meet" role="img">"#
    );
    svg.push_str(&format!(
        r#"<text class="chart__title" x="{x:.1}" y="20">{title}</text>"#,
        x = VIEW_WIDTH / 2.0,
        title = xml_escape(title),
    ));
    svg
}

fn axis_titles(x_title: &str, y_title: &str) -> String {
    let area = PlotArea::standard();
    let x_mid = area.left + area.width / 2.0;
    let y_mid = area.top + area.height / 2.0;
    format!(
        r#"<text class="chart__axis-title" x="{x_mid:.1}" y="{baseline:.1}">{x}</text><text class="chart__axis-title chart__axis-title--y" x="14" y="{y_mid:.1}" transform="rotate(-90 14 {y_mid:.1})">{y}</text>"#,
        baseline = VIEW_HEIGHT - 8.0,
        x = xml_escape(x_title),
        y = xml_escape(y_title),
    )
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
