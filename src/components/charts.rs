//! Inline SVG Charts
//!
//! The dashboard only draws small fixed-size charts over a handful of
//! fixture points, so the markup is generated directly instead of pulling
//! in a charting dependency.

use leptos::prelude::*;

use crate::models::GoalSlice;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 160.0;
const PAD: f64 = 8.0;

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max).max(1.0)
}

/// Polyline points for one series scaled into the chart box
fn polyline_points(values: &[f64], max: f64) -> String {
    let n = values.len().max(2);
    let step = (WIDTH - 2.0 * PAD) / (n as f64 - 1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + step * i as f64;
            let y = HEIGHT - PAD - (v / max) * (HEIGHT - 2.0 * PAD);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pie slice path covering [start, end) as fractions of a full turn,
/// starting at twelve o'clock
fn arc_path(start: f64, end: f64) -> String {
    let (cx, cy, r) = (80.0, 80.0, 72.0);
    let angle = |frac: f64| frac * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    let (x0, y0) = (cx + r * angle(start).cos(), cy + r * angle(start).sin());
    let (x1, y1) = (cx + r * angle(end).cos(), cy + r * angle(end).sin());
    let large = if end - start > 0.5 { 1 } else { 0 };
    format!("M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{r:.1},{r:.1} 0 {large} 1 {x1:.1},{y1:.1} Z")
}

#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>) -> impl IntoView {
    let max = max_of(&values);
    let slot = (WIDTH - 2.0 * PAD) / values.len().max(1) as f64;
    let bar_w = slot * 0.6;
    view! {
        <svg class="chart" width=WIDTH height={HEIGHT + 18.0}>
            {values
                .iter()
                .zip(labels.iter())
                .enumerate()
                .map(|(i, (v, label))| {
                    let h = (v / max) * (HEIGHT - 2.0 * PAD);
                    let x = PAD + slot * i as f64 + (slot - bar_w) / 2.0;
                    view! {
                        <g>
                            <rect
                                x=x
                                y={HEIGHT - PAD - h}
                                width=bar_w
                                height=h
                                rx="2"
                                fill="#8b5cf6"
                            ></rect>
                            <text x={x + bar_w / 2.0} y={HEIGHT + 12.0} class="chart-label">
                                {label.clone()}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// One polyline per (color, values) series over a shared x axis
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<(&'static str, Vec<f64>)>) -> impl IntoView {
    let all: Vec<f64> = series.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    let max = max_of(&all);
    let step = (WIDTH - 2.0 * PAD) / (labels.len().max(2) as f64 - 1.0);
    view! {
        <svg class="chart" width=WIDTH height={HEIGHT + 18.0}>
            {series
                .iter()
                .map(|(color, values)| {
                    view! {
                        <polyline
                            points=polyline_points(values, max)
                            fill="none"
                            stroke=*color
                            stroke-width="2"
                        ></polyline>
                    }
                })
                .collect_view()}
            {labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <text x={PAD + step * i as f64} y={HEIGHT + 12.0} class="chart-label">
                            {label.clone()}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn PieChart(slices: Vec<GoalSlice>) -> impl IntoView {
    let total: f64 = slices.iter().map(|s| s.value as f64).sum::<f64>().max(1.0);
    let mut start = 0.0;
    let arcs: Vec<_> = slices
        .iter()
        .map(|s| {
            let end = start + s.value as f64 / total;
            let d = arc_path(start, end);
            start = end;
            (d, s.clone())
        })
        .collect();
    view! {
        <div class="pie-chart">
            <svg width="160" height="160">
                {arcs
                    .iter()
                    .map(|(d, slice)| {
                        view! { <path d=d.clone() fill=slice.color.clone()></path> }
                    })
                    .collect_view()}
            </svg>
            <ul class="pie-legend">
                {arcs
                    .into_iter()
                    .map(|(_, slice)| {
                        view! {
                            <li>
                                <span
                                    class="legend-dot"
                                    style=format!("background:{}", slice.color)
                                ></span>
                                {format!("{}: {}%", slice.name, slice.value)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_emits_one_point_per_value() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 3.0);
        assert_eq!(points.split(' ').count(), 3);
        // the max value touches the top padding line
        assert!(points.ends_with(&format!("{PAD:.1}")));
    }

    #[test]
    fn max_of_never_returns_zero() {
        assert_eq!(max_of(&[]), 1.0);
        assert_eq!(max_of(&[0.0, 0.0]), 1.0);
        assert_eq!(max_of(&[2.0, 5.0]), 5.0);
    }

    #[test]
    fn arc_flags_flip_past_half_turn() {
        assert!(arc_path(0.0, 0.25).contains(" 0 1 "));
        assert!(arc_path(0.0, 0.75).contains(" 1 1 "));
        assert!(arc_path(0.0, 0.25).starts_with("M80.0,80.0"));
    }
}
