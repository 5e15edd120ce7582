//! SVG line and grouped-bar charts over month-labelled series

use leptos::prelude::*;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 400.0;
const PAD_LEFT: f64 = 84.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;
const GRID_STEPS: usize = 5;

const PLOT_WIDTH: f64 = WIDTH - PAD_LEFT - PAD_RIGHT;
const PLOT_HEIGHT: f64 = HEIGHT - PAD_TOP - PAD_BOTTOM;

/// One named, colored line or bar group; one value per label
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Round up to 1, 2 or 5 times a power of ten
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let step = match value / magnitude {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    };
    step * magnitude
}

/// Vertical value range, always including zero
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    lo: f64,
    hi: f64,
}

impl Scale {
    fn for_series(series: &[ChartSeries]) -> Self {
        let values = series.iter().flat_map(|s| s.values.iter().copied()).filter(|v| v.is_finite());
        let (min, max) = values.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        Self {
            lo: if min < 0.0 { -nice_ceiling(-min) } else { 0.0 },
            hi: nice_ceiling(max),
        }
    }

    fn y(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value.clamp(self.lo, self.hi) } else { 0.0 };
        PAD_TOP + PLOT_HEIGHT - (value - self.lo) / (self.hi - self.lo) * PLOT_HEIGHT
    }

    fn ticks(&self) -> Vec<f64> {
        (0..=GRID_STEPS)
            .map(|i| self.lo + (self.hi - self.lo) * i as f64 / GRID_STEPS as f64)
            .collect()
    }
}

fn band_width(count: usize) -> f64 {
    PLOT_WIDTH / count.max(1) as f64
}

fn x_center(index: usize, count: usize) -> f64 {
    PAD_LEFT + band_width(count) * (index as f64 + 0.5)
}

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

/// Hover text for one data point
fn tooltip(series: &str, label: &str, value: String) -> String {
    format!("{} {}: {}", label, series, value)
}

/// Horizontal grid with y tick labels and month labels along the bottom
fn axes(labels: &[&'static str], scale: Scale, y_format: fn(f64) -> String) -> impl IntoView + use<> {
    let count = labels.len();

    let grid = scale
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = scale.y(tick);
            view! {
                <g>
                    <line
                        x1=px(PAD_LEFT)
                        y1=px(y)
                        x2=px(WIDTH - PAD_RIGHT)
                        y2=px(y)
                        stroke="#eee"
                        stroke-dasharray="3 3"
                    />
                    <text x=px(PAD_LEFT - 8.0) y=px(y + 4.0) text-anchor="end" font-size="11" fill="#666">
                        {y_format(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let months = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    x=px(x_center(i, count))
                    y=px(HEIGHT - PAD_BOTTOM + 18.0)
                    text-anchor="middle"
                    font-size="11"
                    fill="#666"
                >
                    {*label}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart-axes">
            {grid}
            {months}
            <line
                x1=px(PAD_LEFT)
                y1=px(scale.y(0.0))
                x2=px(WIDTH - PAD_RIGHT)
                y2=px(scale.y(0.0))
                stroke="#666"
            />
        </g>
    }
}

fn legend(series: &[ChartSeries]) -> impl IntoView + use<> {
    let items = series
        .iter()
        .map(|s| {
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background: {}", s.color)></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    view! { <div class="chart-legend">{items}</div> }
}

/// One polyline with point markers per series.
/// `value_format` renders the hover text of each point.
#[component]
pub fn LineChart(
    labels: Vec<&'static str>,
    series: Vec<ChartSeries>,
    y_format: fn(f64) -> String,
    value_format: fn(f64) -> String,
) -> impl IntoView {
    let scale = Scale::for_series(&series);
    let count = labels.len();

    let lines = series
        .iter()
        .map(|s| {
            let points: Vec<(f64, f64)> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (x_center(i, count), scale.y(*v)))
                .collect();
            let path = points
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            let dots = points
                .into_iter()
                .zip(&s.values)
                .enumerate()
                .map(|(i, ((x, y), v))| {
                    let label = labels.get(i).copied().unwrap_or_default();
                    view! {
                        <circle cx=px(x) cy=px(y) r="4" fill=s.color>
                            <title>{tooltip(&s.name, label, value_format(*v))}</title>
                        </circle>
                    }
                })
                .collect_view();

            view! {
                <g>
                    <polyline points=path fill="none" stroke=s.color stroke-width="2" />
                    {dots}
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
                {axes(&labels, scale, y_format)}
                {lines}
            </svg>
            {legend(&series)}
        </div>
    }
}

/// Bars grouped by label, one bar per series within each group
#[component]
pub fn BarChart(
    labels: Vec<&'static str>,
    series: Vec<ChartSeries>,
    y_format: fn(f64) -> String,
    value_format: fn(f64) -> String,
) -> impl IntoView {
    let scale = Scale::for_series(&series);
    let count = labels.len();
    let band = band_width(count);
    let group_pad = band * 0.1;
    let bar_width = (band - 2.0 * group_pad) / series.len().max(1) as f64;
    let zero = scale.y(0.0);

    let bars = series
        .iter()
        .enumerate()
        .flat_map(|(j, s)| {
            let labels = &labels;
            s.values.iter().enumerate().map(move |(i, v)| {
                let top = scale.y(*v).min(zero);
                let height = (scale.y(*v) - zero).abs();
                let x = PAD_LEFT + band * i as f64 + group_pad + bar_width * j as f64;
                let label = labels.get(i).copied().unwrap_or_default();
                view! {
                    <rect x=px(x) y=px(top) width=px(bar_width) height=px(height) rx="3" fill=s.color>
                        <title>{tooltip(&s.name, label, value_format(*v))}</title>
                    </rect>
                }
            })
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
                {axes(&labels, scale, y_format)}
                <g>{bars}</g>
            </svg>
            {legend(&series)}
        </div>
    }
}
