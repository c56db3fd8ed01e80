//! Chart widgets drawn as plain SVG. Each takes owned data and renders
//! static markup; reactivity stays with the caller.

use leptos::*;

pub const PALETTE: [&str; 8] = [
    "#2563eb", "#16a34a", "#d97706", "#dc2626", "#7c3aed", "#0891b2", "#be185d", "#4d7c0f",
];

pub fn palette_color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

#[derive(Clone)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: &'static str, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }
}

fn legend(series: &[Series]) -> impl IntoView {
    let items = series
        .iter()
        .map(|s| {
            let style = format!("background:{}", s.color);
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style=style></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();
    view! { <div class="legend">{items}</div> }
}

/// Grouped vertical bars, one group per label.
#[component]
pub fn BarChart(labels: Vec<String>, series: Vec<Series>) -> impl IntoView {
    const W: f64 = 420.0;
    const H: f64 = 230.0;
    const TOP: f64 = 12.0;
    const BOTTOM: f64 = 26.0;

    if labels.is_empty() || series.iter().all(|s| s.values.is_empty()) {
        return view! { <p class="stat-sub">"No data yet"</p> }.into_view();
    }

    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let groups = labels.len() as f64;
    let slot = W / groups;
    let group_width = slot * 0.72;
    let bar_width = group_width / series.len() as f64;
    let plot_height = H - TOP - BOTTOM;

    let bars = labels
        .iter()
        .enumerate()
        .flat_map(|(i, label)| {
            let series = &series;
            let label = label.clone();
            (0..series.len()).map(move |j| {
                let s = &series[j];
                let value = s.values.get(i).copied().unwrap_or(0.0);
                let height = value / max * plot_height;
                let x = i as f64 * slot + (slot - group_width) / 2.0 + j as f64 * bar_width;
                let y = TOP + plot_height - height;
                let tip = format!("{} ({}): {value}", s.name, label);
                view! {
                    <rect
                        x=format!("{x:.1}")
                        y=format!("{y:.1}")
                        width=format!("{:.1}", bar_width.max(1.0) - 1.0)
                        height=format!("{height:.1}")
                        fill=s.color
                        rx="2"
                    >
                        <title>{tip}</title>
                    </rect>
                }
            })
        })
        .collect_view();

    let x_labels = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = i as f64 * slot + slot / 2.0;
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{:.1}", H - 8.0)
                    text-anchor="middle"
                    font-size="10"
                    fill="#6b7280"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let baseline = H - BOTTOM;
    view! {
        <div>
            <svg viewBox=format!("0 0 {W} {H}") role="img">
                <line
                    x1="0"
                    y1=format!("{baseline:.1}")
                    x2=format!("{W}")
                    y2=format!("{baseline:.1}")
                    stroke="#e5e7eb"
                />
                {bars}
                {x_labels}
            </svg>
            {legend(&series)}
        </div>
    }
    .into_view()
}

/// Proportional ring, one slice per label/value pair.
#[component]
pub fn DonutChart(slices: Vec<(String, f64)>) -> impl IntoView {
    const R: f64 = 62.0;
    const C: f64 = 180.0;
    const STROKE: f64 = 30.0;

    let total: f64 = slices.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return view! { <p class="stat-sub">"No data yet"</p> }.into_view();
    }

    let circumference = 2.0 * std::f64::consts::PI * R;
    let mut offset = 0.0;
    let rings = slices
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let share = value.max(0.0) / total;
            let filled = share * circumference;
            let dasharray = format!("{filled:.2} {:.2}", circumference - filled);
            let dashoffset = format!("{:.2}", -offset);
            offset += filled;
            let tip = format!("{label}: {value} ({:.0}%)", share * 100.0);
            view! {
                <circle
                    cx=format!("{C}")
                    cy=format!("{C}")
                    r=format!("{R}")
                    fill="none"
                    stroke=palette_color(i)
                    stroke-width=format!("{STROKE}")
                    stroke-dasharray=dasharray
                    stroke-dashoffset=dashoffset
                >
                    <title>{tip}</title>
                </circle>
            }
        })
        .collect_view();

    let series: Vec<Series> = slices
        .iter()
        .enumerate()
        .map(|(i, (label, _))| Series::new(label.clone(), palette_color(i), Vec::new()))
        .collect();

    view! {
        <div>
            <svg
                viewBox=format!("0 0 {} {}", C * 2.0, C * 2.0)
                role="img"
                style="max-width:240px;display:block;margin:0 auto"
            >
                // Slices start at 12 o'clock.
                <g transform=format!("rotate(-90 {C} {C})")>{rings}</g>
            </svg>
            {legend(&series)}
        </div>
    }
    .into_view()
}

/// Line chart over shared x labels.
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<Series>) -> impl IntoView {
    const W: f64 = 420.0;
    const H: f64 = 230.0;
    const TOP: f64 = 12.0;
    const BOTTOM: f64 = 26.0;

    if labels.len() < 2 || series.iter().all(|s| s.values.is_empty()) {
        return view! { <p class="stat-sub">"No data yet"</p> }.into_view();
    }

    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let step = W / (labels.len() - 1) as f64;
    let plot_height = H - TOP - BOTTOM;

    let lines = series
        .iter()
        .map(|s| {
            let points = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = i as f64 * step;
                    let y = TOP + plot_height - (v / max * plot_height);
                    format!("{x:.1},{y:.1}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            view! {
                <polyline
                    points=points
                    fill="none"
                    stroke=s.color
                    stroke-width="2.5"
                    stroke-linejoin="round"
                />
            }
        })
        .collect_view();

    let x_labels = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = i as f64 * step;
            let anchor = if i == 0 {
                "start"
            } else if i + 1 == labels.len() {
                "end"
            } else {
                "middle"
            };
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{:.1}", H - 8.0)
                    text-anchor=anchor
                    font-size="10"
                    fill="#6b7280"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let baseline = H - BOTTOM;
    view! {
        <div>
            <svg viewBox=format!("0 0 {W} {H}") role="img">
                <line
                    x1="0"
                    y1=format!("{baseline:.1}")
                    x2=format!("{W}")
                    y2=format!("{baseline:.1}")
                    stroke="#e5e7eb"
                />
                {lines}
                {x_labels}
            </svg>
            {legend(&series)}
        </div>
    }
    .into_view()
}
