//! SVG geometry for the channel charts. Coordinates are in viewBox units on a
//! fixed canvas; the frontend scales the SVG to its container.

use crate::aggregate::MonthlyBucket;
use crate::top_videos::TopVideoBar;
use std::fmt::Write;

pub const WIDTH: f64 = 600.0;
pub const HEIGHT: f64 = 260.0;
pub const MARGIN_LEFT: f64 = 60.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
const Y_TICKS: u64 = 4;

pub fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

pub fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

pub fn view_box() -> String {
    format!("0 0 {WIDTH} {HEIGHT}")
}

pub fn baseline_y() -> f64 {
    MARGIN_TOP + plot_height()
}

// Zero maps onto the baseline; an all-zero series still gets a unit scale.
fn scale_y(value: u64, max_value: u64) -> f64 {
    let max_value = max_value.max(1) as f64;
    baseline_y() - (value as f64 / max_value) * plot_height()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub value: u64,
}

/// Evenly spaced y axis ticks from zero up to `max_value`.
pub fn y_ticks(max_value: u64) -> Vec<AxisTick> {
    let top = max_value.max(1);
    (0..=Y_TICKS)
        .map(|i| {
            let value = (u128::from(top) * u128::from(i) / u128::from(Y_TICKS)) as u64;
            AxisTick {
                y: scale_y(value, top),
                value,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    pub points: Vec<ChartPoint>,
    pub max_value: u64,
}

impl LineChart {
    pub fn from_buckets(buckets: &[MonthlyBucket]) -> Self {
        let max_value = buckets.iter().map(|b| b.total_views).max().unwrap_or(0);
        let span = (buckets.len().saturating_sub(1)).max(1) as f64;

        let points = buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let x = if buckets.len() == 1 {
                    MARGIN_LEFT + plot_width() / 2.0
                } else {
                    MARGIN_LEFT + (i as f64 / span) * plot_width()
                };
                ChartPoint {
                    x,
                    y: scale_y(bucket.total_views, max_value),
                    label: bucket.month_label.clone(),
                    value: bucket.total_views,
                }
            })
            .collect();

        Self { points, max_value }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `points` attribute for an SVG `<polyline>`.
    pub fn polyline(&self) -> String {
        let mut points = String::new();
        for point in &self.points {
            if !points.is_empty() {
                points.push(' ');
            }
            let _ = write!(points, "{:.1},{:.1}", point.x, point.y);
        }
        points
    }

    pub fn y_ticks(&self) -> Vec<AxisTick> {
        y_ticks(self.max_value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub title: String,
    pub value: u64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChart {
    pub bars: Vec<BarRect>,
    pub max_value: u64,
}

impl BarChart {
    pub fn from_bars(bars: &[TopVideoBar]) -> Self {
        let max_value = bars.iter().map(|b| b.views).max().unwrap_or(0);
        let slot = plot_width() / bars.len().max(1) as f64;
        let gap = (slot * 0.2).min(12.0);

        let bars = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let y = scale_y(bar.views, max_value);
                BarRect {
                    x: MARGIN_LEFT + i as f64 * slot + gap / 2.0,
                    y,
                    width: (slot - gap).max(0.5),
                    height: baseline_y() - y,
                    label: bar.label.clone(),
                    title: bar.title.clone(),
                    value: bar.views,
                }
            })
            .collect();

        Self { bars, max_value }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn y_ticks(&self) -> Vec<AxisTick> {
        y_ticks(self.max_value)
    }
}
