use analytics::chart::{self, AxisTick, BarChart, LineChart};
use analytics::format::{abbreviate_count, group_thousands};
use analytics::models::Video;
use analytics::top_videos::top_video_bars;
use analytics::{aggregate_monthly, DEFAULT_TOP_N};
use yew::prelude::*;

const ACCENT: &str = "#ef4444";
const GRID: &str = "#e5e7eb";
const LABEL: &str = "#6b7280";

#[derive(Properties, PartialEq)]
pub struct VideoChartProps {
    pub videos: Vec<Video>,
}

fn tooltip(label: &str, value: u64) -> String {
    format!("{label}: {}回", group_thousands(value))
}

fn no_data() -> Html {
    html! {
        <div class="flex h-64 items-center justify-center text-sm text-gray-500">
            {"データがありません"}
        </div>
    }
}

fn y_axis(ticks: Vec<AxisTick>) -> Html {
    let right = chart::WIDTH - chart::MARGIN_RIGHT;
    html! {
        <>
        { for ticks.into_iter().map(|tick| html! {
            <g>
                <line x1={chart::MARGIN_LEFT.to_string()} x2={right.to_string()}
                      y1={tick.y.to_string()} y2={tick.y.to_string()}
                      stroke={GRID} stroke-dasharray="3 3" />
                <text x={(chart::MARGIN_LEFT - 6.0).to_string()} y={(tick.y + 4.0).to_string()}
                      font-size="11" text-anchor="end" fill={LABEL}>
                    { abbreviate_count(tick.value) }
                </text>
            </g>
        }) }
        </>
    }
}

/// Line chart of total views per publish month.
#[function_component(MonthlyViewsChart)]
pub fn monthly_views_chart(props: &VideoChartProps) -> Html {
    let line = use_memo(props.videos.clone(), |videos| {
        LineChart::from_buckets(&aggregate_monthly(videos))
    });

    if line.is_empty() {
        return no_data();
    }

    let label_y = chart::HEIGHT - 12.0;

    html! {
        <svg viewBox={chart::view_box()} xmlns="http://www.w3.org/2000/svg" class="h-auto w-full">
            { y_axis(line.y_ticks()) }
            <polyline points={line.polyline()} fill="none" stroke={ACCENT} stroke-width="2" />
            {
                for line.points.iter().map(|point| html! {
                    <g>
                        <circle cx={point.x.to_string()} cy={point.y.to_string()} r="4" fill={ACCENT}>
                            <title>{ tooltip(&point.label, point.value) }</title>
                        </circle>
                        <text x={point.x.to_string()} y={label_y.to_string()}
                              font-size="11" text-anchor="middle" fill={LABEL}>
                            { &point.label }
                        </text>
                    </g>
                })
            }
        </svg>
    }
}

/// Bar chart of the most viewed videos.
#[function_component(TopVideosChart)]
pub fn top_videos_chart(props: &VideoChartProps) -> Html {
    let bars = use_memo(props.videos.clone(), |videos| {
        BarChart::from_bars(&top_video_bars(videos, DEFAULT_TOP_N))
    });

    if bars.is_empty() {
        return no_data();
    }

    // Rotated labels hang below the plot, so this chart gets extra height.
    let label_y = chart::baseline_y() + 14.0;
    let view_box = format!("0 0 {} {}", chart::WIDTH, chart::HEIGHT + 120.0);

    html! {
        <svg viewBox={view_box} xmlns="http://www.w3.org/2000/svg" class="h-auto w-full">
            { y_axis(bars.y_ticks()) }
            {
                for bars.bars.iter().map(|bar| {
                    let label_x = bar.center_x();
                    html! {
                        <g>
                            <rect x={bar.x.to_string()} y={bar.y.to_string()}
                                  width={bar.width.to_string()} height={bar.height.to_string()}
                                  rx="4" fill={ACCENT}>
                                <title>{ tooltip(&bar.title, bar.value) }</title>
                            </rect>
                            <text x={label_x.to_string()} y={label_y.to_string()}
                                  font-size="11" text-anchor="end" fill={LABEL}
                                  transform={format!("rotate(-45 {label_x} {label_y})")}>
                                { &bar.label }
                            </text>
                        </g>
                    }
                })
            }
        </svg>
    }
}
