use crate::models::{Channel, ChannelListItem, Video};
use crate::timestamp::parse_timestamp;
use chrono::Datelike;

/// Placeholder shown for missing or unreadable values.
pub const MISSING: &str = "-";

// Rounds `value / divisor` to tenths, half up, without going through floats.
fn tenths(value: u64, divisor: u64) -> String {
    let step = u128::from(divisor / 10);
    let rounded = (u128::from(value) + step / 2) / step;
    format!("{}.{}", rounded / 10, rounded % 10)
}

/// Abbreviate a count for display: `1234567 -> "1.2M"`, `1250 -> "1.3K"`.
///
/// Missing and negative values render as `"0"`.
pub fn format_count(count: Option<i64>) -> String {
    abbreviate_count(count.unwrap_or(0).max(0) as u64)
}

/// [`format_count`] for totals that are already unsigned, such as summed views.
pub fn abbreviate_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", tenths(n, 1_000_000))
    } else if n >= 1_000 {
        format!("{}K", tenths(n, 1_000))
    } else {
        n.to_string()
    }
}

pub fn format_grouped(count: Option<i64>) -> String {
    group_thousands(count.unwrap_or(0).max(0) as u64)
}

// Formats each x1000 step
pub fn group_thousands(n: u64) -> String {
    let num_str = n.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `H:MM:SS` once the duration reaches an hour, `M:SS` below that.
pub fn format_duration(seconds: Option<i64>) -> String {
    let Some(seconds) = seconds else {
        return MISSING.to_string();
    };
    let seconds = seconds.max(0);

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// `MM/DD HH:MM` in UTC.
pub fn format_short_date(date: Option<&str>) -> String {
    date.and_then(parse_timestamp)
        .map(|dt| dt.format("%m/%d %H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `YYYY/M/D` in UTC, the way dates read in the video list.
pub fn format_list_date(date: Option<&str>) -> String {
    date.and_then(parse_timestamp)
        .map(|dt| format!("{}/{}/{}", dt.year(), dt.month(), dt.day()))
        .unwrap_or_else(|| MISSING.to_string())
}

/// A video as shown in list cards.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRow {
    pub id: String,
    pub title: String,
    pub published_at: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub duration: String,
    pub thumbnail_url: Option<String>,
    pub watch_url: String,
}

impl From<&Video> for VideoRow {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title.clone(),
            published_at: format_list_date(Some(&video.published_at)),
            views: format_count(Some(video.latest_stats.view_count)),
            likes: format_count(video.latest_stats.like_count),
            comments: format_count(video.latest_stats.comment_count),
            duration: format_duration(video.duration_sec),
            thumbnail_url: video.thumbnail_url.clone(),
            watch_url: video.watch_url(),
        }
    }
}

/// A channel as shown in the channel table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRow {
    pub id: i64,
    pub name: String,
    pub subscribers: String,
    pub total_views: String,
    pub videos: String,
}

impl From<&ChannelListItem> for ChannelRow {
    fn from(channel: &ChannelListItem) -> Self {
        Self {
            id: channel.id,
            name: channel.title.clone(),
            subscribers: format_grouped(channel.subscriber_count),
            total_views: format_grouped(channel.view_count),
            videos: format_grouped(channel.video_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMetric {
    pub label: &'static str,
    pub value: String,
    pub delta: String,
}

impl ChannelMetric {
    pub fn has_delta(&self) -> bool {
        self.delta != MISSING
    }
}

/// Headline cards on the channel detail page.
pub fn channel_metrics(channel: &Channel) -> Vec<ChannelMetric> {
    vec![
        ChannelMetric {
            label: "総再生回数",
            value: format_count(channel.view_count),
            delta: MISSING.to_string(),
        },
        ChannelMetric {
            label: "登録者数",
            value: format_count(channel.subscriber_count),
            delta: MISSING.to_string(),
        },
        ChannelMetric {
            label: "動画数",
            value: format!("{}本", channel.video_count.unwrap_or(0).max(0)),
            delta: MISSING.to_string(),
        },
    ]
}
