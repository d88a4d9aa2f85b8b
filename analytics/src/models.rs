use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: i64,
    pub youtube_channel_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub subscriber_count: Option<i64>,
    #[serde(default)]
    pub video_count: Option<i64>,
    #[serde(default)]
    pub view_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub total_views: i64,
    pub total_videos: i64,
    pub last_fetched_at: String,
}

/// Returned by both the import endpoint and the channel detail endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChannelImportResponse {
    pub channel: Channel,
    pub summary: ChannelSummary,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelImportRequest {
    pub channel_url_or_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListItem {
    pub id: i64,
    pub youtube_channel_id: String,
    pub title: String,
    #[serde(default)]
    pub subscriber_count: Option<i64>,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub video_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListResponse {
    pub items: Vec<ChannelListItem>,
    pub total_count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoStats {
    pub view_count: i64,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub comment_count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub youtube_video_id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub published_at: String,
    #[serde(default)]
    pub duration_sec: Option<i64>,
    pub latest_stats: VideoStats,
}

impl Video {
    /// View count with negative backend values clamped to zero.
    pub fn views(&self) -> u64 {
        self.latest_stats.view_count.max(0) as u64
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.youtube_video_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub items: Vec<Video>,
    pub total_count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorResponse {
    pub error: Option<ApiErrorDetail>,
}
