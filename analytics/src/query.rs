use crate::timestamp::parse_filter_date;
use serde::{Deserialize, Serialize};

// Mirrors URLSearchParams: keys are only emitted for set values.
#[derive(Default)]
struct QueryBuilder {
    pairs: Vec<String>,
}

impl QueryBuilder {
    fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs
                .push(format!("{key}={}", urlencoding::encode(value)));
        }
        self
    }

    fn number(mut self, key: &str, value: Option<u64>) -> Self {
        if let Some(value) = value.filter(|v| *v > 0) {
            self.pairs.push(format!("{key}={value}"));
        }
        self
    }

    fn build(self) -> String {
        self.pairs.join("&")
    }
}

fn with_query(path: String, query: String) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelQuery {
    pub q: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ChannelQuery {
    pub fn to_query_string(&self) -> String {
        QueryBuilder::default()
            .text("q", self.q.as_deref())
            .number("limit", self.limit)
            .number("offset", self.offset)
            .build()
    }
}

/// Channel list state kept in the page URL (`/channels?q=...&page=2`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl ChannelListParams {
    pub fn search(text: &str) -> Self {
        let text = text.trim();
        Self {
            q: (!text.is_empty()).then(|| text.to_string()),
            page: None,
        }
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn search_text(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            q: self.q.clone(),
            page: (page > 1).then_some(page),
        }
    }

    pub fn to_query(&self, per_page: u64) -> ChannelQuery {
        ChannelQuery {
            q: self.q.clone(),
            limit: Some(per_page),
            offset: Some((self.page() - 1).saturating_mul(per_page)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSort {
    ViewsDesc,
    ViewsAsc,
    LikesDesc,
    CommentsDesc,
    #[default]
    DateDesc,
    DateAsc,
}

impl VideoSort {
    pub fn all_variants() -> Vec<Self> {
        vec![
            VideoSort::ViewsDesc,
            VideoSort::ViewsAsc,
            VideoSort::LikesDesc,
            VideoSort::CommentsDesc,
            VideoSort::DateDesc,
            VideoSort::DateAsc,
        ]
    }

    // Keys understood by the `sort` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            VideoSort::ViewsDesc => "views_desc",
            VideoSort::ViewsAsc => "views_asc",
            VideoSort::LikesDesc => "likes_desc",
            VideoSort::CommentsDesc => "comments_desc",
            VideoSort::DateDesc => "date_desc",
            VideoSort::DateAsc => "date_asc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all_variants().into_iter().find(|sort| sort.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoSort::ViewsDesc => "再生数（降順）",
            VideoSort::ViewsAsc => "再生数（昇順）",
            VideoSort::LikesDesc => "高評価数（降順）",
            VideoSort::CommentsDesc => "コメント数（降順）",
            VideoSort::DateDesc => "投稿日（新しい順）",
            VideoSort::DateAsc => "投稿日（古い順）",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoQuery {
    pub sort: Option<VideoSort>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub min_views: Option<u64>,
}

impl VideoQuery {
    pub fn to_query_string(&self) -> String {
        QueryBuilder::default()
            .text("sort", self.sort.as_ref().map(VideoSort::key))
            .number("limit", self.limit)
            .number("offset", self.offset)
            .text("from", self.from.as_deref())
            .text("to", self.to.as_deref())
            .number("minViews", self.min_views)
            .build()
    }
}

/// The video list's filter form, as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoFilter {
    pub sort: VideoSort,
    pub from: String,
    pub to: String,
    pub min_views: String,
}

impl VideoFilter {
    pub fn from_date(&self) -> Option<String> {
        parse_filter_date(&self.from).map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn to_date(&self) -> Option<String> {
        parse_filter_date(&self.to).map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Minimum view count, ignoring anything that is not a whole number.
    pub fn min_views(&self) -> Option<u64> {
        self.min_views.trim().parse::<u64>().ok()
    }

    pub fn to_query(&self, limit: u64, offset: u64) -> VideoQuery {
        VideoQuery {
            sort: Some(self.sort),
            limit: Some(limit),
            offset: Some(offset),
            from: self.from_date(),
            to: self.to_date(),
            min_views: self.min_views(),
        }
    }
}

pub fn import_channel_path() -> String {
    "/channels/import".to_string()
}

pub fn channels_path(query: &ChannelQuery) -> String {
    with_query("/channels".to_string(), query.to_query_string())
}

pub fn channel_path(channel_id: i64) -> String {
    format!("/channels/{channel_id}")
}

pub fn channel_videos_path(channel_id: i64, query: &VideoQuery) -> String {
    with_query(
        format!("/channels/{channel_id}/videos"),
        query.to_query_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_query_skips_unset_values() {
        assert_eq!(channels_path(&ChannelQuery::default()), "/channels");

        let query = ChannelQuery {
            q: Some("猫 & dogs".to_string()),
            limit: Some(20),
            offset: Some(0),
        };
        assert_eq!(
            channels_path(&query),
            "/channels?q=%E7%8C%AB%20%26%20dogs&limit=20"
        );
    }

    #[test]
    fn test_empty_search_text_is_dropped() {
        let query = ChannelQuery {
            q: Some(String::new()),
            limit: Some(20),
            offset: Some(40),
        };
        assert_eq!(query.to_query_string(), "limit=20&offset=40");
    }

    #[test]
    fn test_channel_list_params() {
        let params = ChannelListParams::search("  ゲーム実況 ");
        assert_eq!(params.search_text(), "ゲーム実況");
        assert_eq!(params.page(), 1);

        let third = params.with_page(3);
        assert_eq!(third.page, Some(3));
        assert_eq!(third.to_query(20).offset, Some(40));
        assert_eq!(third.with_page(1).page, None);

        let blank = ChannelListParams::search("   ");
        assert_eq!(blank.q, None);
        assert_eq!(blank.to_query(20).to_query_string(), "limit=20");
    }

    #[test]
    fn test_channel_list_params_zero_page() {
        let params = ChannelListParams {
            q: None,
            page: Some(0),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.to_query(20).offset, Some(0));
    }

    #[test]
    fn test_huge_page_from_url_saturates() {
        let params = ChannelListParams {
            q: None,
            page: Some(u64::MAX),
        };
        assert_eq!(params.to_query(20).offset, Some(u64::MAX));
    }

    #[test]
    fn test_video_query_order() {
        let query = VideoQuery {
            sort: Some(VideoSort::ViewsDesc),
            limit: Some(20),
            offset: Some(20),
            from: Some("2025-01-01".to_string()),
            to: Some("2025-03-31".to_string()),
            min_views: Some(1000),
        };
        assert_eq!(
            channel_videos_path(5, &query),
            "/channels/5/videos?sort=views_desc&limit=20&offset=20&from=2025-01-01&to=2025-03-31&minViews=1000"
        );
    }

    #[test]
    fn test_sort_keys_round_trip() {
        for sort in VideoSort::all_variants() {
            assert_eq!(VideoSort::from_key(sort.key()), Some(sort));
        }
        assert_eq!(VideoSort::from_key("published_desc"), None);
        assert_eq!(VideoSort::default(), VideoSort::DateDesc);
    }

    #[test]
    fn test_filter_drops_invalid_input() {
        let filter = VideoFilter {
            sort: VideoSort::DateAsc,
            from: "2025-02-30".to_string(),
            to: "2025-04-01".to_string(),
            min_views: "many".to_string(),
        };

        let query = filter.to_query(20, 0);
        assert_eq!(query.from, None);
        assert_eq!(query.to.as_deref(), Some("2025-04-01"));
        assert_eq!(query.min_views, None);
        assert_eq!(query.to_query_string(), "sort=date_asc&limit=20&to=2025-04-01");
    }

    #[test]
    fn test_filter_min_views() {
        let filter = VideoFilter {
            min_views: " 5000 ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.min_views(), Some(5000));
        assert_eq!(
            filter.to_query(20, 40).to_query_string(),
            "sort=date_desc&limit=20&offset=40&minViews=5000"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(import_channel_path(), "/channels/import");
        assert_eq!(channel_path(42), "/channels/42");
        assert_eq!(channel_videos_path(42, &VideoQuery::default()), "/channels/42/videos");
    }
}
