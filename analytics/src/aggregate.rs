use crate::models::Video;
use crate::timestamp::parse_timestamp;
use chrono::Datelike;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Total views of the videos published in one calendar month (UTC).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// `YYYY-MM`, fixed width so lexical order is chronological.
    pub month_key: String,
    pub month_label: String,
    pub total_views: u64,
}

fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

fn month_label(year: i32, month: u32) -> String {
    format!("{year}年{month}月")
}

/// Group videos by publish month and sum their views, oldest month first.
///
/// Videos whose `published_at` cannot be parsed are skipped with a warning.
/// Sums are `u64` and saturate instead of wrapping.
pub fn aggregate_monthly(videos: &[Video]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<String, MonthlyBucket> = BTreeMap::new();

    for video in videos {
        let Some(published) = parse_timestamp(&video.published_at) else {
            warn!(
                "Skipping video {} with unreadable publish date '{}'",
                video.id, video.published_at
            );
            continue;
        };

        let (year, month) = (published.year(), published.month());
        let bucket = buckets
            .entry(month_key(year, month))
            .or_insert_with_key(|key| MonthlyBucket {
                month_key: key.clone(),
                month_label: month_label(year, month),
                total_views: 0,
            });
        bucket.total_views = bucket.total_views.saturating_add(video.views());
    }

    debug!(
        "Aggregated {} videos into {} monthly buckets",
        videos.len(),
        buckets.len()
    );

    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoStats;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn video(id: i64, published_at: &str, views: i64) -> Video {
        Video {
            id,
            youtube_video_id: format!("vid{id:08}"),
            title: format!("Video {id}"),
            thumbnail_url: None,
            published_at: published_at.to_string(),
            duration_sec: Some(300),
            latest_stats: VideoStats {
                view_count: views,
                like_count: None,
                comment_count: None,
            },
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_monthly(&[]).is_empty());
    }

    #[test]
    fn test_same_month_sums() {
        let videos = vec![
            video(1, "2025-11-02T08:00:00Z", 100),
            video(2, "2025-11-28T22:10:00Z", 200),
        ];

        assert_eq!(
            aggregate_monthly(&videos),
            vec![MonthlyBucket {
                month_key: "2025-11".to_string(),
                month_label: "2025年11月".to_string(),
                total_views: 300,
            }]
        );
    }

    #[test]
    fn test_three_months_sorted_ascending() {
        let videos = vec![
            video(1, "2025-03-10T00:00:00Z", 5),
            video(2, "2024-12-01T00:00:00Z", 7),
            video(3, "2025-01-15T00:00:00Z", 11),
            video(4, "2025-03-31T23:59:59Z", 1),
        ];

        let buckets = aggregate_monthly(&videos);
        let keys: Vec<&str> = buckets.iter().map(|b| b.month_key.as_str()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);
        assert_eq!(buckets[2].total_views, 6);
        assert_eq!(buckets[0].month_label, "2024年12月");
    }

    #[test]
    fn test_month_follows_utc() {
        // 2025-12-01 08:00 in Tokyo is still November in UTC.
        let videos = vec![video(1, "2025-12-01T08:00:00+09:00", 10)];
        assert_eq!(aggregate_monthly(&videos)[0].month_key, "2025-11");
    }

    #[test]
    fn test_unparseable_date_is_skipped() {
        let videos = vec![video(1, "soon", 10), video(2, "2025-02-01T00:00:00Z", 4)];
        let buckets = aggregate_monthly(&videos);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total_views, 4);
    }

    #[test]
    fn test_large_counts_keep_precision() {
        let videos = vec![
            video(1, "2025-05-01T00:00:00Z", 9_007_199_254_740_993),
            video(2, "2025-05-02T00:00:00Z", 1),
        ];
        assert_eq!(aggregate_monthly(&videos)[0].total_views, 9_007_199_254_740_994);
    }

    proptest! {
        #[test]
        fn prop_total_views_preserved(
            entries in prop::collection::vec((2000i32..2030, 1u32..=12, 0i64..10_000_000), 0..60)
        ) {
            let videos: Vec<Video> = entries
                .iter()
                .enumerate()
                .map(|(i, (y, m, v))| video(i as i64, &format!("{y}-{m:02}-15T12:00:00Z"), *v))
                .collect();

            let buckets = aggregate_monthly(&videos);
            let expected: u64 = entries.iter().map(|(_, _, v)| *v as u64).sum();
            prop_assert_eq!(buckets.iter().map(|b| b.total_views).sum::<u64>(), expected);
            prop_assert!(buckets.windows(2).all(|w| w[0].month_key < w[1].month_key));
        }
    }
}
