use crate::models::Video;

pub const DEFAULT_TOP_N: usize = 10;
pub const CHART_TITLE_MAX_CHARS: usize = 30;

/// The `n` most viewed videos, highest first.
///
/// Works on a copy; equal view counts keep their input order.
pub fn top_by_views(videos: &[Video], n: usize) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    sorted.sort_by(|a, b| b.views().cmp(&a.views()));
    sorted.truncate(n);
    sorted
}

/// Shorten a title to `max_chars` characters, appending `...` when cut.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &title[..byte_idx]),
        None => title.to_string(),
    }
}

/// One bar of the top videos chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopVideoBar {
    pub label: String,
    pub title: String,
    pub views: u64,
}

pub fn top_video_bars(videos: &[Video], n: usize) -> Vec<TopVideoBar> {
    top_by_views(videos, n)
        .into_iter()
        .map(|video| TopVideoBar {
            label: truncate_title(&video.title, CHART_TITLE_MAX_CHARS),
            views: video.views(),
            title: video.title,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoStats;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn video(id: i64, title: &str, views: i64) -> Video {
        Video {
            id,
            youtube_video_id: format!("vid{id:08}"),
            title: title.to_string(),
            thumbnail_url: None,
            published_at: "2025-06-01T00:00:00Z".to_string(),
            duration_sec: None,
            latest_stats: VideoStats {
                view_count: views,
                like_count: Some(1),
                comment_count: Some(1),
            },
        }
    }

    fn ids(videos: &[Video]) -> Vec<i64> {
        videos.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_input_is_not_mutated() {
        let videos = vec![video(1, "a", 5), video(2, "b", 50), video(3, "c", 20)];
        let before = videos.clone();

        let top = top_by_views(&videos, 2);
        assert_eq!(ids(&top), vec![2, 3]);
        assert_eq!(videos, before);
    }

    #[test]
    fn test_fifteen_videos_keeps_top_ten() {
        let videos: Vec<Video> = (0..15)
            .map(|i| video(i, "v", (i * 37 % 15) * 100))
            .collect();

        let top = top_by_views(&videos, 10);
        assert_eq!(top.len(), 10);

        let min_kept = top.iter().map(Video::views).min().unwrap();
        let top_ids = ids(&top);
        for excluded in videos.iter().filter(|v| !top_ids.contains(&v.id)) {
            assert!(excluded.views() <= min_kept);
        }
    }

    #[test]
    fn test_n_larger_than_input() {
        let videos = vec![video(1, "a", 1), video(2, "b", 3)];
        assert_eq!(ids(&top_by_views(&videos, 10)), vec![2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let videos = vec![video(1, "a", 10), video(2, "b", 30), video(3, "c", 10), video(4, "d", 10)];
        assert_eq!(ids(&top_by_views(&videos, 4)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(top_by_views(&[], DEFAULT_TOP_N).is_empty());
        assert!(top_video_bars(&[], DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("short", 30), "short");
        assert_eq!(truncate_title(&"x".repeat(30), 30), "x".repeat(30));
        assert_eq!(truncate_title(&"x".repeat(31), 30), format!("{}...", "x".repeat(30)));
        assert_eq!(truncate_title("動画タイトルがとても長い場合の表示", 6), "動画タイトル...");
    }

    #[test]
    fn test_top_video_bars_truncate_labels() {
        let long_title = "A very long livestream title that keeps going";
        let videos = vec![video(1, long_title, 900), video(2, "Short", 1_200)];

        let bars = top_video_bars(&videos, DEFAULT_TOP_N);
        assert_eq!(bars[0].label, "Short");
        assert_eq!(bars[1].label, "A very long livestream title t...");
        assert_eq!(bars[1].title, long_title);
        assert_eq!(bars[1].views, 900);
    }

    proptest! {
        #[test]
        fn prop_sorted_descending_and_bounded(
            views in prop::collection::vec(0i64..1_000_000, 0..40),
            n in 0usize..50,
        ) {
            let videos: Vec<Video> = views.iter().enumerate().map(|(i, v)| video(i as i64, "t", *v)).collect();
            let top = top_by_views(&videos, n);
            prop_assert_eq!(top.len(), n.min(videos.len()));
            prop_assert!(top.windows(2).all(|w| w[0].views() >= w[1].views()));
        }
    }
}
