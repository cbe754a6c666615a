use crate::models::{CategorizedVideo, RawVideoRecord, VideoMetrics};
use crate::utils::{parse_iso8601_duration_to_seconds, parse_published_at};
use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Derives engagement metrics as of `now`. Every rate is 0 when the record
/// has no views; values above 100% are kept as they are.
pub fn calculate_engagement_metrics(record: &RawVideoRecord, now: DateTime<Utc>) -> VideoMetrics {
    let views = record.view_count;
    let likes = record.like_count;
    let comments = record.comment_count;

    // Unparseable timestamps count as age 0 so no NaN leaks out.
    let age_in_hours = parse_published_at(&record.published_at)
        .map(|published| (now - published).num_milliseconds() as f64 / MILLIS_PER_HOUR)
        .unwrap_or(0.0);

    let percent_of_views = |count: u64| -> f64 {
        if views > 0 {
            count as f64 / views as f64 * 100.0
        } else {
            0.0
        }
    };

    VideoMetrics {
        views,
        likes,
        comments,
        age_in_hours,
        engagement_rate: percent_of_views(likes.saturating_add(comments)),
        like_ratio: percent_of_views(likes),
        views_per_hour: if age_in_hours > 0.0 {
            views as f64 / age_in_hours
        } else {
            0.0
        },
        comment_rate: percent_of_views(comments),
    }
}

pub fn enrich_video(record: RawVideoRecord, now: DateTime<Utc>) -> CategorizedVideo {
    let metrics = calculate_engagement_metrics(&record, now);
    let duration = parse_iso8601_duration_to_seconds(&record.duration);

    CategorizedVideo {
        id: record.id,
        title: record.title,
        description: record.description,
        channel: record.channel,
        category_id: record.category_id,
        published_at: record.published_at,
        thumbnail: record.thumbnail,
        url: record.url,
        tags: record.tags,
        duration,
        metrics,
    }
}

pub fn enrich_videos(records: Vec<RawVideoRecord>, now: DateTime<Utc>) -> Vec<CategorizedVideo> {
    records
        .into_iter()
        .map(|record| enrich_video(record, now))
        .collect()
}
