use crate::models::{CategorizedVideo, PostingWindow};
use crate::utils::{compare_desc_float, parse_published_at};
use chrono::{Local, TimeZone, Timelike};
use std::collections::BTreeMap;

const MAX_POSTING_WINDOWS: usize = 5;

#[derive(Debug, Default)]
struct HourBucket {
    count: usize,
    engagement_sum: f64,
}

/// Best publishing hours by average engagement, using the server's local
/// time zone for the hour of day.
pub fn analyze_posting_times(videos: &[CategorizedVideo]) -> Vec<PostingWindow> {
    analyze_posting_times_in(videos, &Local)
}

pub fn analyze_posting_times_in<Tz: TimeZone>(videos: &[CategorizedVideo], tz: &Tz) -> Vec<PostingWindow> {
    let mut buckets: BTreeMap<u32, HourBucket> = BTreeMap::new();

    for video in videos {
        // Records without a readable timestamp have no hour to land in.
        let Some(published) = parse_published_at(&video.published_at) else {
            continue;
        };
        let hour = published.with_timezone(tz).hour();

        let bucket = buckets.entry(hour).or_default();
        bucket.count += 1;
        bucket.engagement_sum += video.metrics.engagement_rate;
    }

    let mut windows: Vec<PostingWindow> = buckets
        .into_iter()
        .map(|(hour, bucket)| PostingWindow {
            hour,
            avg_engagement: bucket.engagement_sum / bucket.count as f64,
            video_count: bucket.count,
        })
        .collect();

    windows.sort_by(|a, b| compare_desc_float(a.avg_engagement, b.avg_engagement));
    windows.truncate(MAX_POSTING_WINDOWS);
    windows
}
