use crate::models::{CategorizedVideo, TrendingTopic};
use std::collections::HashMap;

/// Tags of this many characters or fewer are ignored.
const MIN_TAG_CHARS: usize = 3;
const MIN_OCCURRENCES: usize = 2;
const MAX_TOPICS: usize = 20;

struct TopicTally {
    topic: String,
    count: usize,
    engagement_sum: f64,
}

/// Ranks normalized tags by how often they occur. A video's engagement rate
/// is added once per tag occurrence, so the average is over occurrences.
pub fn extract_trending_topics(videos: &[CategorizedVideo]) -> Vec<TrendingTopic> {
    // Tallies stay in first-seen order; the index map points into them.
    let mut tallies: Vec<TopicTally> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for video in videos {
        for tag in &video.tags {
            let normalized = tag.to_lowercase().trim().to_string();
            if normalized.chars().count() <= MIN_TAG_CHARS {
                continue;
            }

            let slot = *index.entry(normalized.clone()).or_insert_with(|| {
                tallies.push(TopicTally {
                    topic: normalized,
                    count: 0,
                    engagement_sum: 0.0,
                });
                tallies.len() - 1
            });

            let tally = &mut tallies[slot];
            tally.count += 1;
            tally.engagement_sum += video.metrics.engagement_rate;
        }
    }

    let mut topics: Vec<TrendingTopic> = tallies
        .into_iter()
        .filter(|tally| tally.count >= MIN_OCCURRENCES)
        .map(|tally| TrendingTopic {
            avg_engagement: tally.engagement_sum / tally.count as f64,
            count: tally.count,
            topic: tally.topic,
        })
        .collect();

    topics.sort_by(|a, b| b.count.cmp(&a.count));
    topics.truncate(MAX_TOPICS);
    topics
}
