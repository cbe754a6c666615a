#![allow(dead_code)]

use chrono::{Duration, Utc};
use rocket::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use trends_backend::error::SourceError;
use trends_backend::models::RawVideoRecord;
use trends_backend::services::youtube::VideoSource;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub region_code: String,
    pub max_results: u32,
    pub category_id: Option<String>,
}

/// In-memory stand-in for the YouTube Data API. Responses are keyed by the
/// category filter the engine passes; unknown filters return an empty list.
#[derive(Default)]
pub struct MockVideoSource {
    responses: HashMap<Option<String>, Vec<RawVideoRecord>>,
    failing: HashSet<Option<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockVideoSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_videos(mut self, category_id: Option<&str>, videos: Vec<RawVideoRecord>) -> Self {
        self.responses.insert(category_id.map(String::from), videos);
        self
    }

    pub fn failing_for(mut self, category_id: Option<&str>) -> Self {
        self.failing.insert(category_id.map(String::from));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSource for MockVideoSource {
    async fn list_trending(
        &self,
        region_code: &str,
        max_results: u32,
        category_id: Option<&str>,
    ) -> Result<Vec<RawVideoRecord>, SourceError> {
        let key = category_id.map(String::from);
        self.calls.lock().unwrap().push(RecordedCall {
            region_code: region_code.to_string(),
            max_results,
            category_id: key.clone(),
        });

        if self.failing.contains(&key) {
            return Err(SourceError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            });
        }

        let mut videos = self.responses.get(&key).cloned().unwrap_or_default();
        videos.truncate(max_results as usize);
        Ok(videos)
    }
}

pub fn raw_video(
    id: &str,
    category_id: &str,
    hours_ago: i64,
    views: u64,
    likes: u64,
    comments: u64,
) -> RawVideoRecord {
    RawVideoRecord {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: format!("Description of {id}"),
        channel: "Test Channel".to_string(),
        category_id: category_id.to_string(),
        published_at: (Utc::now() - Duration::hours(hours_ago)).to_rfc3339(),
        thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        url: format!("https://www.youtube.com/watch?v={id}"),
        tags: Vec::new(),
        duration: "PT5M".to_string(),
        view_count: views,
        like_count: likes,
        comment_count: comments,
    }
}

pub fn with_tags(mut video: RawVideoRecord, tags: &[&str]) -> RawVideoRecord {
    video.tags = tags.iter().map(|t| t.to_string()).collect();
    video
}
