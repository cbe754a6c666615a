use rocket::serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_REGION_CODE: &str = "US";
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// A trending video as delivered by the video source, already coerced at the
/// ingestion boundary: missing counts are 0, missing text fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel: String,
    pub category_id: String,
    pub published_at: String, // ISO-8601
    pub thumbnail: String,
    pub url: String,
    pub tags: Vec<String>,
    pub duration: String, // e.g. PT4M13S
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetrics {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub age_in_hours: f64,
    pub engagement_rate: f64, // percent
    pub like_ratio: f64,      // percent
    pub views_per_hour: f64,
    pub comment_rate: f64, // percent
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel: String,
    pub category_id: String,
    pub published_at: String,
    pub thumbnail: String,
    pub url: String,
    pub tags: Vec<String>,
    pub duration: u64, // in seconds
    pub metrics: VideoMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsRequest {
    #[serde(default = "default_region_code")]
    pub region_code: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

fn default_region_code() -> String {
    DEFAULT_REGION_CODE.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl Default for TrendsRequest {
    fn default() -> Self {
        Self {
            region_code: default_region_code(),
            max_results: default_max_results(),
            categories: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingWindow {
    pub hour: u32,
    pub avg_engagement: f64,
    pub video_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub topic: String,
    pub count: usize,
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsMetadata {
    pub total_videos: usize,
    pub avg_engagement_rate: f64,
    pub region_code: String,
    pub fetched_at: String, // RFC 3339
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsResult {
    pub viral_potential: Vec<CategorizedVideo>,
    pub rising_stars: Vec<CategorizedVideo>,
    pub niche_opportunities: BTreeMap<String, Vec<CategorizedVideo>>,
    pub engagement_by_hour: Vec<PostingWindow>,
    pub trending_topics: Vec<TrendingTopic>,
    pub metadata: TrendsMetadata,
}

/// Minimal projection handed to the content-planning prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspirationItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspirationRequest {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrendsPayload {
    pub trends: TrendsResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InspirationPayload {
    pub videos: Vec<InspirationItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.to_string(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: u16,
    pub message: String,
}
