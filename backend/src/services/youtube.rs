use crate::config::YouTubeConfig;
use crate::error::SourceError;
use crate::models::RawVideoRecord;
use crate::utils::{parse_count, youtube_watch_url};
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Anything that can list the currently trending videos for a region.
#[rocket::async_trait]
pub trait VideoSource: Send + Sync {
    async fn list_trending(
        &self,
        region_code: &str,
        max_results: u32,
        category_id: Option<&str>,
    ) -> Result<Vec<RawVideoRecord>, SourceError>;
}

pub struct YouTubeClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(config: &YouTubeConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn trending_url(
        &self,
        region_code: &str,
        max_results: u32,
        category_id: Option<&str>,
    ) -> Result<Url, SourceError> {
        let max_results = max_results.to_string();
        let mut params = vec![
            ("part", "snippet,statistics,contentDetails"),
            ("chart", "mostPopular"),
            ("regionCode", region_code),
            ("maxResults", max_results.as_str()),
            ("key", self.api_key.as_str()),
        ];
        if let Some(category_id) = category_id {
            params.push(("videoCategoryId", category_id));
        }

        Ok(Url::parse_with_params(&format!("{}/videos", self.api_url), &params)?)
    }
}

#[rocket::async_trait]
impl VideoSource for YouTubeClient {
    async fn list_trending(
        &self,
        region_code: &str,
        max_results: u32,
        category_id: Option<&str>,
    ) -> Result<Vec<RawVideoRecord>, SourceError> {
        // Documentation: https://developers.google.com/youtube/v3/docs/videos/list
        let url = self.trending_url(region_code, max_results, category_id)?;
        info!(
            "Fetching trending videos: region={region_code}, maxResults={max_results}, category={}",
            category_id.unwrap_or("-")
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        parse_video_list(&body)
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    items: Vec<Value>,
}

// Optional parts of an item may be missing or explicitly null; both decode
// to the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    snippet: Snippet,
    #[serde(default, deserialize_with = "null_as_default")]
    statistics: Statistics,
    #[serde(default, deserialize_with = "null_as_default")]
    content_details: ContentDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Snippet {
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(deserialize_with = "null_as_default")]
    description: String,
    #[serde(deserialize_with = "null_as_default")]
    channel_title: String,
    #[serde(deserialize_with = "null_as_default")]
    category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    published_at: String,
    #[serde(deserialize_with = "null_as_default")]
    thumbnails: Thumbnails,
    #[serde(deserialize_with = "null_as_default")]
    tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnail {
    #[serde(deserialize_with = "null_as_default")]
    url: String,
}

// Counts arrive as strings, as numbers, or not at all.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Statistics {
    view_count: Option<Value>,
    like_count: Option<Value>,
    comment_count: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentDetails {
    #[serde(deserialize_with = "null_as_default")]
    duration: String,
}

fn count_from_value(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => parse_count(s),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

impl VideoItem {
    fn into_record(self) -> RawVideoRecord {
        let url = youtube_watch_url(&self.id);

        RawVideoRecord {
            url,
            id: self.id,
            title: self.snippet.title,
            description: self.snippet.description,
            channel: self.snippet.channel_title,
            category_id: self.snippet.category_id,
            published_at: self.snippet.published_at,
            thumbnail: self
                .snippet
                .thumbnails
                .high
                .map(|thumbnail| thumbnail.url)
                .unwrap_or_default(),
            tags: self.snippet.tags,
            duration: self.content_details.duration,
            view_count: count_from_value(self.statistics.view_count.as_ref()),
            like_count: count_from_value(self.statistics.like_count.as_ref()),
            comment_count: count_from_value(self.statistics.comment_count.as_ref()),
        }
    }
}

/// Decodes a `videos.list` response body. Items that do not have the
/// expected shape are skipped; a body without an item list is an error.
pub fn parse_video_list(body: &str) -> Result<Vec<RawVideoRecord>, SourceError> {
    let response: VideoListResponse = serde_json::from_str(body)?;

    let records = response
        .items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<VideoItem>(item) {
            Ok(video) => Some(video.into_record()),
            Err(e) => {
                warn!("Skipping malformed video item: {e}");
                None
            }
        })
        .collect();

    Ok(records)
}
