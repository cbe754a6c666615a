use crate::error::TrendsError;
use crate::models::{
    CategorizedVideo, InspirationItem, TrendsMetadata, TrendsRequest, TrendsResult,
    DEFAULT_MAX_RESULTS, DEFAULT_REGION_CODE,
};
use crate::services::category::{concatenated_category_filter, id_to_name, name_to_id};
use crate::services::metrics::enrich_videos;
use crate::services::posting_time::analyze_posting_times;
use crate::services::topics::extract_trending_topics;
use crate::services::youtube::VideoSource;
use crate::utils::compare_desc_float;
use chrono::Utc;
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Engagement rate (percent) above which a video counts as viral material.
const VIRAL_ENGAGEMENT_THRESHOLD: f64 = 5.0;
const VIRAL_LIMIT: usize = 10;

const RISING_MAX_AGE_HOURS: f64 = 24.0;
const RISING_MIN_VIEWS_PER_HOUR: f64 = 10_000.0;
const RISING_LIMIT: usize = 10;

const INSPIRATION_REGION_CODE: &str = "US";
/// Page size requested per category when seeding content planning.
const INSPIRATION_PAGE_SIZE: u32 = 10;
const INSPIRATION_LIMIT: usize = 7;

#[derive(Clone)]
pub struct TrendsService {
    source: Arc<dyn VideoSource>,
}

impl TrendsService {
    pub fn new(source: Arc<dyn VideoSource>) -> Self {
        Self { source }
    }

    /// Fetches one page of trending videos and classifies it into every
    /// analytical view. Any upstream failure fails the whole request.
    pub async fn get_trends(&self, request: &TrendsRequest) -> Result<TrendsResult, TrendsError> {
        let filter = request
            .categories
            .as_deref()
            .and_then(concatenated_category_filter);

        // An empty region or a zero page size still queries with the defaults;
        // metadata echoes the region as requested.
        let region_code = match request.region_code.as_str() {
            "" => DEFAULT_REGION_CODE,
            region => region,
        };
        let max_results = match request.max_results {
            0 => DEFAULT_MAX_RESULTS,
            n => n,
        };

        let records = self
            .source
            .list_trending(region_code, max_results, filter.as_deref())
            .await
            .map_err(|e| {
                error!("Failed to fetch trends for region {region_code}: {e}");
                TrendsError::FetchFailed
            })?;

        let videos = enrich_videos(records, Utc::now());
        info!(
            "Classifying {} trending videos for region {}",
            videos.len(),
            request.region_code
        );

        Ok(categorize_trends(videos, &request.region_code))
    }

    /// Collects high-engagement titles and descriptions across the requested
    /// categories, one upstream call per category. Unknown names are skipped
    /// and a failing category never fails the others.
    pub async fn get_category_trend_videos(&self, categories: &[String]) -> Vec<InspirationItem> {
        let mut all_videos: Vec<CategorizedVideo> = Vec::new();

        for name in categories {
            let Some(category_id) = name_to_id(name) else {
                warn!("Skipping unknown category '{name}'");
                continue;
            };

            let records = match self
                .source
                .list_trending(INSPIRATION_REGION_CODE, INSPIRATION_PAGE_SIZE, Some(category_id))
                .await
            {
                Ok(records) => records,
                Err(e) => {
                    error!("Error fetching trends for category {name}: {e}");
                    continue;
                }
            };

            info!("Fetched {} trending videos for category {name}", records.len());
            all_videos.extend(enrich_videos(records, Utc::now()));
        }

        top_by_engagement(all_videos, INSPIRATION_LIMIT)
            .into_iter()
            .map(|video| InspirationItem {
                title: video.title,
                description: video.description,
            })
            .collect()
    }
}

/// Builds every view of a trends result from already enriched videos.
pub fn categorize_trends(videos: Vec<CategorizedVideo>, region_code: &str) -> TrendsResult {
    let viral_potential = top_by_engagement(videos.clone(), VIRAL_LIMIT);
    let rising_stars = select_rising_stars(&videos);
    let engagement_by_hour = analyze_posting_times(&videos);
    let trending_topics = extract_trending_topics(&videos);

    let total_videos = videos.len();
    let avg_engagement_rate = if total_videos > 0 {
        videos.iter().map(|v| v.metrics.engagement_rate).sum::<f64>() / total_videos as f64
    } else {
        0.0
    };

    let niche_opportunities = group_by_category(videos);

    TrendsResult {
        viral_potential,
        rising_stars,
        niche_opportunities,
        engagement_by_hour,
        trending_topics,
        metadata: TrendsMetadata {
            total_videos,
            avg_engagement_rate,
            region_code: region_code.to_string(),
            fetched_at: Utc::now().to_rfc3339(),
        },
    }
}

fn top_by_engagement(videos: Vec<CategorizedVideo>, limit: usize) -> Vec<CategorizedVideo> {
    let mut viral: Vec<CategorizedVideo> = videos
        .into_iter()
        .filter(|v| v.metrics.engagement_rate > VIRAL_ENGAGEMENT_THRESHOLD)
        .collect();

    viral.sort_by(|a, b| compare_desc_float(a.metrics.engagement_rate, b.metrics.engagement_rate));
    viral.truncate(limit);
    viral
}

fn select_rising_stars(videos: &[CategorizedVideo]) -> Vec<CategorizedVideo> {
    let mut rising: Vec<CategorizedVideo> = videos
        .iter()
        .filter(|v| {
            v.metrics.age_in_hours < RISING_MAX_AGE_HOURS
                && v.metrics.views_per_hour > RISING_MIN_VIEWS_PER_HOUR
        })
        .cloned()
        .collect();

    rising.sort_by(|a, b| compare_desc_float(a.metrics.views_per_hour, b.metrics.views_per_hour));
    rising.truncate(RISING_LIMIT);
    rising
}

fn group_by_category(videos: Vec<CategorizedVideo>) -> BTreeMap<String, Vec<CategorizedVideo>> {
    let mut groups: BTreeMap<String, Vec<CategorizedVideo>> = BTreeMap::new();
    for video in videos {
        groups
            .entry(id_to_name(&video.category_id).to_string())
            .or_default()
            .push(video);
    }
    groups
}
