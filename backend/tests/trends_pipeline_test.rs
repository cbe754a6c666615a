mod common;

use common::{raw_video, with_tags, MockVideoSource, RecordedCall};
use std::sync::Arc;
use trends_backend::error::TrendsError;
use trends_backend::models::TrendsRequest;
use trends_backend::services::trends_service::TrendsService;

fn mixed_batch() -> Vec<trends_backend::models::RawVideoRecord> {
    vec![
        // 10% engagement, young and fast
        with_tags(raw_video("music-hit", "10", 2, 200_000, 18_000, 2_000), &["summer", "Dance Pop"]),
        // 3% engagement, old
        with_tags(raw_video("gaming-run", "20", 72, 500_000, 12_000, 3_000), &["speedrun", "summer"]),
        // 8% engagement, old
        with_tags(raw_video("news-brief", "25", 30, 40_000, 3_000, 200), &["dance pop", "news"]),
        // unknown category, 6% engagement, young but slow
        raw_video("odd-one", "42", 5, 1_000, 50, 10),
        // no views at all
        raw_video("silent", "10", 1, 0, 0, 0),
    ]
}

#[tokio::test]
async fn zero_view_record_has_zero_rates_and_is_not_viral() {
    let source = MockVideoSource::new().with_videos(
        None,
        vec![
            raw_video("popular", "10", 10, 1_000, 100, 20),
            raw_video("unseen", "10", 10, 0, 7, 3),
        ],
    );
    let service = TrendsService::new(Arc::new(source));

    let request = TrendsRequest {
        max_results: 2,
        ..Default::default()
    };
    let result = service.get_trends(&request).await.unwrap();

    let unseen = result.niche_opportunities["Music"]
        .iter()
        .find(|v| v.id == "unseen")
        .unwrap();
    assert_eq!(unseen.metrics.engagement_rate, 0.0);
    assert_eq!(unseen.metrics.like_ratio, 0.0);
    assert_eq!(unseen.metrics.views_per_hour, 0.0);
    assert_eq!(unseen.metrics.comment_rate, 0.0);

    assert_eq!(result.viral_potential.len(), 1);
    assert_eq!(result.viral_potential[0].id, "popular");
    assert_eq!(result.metadata.total_videos, 2);
}

#[tokio::test]
async fn request_parameters_reach_the_source() {
    let source = Arc::new(MockVideoSource::new());
    let service = TrendsService::new(source.clone());

    service.get_trends(&TrendsRequest::default()).await.unwrap();
    service
        .get_trends(&TrendsRequest {
            region_code: "DE".to_string(),
            max_results: 25,
            categories: Some(vec!["Music".to_string()]),
        })
        .await
        .unwrap();
    service
        .get_trends(&TrendsRequest {
            categories: Some(vec!["Music".to_string(), "Gaming".to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();
    service
        .get_trends(&TrendsRequest {
            categories: Some(vec!["Nonsense".to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        source.calls(),
        vec![
            RecordedCall { region_code: "US".to_string(), max_results: 50, category_id: None },
            RecordedCall { region_code: "DE".to_string(), max_results: 25, category_id: Some("10".to_string()) },
            RecordedCall { region_code: "US".to_string(), max_results: 50, category_id: Some("1020".to_string()) },
            RecordedCall { region_code: "US".to_string(), max_results: 50, category_id: None },
        ]
    );
}

#[tokio::test]
async fn empty_region_and_zero_page_size_query_with_defaults() {
    let source = Arc::new(MockVideoSource::new());
    let service = TrendsService::new(source.clone());

    let result = service
        .get_trends(&TrendsRequest {
            region_code: String::new(),
            max_results: 0,
            categories: None,
        })
        .await
        .unwrap();

    assert_eq!(
        source.calls(),
        vec![RecordedCall { region_code: "US".to_string(), max_results: 50, category_id: None }]
    );
    assert_eq!(result.metadata.region_code, "");
}

#[tokio::test]
async fn upstream_failure_fails_the_whole_request() {
    let source = MockVideoSource::new().failing_for(None);
    let service = TrendsService::new(Arc::new(source));

    let result = service.get_trends(&TrendsRequest::default()).await;
    assert!(matches!(result, Err(TrendsError::FetchFailed)));
    assert_eq!(result.unwrap_err().to_string(), "Failed to fetch trends");
}

#[tokio::test]
async fn views_hold_their_invariants() {
    let source = MockVideoSource::new().with_videos(None, mixed_batch());
    let service = TrendsService::new(Arc::new(source));

    let result = service.get_trends(&TrendsRequest::default()).await.unwrap();

    let viral: Vec<&str> = result.viral_potential.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(viral, vec!["music-hit", "news-brief", "odd-one"]);

    let rising: Vec<&str> = result.rising_stars.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(rising, vec!["music-hit"]);
    assert!(result
        .rising_stars
        .iter()
        .all(|v| v.metrics.age_in_hours < 24.0 && v.metrics.views_per_hour > 10_000.0));

    let niche = &result.niche_opportunities;
    assert_eq!(niche["Music"].len(), 2);
    assert_eq!(niche["Gaming"].len(), 1);
    assert_eq!(niche["News"].len(), 1);
    assert_eq!(niche["Other"][0].id, "odd-one");
    assert_eq!(niche.values().map(Vec::len).sum::<usize>(), 5);

    assert!(result.engagement_by_hour.len() <= 5);
    assert!(result.engagement_by_hour.iter().all(|w| w.video_count >= 1 && w.hour < 24));
    assert_eq!(
        result.engagement_by_hour.iter().map(|w| w.video_count).sum::<usize>(),
        5
    );

    let topics: Vec<(&str, usize)> = result
        .trending_topics
        .iter()
        .map(|t| (t.topic.as_str(), t.count))
        .collect();
    assert_eq!(topics, vec![("summer", 2), ("dance pop", 2)]);
    assert!((result.trending_topics[0].avg_engagement - 6.5).abs() < 1e-9);

    assert_eq!(result.metadata.total_videos, 5);
    assert!((result.metadata.avg_engagement_rate - 27.0 / 5.0).abs() < 1e-6);
}

#[tokio::test]
async fn identical_upstream_data_gives_identical_views() {
    let source = MockVideoSource::new().with_videos(None, mixed_batch());
    let service = TrendsService::new(Arc::new(source));

    let first = service.get_trends(&TrendsRequest::default()).await.unwrap();
    let second = service.get_trends(&TrendsRequest::default()).await.unwrap();

    let ids = |videos: &[trends_backend::models::CategorizedVideo]| -> Vec<String> {
        videos.iter().map(|v| v.id.clone()).collect()
    };
    assert_eq!(ids(&first.viral_potential), ids(&second.viral_potential));
    assert_eq!(ids(&first.rising_stars), ids(&second.rising_stars));
    assert_eq!(
        first.niche_opportunities.keys().collect::<Vec<_>>(),
        second.niche_opportunities.keys().collect::<Vec<_>>()
    );
    for (name, videos) in &first.niche_opportunities {
        assert_eq!(ids(videos), ids(&second.niche_opportunities[name]));
    }
    assert_eq!(first.trending_topics, second.trending_topics);
}

#[tokio::test]
async fn inspiration_only_queries_known_categories() {
    let source = Arc::new(MockVideoSource::new().with_videos(
        Some("10"),
        vec![
            raw_video("m1", "10", 5, 1_000, 90, 10),
            raw_video("m2", "10", 5, 1_000, 20, 0),
        ],
    ));
    let service = TrendsService::new(source.clone());

    let videos = service
        .get_category_trend_videos(&["Music".to_string(), "UnknownCat".to_string()])
        .await;

    assert_eq!(
        source.calls(),
        vec![RecordedCall {
            region_code: "US".to_string(),
            max_results: 10,
            category_id: Some("10".to_string()),
        }]
    );
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].title, "Video m1");
    assert_eq!(videos[0].description, "Description of m1");
}

#[tokio::test]
async fn inspiration_survives_a_failing_category() {
    let source = MockVideoSource::new()
        .failing_for(Some("20"))
        .with_videos(Some("10"), vec![raw_video("m1", "10", 5, 1_000, 70, 0)])
        .with_videos(Some("25"), vec![raw_video("n1", "25", 5, 1_000, 90, 0)]);
    let service = TrendsService::new(Arc::new(source));

    let videos = service
        .get_category_trend_videos(&[
            "Music".to_string(),
            "Gaming".to_string(),
            "News".to_string(),
        ])
        .await;

    let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, vec!["Video n1", "Video m1"]);
}

#[tokio::test]
async fn inspiration_merges_sorts_and_caps_at_seven() {
    let music: Vec<_> = (0..5)
        .map(|i| raw_video(&format!("m{i}"), "10", 5, 1_000, 60 + i * 10, 0))
        .collect();
    let gaming: Vec<_> = (0..5)
        .map(|i| raw_video(&format!("g{i}"), "20", 5, 1_000, 65 + i * 10, 0))
        .collect();
    let source = MockVideoSource::new()
        .with_videos(Some("10"), music)
        .with_videos(Some("20"), gaming);
    let service = TrendsService::new(Arc::new(source));

    let videos = service
        .get_category_trend_videos(&["Music".to_string(), "Gaming".to_string()])
        .await;

    let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Video g4", "Video m4", "Video g3", "Video m3", "Video g2", "Video m2", "Video g1"
        ]
    );
}

#[tokio::test]
async fn inspiration_is_empty_when_everything_fails() {
    let source = MockVideoSource::new()
        .failing_for(Some("10"))
        .failing_for(Some("17"));
    let service = TrendsService::new(Arc::new(source));

    let videos = service
        .get_category_trend_videos(&["Music".to_string(), "Sports".to_string()])
        .await;
    assert!(videos.is_empty());

    assert!(service.get_category_trend_videos(&[]).await.is_empty());
}
