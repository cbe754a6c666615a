use crate::models::{
    ApiResponse, InspirationPayload, InspirationRequest, TrendsPayload, TrendsRequest,
};
use crate::AppState;
use log::{error, info, warn};
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{post, State};

#[post("/", data = "<request>")]
pub async fn get_trends(
    state: &State<AppState>,
    request: Result<Json<TrendsRequest>, json::Error<'_>>,
) -> (Status, Json<ApiResponse<TrendsPayload>>) {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(e) => {
            warn!("Rejected trends request: {e:?}");
            return (
                Status::BadRequest,
                Json(ApiResponse::fail("Missing or invalid trends request")),
            );
        }
    };

    match state.trends_service.get_trends(&request).await {
        Ok(trends) => {
            info!(
                "Served trends for region {}: {} videos",
                request.region_code, trends.metadata.total_videos
            );
            (
                Status::Ok,
                Json(ApiResponse::ok(
                    TrendsPayload { trends },
                    "Trends fetched successfully",
                )),
            )
        }
        Err(e) => {
            error!("Trends request failed: {e}");
            (
                Status::InternalServerError,
                Json(ApiResponse::fail(&e.to_string())),
            )
        }
    }
}

#[post("/inspiration", data = "<request>")]
pub async fn get_inspiration(
    state: &State<AppState>,
    request: Result<Json<InspirationRequest>, json::Error<'_>>,
) -> (Status, Json<ApiResponse<InspirationPayload>>) {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(e) => {
            warn!("Rejected inspiration request: {e:?}");
            return (
                Status::BadRequest,
                Json(ApiResponse::fail("Missing or invalid categories")),
            );
        }
    };

    let videos = state
        .trends_service
        .get_category_trend_videos(&request.categories)
        .await;
    info!(
        "Served {} inspiration videos for {} categories",
        videos.len(),
        request.categories.len()
    );

    (
        Status::Ok,
        Json(ApiResponse::ok(
            InspirationPayload { videos },
            "Trending content fetched successfully",
        )),
    )
}
