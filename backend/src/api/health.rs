use crate::models::HealthResponse;
use rocket::get;
use rocket::serde::json::Json;

#[get("/health")]
pub fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: 200,
        message: "Server is OK".to_string(),
    })
}
