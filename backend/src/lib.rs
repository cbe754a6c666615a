pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use rocket::{routes, Build, Rocket};
use services::trends_service::TrendsService;

pub struct AppState {
    pub trends_service: TrendsService,
}

pub fn build_rocket(state: AppState, cors: rocket_cors::Cors) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .attach(cors)
        .mount("/", routes![api::health_check])
        .mount(
            "/api/v1/trends",
            routes![api::get_trends, api::get_inspiration],
        )
}
