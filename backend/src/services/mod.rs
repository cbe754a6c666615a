pub mod category;
pub mod metrics;
pub mod posting_time;
pub mod topics;
pub mod trends_service;
pub mod youtube;
