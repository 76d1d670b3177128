//! Route definitions for brands and the videos nested under them.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::{brand, video};
use crate::state::AppState;

pub fn router(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route("/brands", get(brand::list_brands).post(brand::create_brand))
        .route("/brands/{brand_id}", get(brand::get_brand))
        .route(
            "/brands/{brand_id}/videos",
            get(video::list_videos)
                .post(video::upload_video)
                // The extractor's 2 MB default is far below a real video;
                // only this route accepts large bodies.
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
}
