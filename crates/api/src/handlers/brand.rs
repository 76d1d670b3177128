//! Handlers for the `/brands` resource.
//!
//! Brands are the top-level grouping entity: create-and-list only, no
//! update or delete surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use framenote_core::error::CoreError;
use framenote_core::types::DbId;
use framenote_db::models::brand::CreateBrand;
use framenote_db::repositories::BrandRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a brand exists, returning an error if not found.
pub async fn ensure_brand_exists(pool: &sqlx::PgPool, brand_id: DbId) -> AppResult<()> {
    BrandRepo::find_by_id(pool, brand_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brand",
            id: brand_id,
        }))?;
    Ok(())
}

/// POST /brands
///
/// Create a new brand.
pub async fn create_brand(
    State(state): State<AppState>,
    Json(input): Json<CreateBrand>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let brand = BrandRepo::create(&state.pool, &input).await?;

    tracing::info!(brand_id = brand.id, "Brand created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: brand })))
}

/// GET /brands
///
/// List all brands, most recent first.
pub async fn list_brands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = BrandRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: brands }))
}

/// GET /brands/{brand_id}
///
/// Fetch a single brand.
pub async fn get_brand(
    State(state): State<AppState>,
    Path(brand_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let brand = BrandRepo::find_by_id(&state.pool, brand_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Brand",
            id: brand_id,
        }))?;
    Ok(Json(DataResponse { data: brand }))
}
