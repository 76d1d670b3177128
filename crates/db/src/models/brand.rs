//! Brand entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use framenote_core::types::{DbId, Timestamp};

/// A brand row from the `brands` table.
///
/// Brands are created once and immutable thereafter; there is no update
/// or delete surface.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new brand.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBrand {
    #[validate(length(min = 1, max = 120, message = "name must be 1..=120 characters"))]
    pub name: String,
}
