//! Room-id derivation and parsing.
//!
//! Every video owns one collaboration room. The room id is derived at
//! upload time as `"{brand_id}-{file_uuid}"` and is globally unique and
//! stable for the video's lifetime; all of the video's comment threads
//! are addressed by it.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum accepted room-id length (path segments come from clients).
pub const MAX_ROOM_ID_LEN: usize = 128;

/// Derive the room id for a newly uploaded video file.
pub fn derive_room_id(brand_id: DbId, file_id: Uuid) -> String {
    format!("{brand_id}-{file_id}")
}

/// Split a room id back into its brand id and file uuid.
pub fn parse_room_id(room_id: &str) -> Option<(DbId, Uuid)> {
    let (brand, file) = room_id.split_once('-')?;
    let brand_id = brand.parse::<DbId>().ok()?;
    let file_id = file.parse::<Uuid>().ok()?;
    Some((brand_id, file_id))
}

/// Validate a client-supplied room id before it reaches a query.
pub fn validate_room_id(room_id: &str) -> Result<(), CoreError> {
    if room_id.is_empty() || room_id.len() > MAX_ROOM_ID_LEN {
        return Err(CoreError::Validation(format!(
            "Room id must be 1..={MAX_ROOM_ID_LEN} characters"
        )));
    }
    if parse_room_id(room_id).is_none() {
        return Err(CoreError::Validation(
            "Room id must have the form '{brand_id}-{uuid}'".into(),
        ));
    }
    Ok(())
}
