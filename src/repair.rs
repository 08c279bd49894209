//! Image reference repair for double-faced cards.
//!
//! Scryfall omits the top-level `image_uris` object for cards whose faces are
//! printed separately (transform, modal DFC, ...). Each entry in `card_faces`
//! carries its own `image_uris` instead. Exports want one image column per
//! card, so the front face's images are promoted to the card itself.

use serde_json::Value;
use thiserror::Error;

use crate::error::ScrycsvError;
use crate::search::CardRecord;

pub const IMAGE_URIS: &str = "image_uris";
pub const CARD_FACES: &str = "card_faces";

/// Why a record's image reference could not be derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RepairFailure {
    #[error("no image_uris and no card_faces")]
    NoCardFaces,
    #[error("card_faces is empty")]
    EmptyCardFaces,
    #[error("first card face has no image_uris")]
    FaceWithoutImage,
}

/// Fills in a missing top-level `image_uris` from the first card face.
///
/// Records that already carry a non-null `image_uris` are left untouched.
/// Returns the number of records that were repaired.
///
/// # Errors
/// Fails on the first record that has neither a direct image reference nor a
/// usable first face.
pub fn repair_image_uris(records: &mut [CardRecord]) -> Result<usize, ScrycsvError> {
    let mut repaired = 0;

    for (index, record) in records.iter_mut().enumerate() {
        if has_image(record) {
            continue;
        }

        let image = front_face_image(record).map_err(|reason| ScrycsvError::RepairFailed {
            index,
            name: record_name(record),
            reason,
        })?;

        record.insert(IMAGE_URIS.to_string(), image);
        repaired += 1;
    }

    if repaired > 0 {
        tracing::debug!("Copied front-face image_uris into {} record(s)", repaired);
    }

    Ok(repaired)
}

fn has_image(record: &CardRecord) -> bool {
    record.get(IMAGE_URIS).is_some_and(|value| !value.is_null())
}

fn front_face_image(record: &CardRecord) -> Result<Value, RepairFailure> {
    let faces = match record.get(CARD_FACES) {
        Some(Value::Array(faces)) => faces,
        _ => return Err(RepairFailure::NoCardFaces),
    };

    let front = faces.first().ok_or(RepairFailure::EmptyCardFaces)?;

    match front.get(IMAGE_URIS) {
        Some(image) if !image.is_null() => Ok(image.clone()),
        _ => Err(RepairFailure::FaceWithoutImage),
    }
}

fn record_name(record: &CardRecord) -> String {
    record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
        .to_string()
}
