use std::io::Cursor;

use anyhow::Context;
use image::ImageDecoder;

use crate::{
    foundation::error::{IntentionError, IntentionResult},
    record::{FitMode, Photo},
};

/// Decode encoded photo bytes (PNG, JPEG, ...) into an RGB8 [`Photo`].
///
/// The EXIF orientation flag is read but not applied; rotation happens during composition via
/// [`crate::normalize_orientation`]. Unreadable orientation metadata is treated as absent.
pub fn decode_photo(bytes: &[u8]) -> IntentionResult<Photo> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("guess photo format")?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| IntentionError::invalid_image(format!("open photo decoder: {e}")))?;

    let exif_orientation = decoder.orientation().ok().and_then(exif_flag);
    let dyn_img = image::DynamicImage::from_decoder(decoder)
        .map_err(|e| IntentionError::invalid_image(format!("decode photo: {e}")))?;

    let image = dyn_img.to_rgb8();
    if image.width() == 0 || image.height() == 0 {
        return Err(IntentionError::invalid_image("photo has zero width or height"));
    }

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        ?exif_orientation,
        "decoded photo"
    );

    Ok(Photo {
        image,
        exif_orientation,
        fit: FitMode::default(),
    })
}

/// Read and decode a photo from disk.
pub fn read_photo(path: &std::path::Path) -> IntentionResult<Photo> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
    decode_photo(&bytes).map_err(|e| match e {
        IntentionError::InvalidImage(msg) => {
            IntentionError::invalid_image(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

fn exif_flag(orientation: image::metadata::Orientation) -> Option<u16> {
    use image::metadata::Orientation as O;

    match orientation {
        O::NoTransforms => None,
        O::FlipHorizontal => Some(2),
        O::Rotate180 => Some(3),
        O::FlipVertical => Some(4),
        O::Rotate90FlipH => Some(5),
        O::Rotate90 => Some(6),
        O::Rotate270FlipH => Some(7),
        O::Rotate270 => Some(8),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
