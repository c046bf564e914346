use std::io::Cursor;

use anyhow::Context;
use image::RgbImage;

use crate::{
    assets::orient::normalize_orientation,
    config::ComposeSettings,
    foundation::{
        core::{BACKGROUND, Size},
        error::{IntentionError, IntentionResult},
    },
    layout::{
        card::{CANVAS, PHOTO_SLOT, PHOTO1_ORIGIN, PHOTO2_ORIGIN, plan_text},
        fit::{center_offset, crop_to_aspect, fit_to_area},
    },
    record::{FitMode, IntentionRecord, Photo},
    render::{composite::over_rgb_in_place, text_layer::rasterize_text},
    text::{
        face::{FontSet, FontWarning},
        typeset::Typesetter,
    },
};

/// Finished card: PNG bytes plus the dimensions they encode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    png: Vec<u8>,
    size: Size,
}

impl RenderedCard {
    /// Encoded PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Take ownership of the encoded PNG bytes.
    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Reader over the PNG, positioned at the start.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.png.as_slice())
    }

    /// Encoded dimensions; always [`CANVAS`].
    pub fn size(&self) -> Size {
        self.size
    }

    /// Decode the PNG back into pixels.
    pub fn to_image(&self) -> IntentionResult<RgbImage> {
        let img = image::load_from_memory_with_format(&self.png, image::ImageFormat::Png)
            .context("decode rendered card")?;
        Ok(img.to_rgb8())
    }

    /// Write the PNG to `path`.
    pub fn write_to(&self, path: &std::path::Path) -> IntentionResult<()> {
        std::fs::write(path, &self.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// A card together with the font fallbacks taken to draw it.
#[derive(Clone, Debug)]
pub struct Composed {
    /// Rendered card.
    pub card: RenderedCard,
    /// Fallbacks taken; empty when every face file was found.
    pub warnings: Vec<FontWarning>,
}

/// Renders intention cards with a resolved [`FontSet`].
///
/// Holds no mutable state; one instance can serve any number of renders, from any thread.
#[derive(Clone, Debug)]
pub struct Composer {
    fonts: FontSet,
}

impl Composer {
    /// Resolve fonts per `settings`. Never fails; see [`Composer::warnings`].
    pub fn new(settings: &ComposeSettings) -> Self {
        Self {
            fonts: FontSet::load(settings),
        }
    }

    /// Use an already resolved font set.
    pub fn with_fonts(fonts: FontSet) -> Self {
        Self { fonts }
    }

    /// Resolved faces.
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Font fallbacks taken while resolving faces.
    pub fn warnings(&self) -> &[FontWarning] {
        self.fonts.warnings()
    }

    /// Render `record` into a 2250x1580 PNG.
    #[tracing::instrument(skip_all, fields(name = %record.name))]
    pub fn compose(&self, record: &IntentionRecord) -> IntentionResult<RenderedCard> {
        record.validate()?;

        let mut canvas = RgbImage::from_pixel(
            CANVAS.width,
            CANVAS.height,
            image::Rgb([BACKGROUND.r, BACKGROUND.g, BACKGROUND.b]),
        );

        for (photo, (slot_x, slot_y)) in [
            (&record.photo1, PHOTO1_ORIGIN),
            (&record.photo2, PHOTO2_ORIGIN),
        ] {
            let fitted = prepare_photo(photo)?;
            let (dx, dy) = center_offset(Size::new(fitted.width(), fitted.height()), PHOTO_SLOT);
            image::imageops::replace(&mut canvas, &fitted, slot_x + dx, slot_y + dy);
        }

        let mut typesetter = Typesetter::new(&self.fonts)?;
        let items = plan_text(record, &mut typesetter)?;
        let layer = rasterize_text(&mut typesetter, CANVAS, &items)?;
        over_rgb_in_place(&mut canvas, layer.data_as_u8_slice())?;

        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(canvas)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| IntentionError::encode(format!("encode png: {e}")))?;
        tracing::debug!(bytes = png.len(), text_items = items.len(), "card rendered");

        Ok(RenderedCard { png, size: CANVAS })
    }
}

/// Resolve fonts per `settings` and render `record` in one call.
pub fn compose(record: &IntentionRecord, settings: &ComposeSettings) -> IntentionResult<Composed> {
    let composer = Composer::new(settings);
    let card = composer.compose(record)?;
    Ok(Composed {
        card,
        warnings: composer.warnings().to_vec(),
    })
}

/// Orient, optionally crop, and fit a photo to its slot.
pub fn prepare_photo(photo: &Photo) -> IntentionResult<RgbImage> {
    if photo.image.width() == 0 || photo.image.height() == 0 {
        return Err(IntentionError::invalid_image("photo has zero width or height"));
    }
    let oriented = normalize_orientation(photo.image.clone(), photo.exif_orientation);
    Ok(match photo.fit {
        FitMode::Fit => fit_to_area(&oriented, PHOTO_SLOT),
        // Crop aspect matches the slot up to integer rounding; cover the full slot.
        FitMode::Crop => image::imageops::resize(
            &crop_to_aspect(&oriented, PHOTO_SLOT),
            PHOTO_SLOT.width,
            PHOTO_SLOT.height,
            image::imageops::FilterType::Lanczos3,
        ),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
