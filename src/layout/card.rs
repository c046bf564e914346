//! Fixed card geometry and the text plan.
//!
//! The text column is laid out with a single monotonically advancing cursor. Nothing is
//! re-measured after placement, so very long bodies run into the next section; that overlap is
//! accepted behavior.

use crate::{
    foundation::{
        core::{BLACK, GRAY, Point, Rect, Rgb8, Size, TEAL},
        error::IntentionResult,
    },
    layout::wrap::wrap,
    record::IntentionRecord,
};

/// Output card size.
pub const CANVAS: Size = Size::new(2250, 1580);
/// Slot each photo is fitted into.
pub const PHOTO_SLOT: Size = Size::new(1000, 782);
/// Top-left corner of the upper photo slot.
pub const PHOTO1_ORIGIN: (i64, i64) = (0, 0);
/// Top-left corner of the lower photo slot; 16px below the upper slot.
pub const PHOTO2_ORIGIN: (i64, i64) = (0, 798);

/// Left edge of the text column.
pub const TEXT_X: f64 = 1120.0;
/// Top of the name line.
pub const TEXT_Y: f64 = 100.0;
/// Space between the name and the country.
pub const COUNTRY_GAP: f64 = 25.0;
/// Country sits this far below the name's top.
pub const COUNTRY_NUDGE: f64 = 15.0;
/// Cursor advance after the name line.
pub const NAME_BLOCK_ADVANCE: f64 = 150.0;
/// Cursor advance after a section header.
pub const HEADER_ADVANCE: f64 = 70.0;
/// Cursor advance per wrapped body line.
pub const LINE_ADVANCE: f64 = 45.0;
/// Extra space after each section.
pub const SECTION_GAP: f64 = 40.0;
/// Characters per wrapped body line.
pub const WRAP_WIDTH: usize = 55;

/// Attribution drawn in the bottom-right corner.
pub const TAG_TEXT: &str = "made with intentions-maker <3";
/// Distance from the tag's ink to the right and bottom edges.
pub const TAG_PADDING: f64 = 15.0;

/// Face weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// `LiberationSans-Bold`.
    Bold,
    /// `LiberationSans-Regular`.
    Regular,
}

/// Typographic role of a text item; each role maps to one weight and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceRole {
    /// Name.
    Title,
    /// Country and section headers.
    Header,
    /// Wrapped section bodies.
    Body,
    /// Attribution tag.
    Tag,
}

impl FaceRole {
    /// Every role, in face-table order.
    pub const ALL: [FaceRole; 4] = [Self::Title, Self::Header, Self::Body, Self::Tag];

    /// Bold for the name and headers, regular otherwise.
    pub fn weight(self) -> Weight {
        match self {
            Self::Title | Self::Header => Weight::Bold,
            Self::Body | Self::Tag => Weight::Regular,
        }
    }

    /// Pixel size: 70, 55, 35, 20.
    pub fn size_px(self) -> f32 {
        match self {
            Self::Title => 70.0,
            Self::Header => 55.0,
            Self::Body => 35.0,
            Self::Tag => 20.0,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Header => 1,
            Self::Body => 2,
            Self::Tag => 3,
        }
    }
}

/// Measures text for layout.
pub trait TextMetrics {
    /// Pen advance of `text` in `role`'s face.
    fn advance(&mut self, role: FaceRole, text: &str) -> IntentionResult<f64>;

    /// Box of the pixels `text` visibly paints in `color` over the card background, relative to
    /// its draw origin.
    fn ink_bounds(&mut self, role: FaceRole, text: &str, color: Rgb8) -> IntentionResult<Rect>;
}

/// One positioned run of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    /// Run contents, already wrapped.
    pub text: String,
    /// Face the run is drawn in.
    pub role: FaceRole,
    /// Fill color.
    pub color: Rgb8,
    /// Top-left draw origin in canvas pixels.
    pub origin: Point,
}

/// Position every text run of the card.
pub fn plan_text(
    record: &IntentionRecord,
    metrics: &mut impl TextMetrics,
) -> IntentionResult<Vec<TextItem>> {
    let mut items = Vec::new();
    let x = TEXT_X;
    let mut y = TEXT_Y;

    items.push(TextItem {
        text: record.name.clone(),
        role: FaceRole::Title,
        color: BLACK,
        origin: Point::new(x, y),
    });
    let name_advance = metrics.advance(FaceRole::Title, &record.name)?;
    items.push(TextItem {
        text: record.country.clone(),
        role: FaceRole::Header,
        color: GRAY,
        origin: Point::new(x + name_advance + COUNTRY_GAP, y + COUNTRY_NUDGE),
    });

    y += NAME_BLOCK_ADVANCE;
    for (i, (header, body)) in record.sections().into_iter().enumerate() {
        if i > 0 {
            y += SECTION_GAP;
        }
        items.push(TextItem {
            text: header.to_string(),
            role: FaceRole::Header,
            color: BLACK,
            origin: Point::new(x, y),
        });
        y += HEADER_ADVANCE;
        for line in wrap(body, WRAP_WIDTH) {
            items.push(TextItem {
                text: line,
                role: FaceRole::Body,
                color: TEAL,
                origin: Point::new(x, y),
            });
            y += LINE_ADVANCE;
        }
    }

    let tag_bounds = metrics.ink_bounds(FaceRole::Tag, TAG_TEXT, GRAY)?;
    items.push(TextItem {
        text: TAG_TEXT.to_string(),
        role: FaceRole::Tag,
        color: GRAY,
        origin: anchor_bottom_right(tag_bounds, CANVAS, TAG_PADDING),
    });

    Ok(items)
}

/// Draw origin placing `bounds` (relative to the origin) `padding` px inside the bottom-right
/// corner of `canvas`.
pub fn anchor_bottom_right(bounds: Rect, canvas: Size, padding: f64) -> Point {
    Point::new(
        f64::from(canvas.width) - padding - bounds.x1,
        f64::from(canvas.height) - padding - bounds.y1,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/card.rs"]
mod tests;
