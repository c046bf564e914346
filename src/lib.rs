//! Intention cards: a name, a country, three short texts and two photos, composited into one
//! fixed-layout PNG.
//!
//! # Pipeline overview
//!
//! 1. **Collect**: an [`IntentionForm`] (JSON or CLI flags) is validated and its photos decoded
//!    into an [`IntentionRecord`].
//! 2. **Resolve fonts**: a [`Composer`] loads bold and regular faces through [`FontSet::load`],
//!    falling back to installed or built-in faces with a [`FontWarning`] instead of failing.
//! 3. **Compose**: [`Composer::compose`] paints the 2250x1580 card and encodes it as a
//!    [`RenderedCard`] (PNG bytes).
//!
//! The layout is fixed: photos are oriented from their EXIF flag, fitted into 1000x782 slots
//! stacked on the left, and the text column starts at x=1120. Composition is deterministic;
//! the same record always yields byte-identical PNG output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod form;
mod foundation;
mod layout;
mod record;
mod render;
mod text;

pub use assets::decode::{decode_photo, read_photo};
pub use assets::orient::{Orientation, normalize_orientation};
pub use config::{ComposeSettings, FONTS_DIR_ENV, SYSTEM_FONTS_ENV};
pub use form::{INCOMPLETE_FORM, IntentionForm, PhotoInput};
pub use foundation::core::{BACKGROUND, BLACK, GRAY, Point, Rect, Rgb8, Size, TEAL, Vec2};
pub use foundation::error::{IntentionError, IntentionResult};
pub use layout::card::{
    CANVAS, FaceRole, PHOTO_SLOT, PHOTO1_ORIGIN, PHOTO2_ORIGIN, TAG_PADDING, TAG_TEXT, TEXT_X,
    TEXT_Y, TextItem, TextMetrics, WRAP_WIDTH, Weight, anchor_bottom_right, plan_text,
};
pub use layout::fit::{center_offset, crop_to_aspect, fit_to_area, fitted_size};
pub use layout::wrap::wrap;
pub use record::{FitMode, IntentionRecord, Photo, download_file_name};
pub use render::compose::{Composed, Composer, RenderedCard, compose, prepare_photo};
pub use text::builtin::BuiltinFace;
pub use text::face::{
    BOLD_FACE, Face, FaceSource, Fallback, FontSet, FontWarning, OutlineFont, REGULAR_FACE,
    load_face,
};
pub use text::shape::TextBrushRgba8;
pub use text::typeset::{ShapedText, Typesetter};
