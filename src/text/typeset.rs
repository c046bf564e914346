use crate::{
    foundation::{
        core::{BACKGROUND, BLACK, Rect, Rgb8},
        error::IntentionResult,
    },
    layout::card::{FaceRole, TextMetrics},
    render::text_layer::outline_ink_bounds,
    text::{
        builtin::BuiltinFace,
        face::{FaceSource, FontSet},
        shape::{TextBrushRgba8, TextLayoutEngine},
    },
};

/// Per-render shaping state over an immutable [`FontSet`].
///
/// Layout contexts are mutable, so each render builds its own; the font data they register is
/// shared with the [`FontSet`].
pub struct Typesetter<'a> {
    fonts: &'a FontSet,
    engines: [Option<TextLayoutEngine>; 4],
}

/// A shaped run ready to measure or rasterize.
pub enum ShapedText {
    /// Run laid out by parley in an outline face.
    Outline {
        /// Single-line layout; glyph positions are relative to the draw origin.
        layout: parley::Layout<TextBrushRgba8>,
        /// Font the glyph ids refer to.
        font: vello_cpu::peniko::FontData,
    },
    /// Run in the built-in bitmap face.
    Builtin {
        /// Scaled face.
        face: BuiltinFace,
        /// Characters to draw.
        text: String,
        /// Fill color.
        color: Rgb8,
    },
}

impl<'a> Typesetter<'a> {
    /// Prepare one layout engine per outline face in `fonts`.
    pub fn new(fonts: &'a FontSet) -> IntentionResult<Self> {
        let mut engines: [Option<TextLayoutEngine>; 4] = Default::default();
        for role in FaceRole::ALL {
            let FaceSource::Outline(font) = fonts.face(role).source() else {
                continue;
            };
            engines[role.index()] = Some(TextLayoutEngine::new(
                font.layout_blob().clone(),
                Some(font.family()),
            )?);
        }
        Ok(Self { fonts, engines })
    }

    /// Shape `text` in the face assigned to `role`.
    pub fn shape(&mut self, role: FaceRole, text: &str, color: Rgb8) -> IntentionResult<ShapedText> {
        let fonts = self.fonts;
        let face = fonts.face(role);
        match (face.source(), self.engines[role.index()].as_mut()) {
            (FaceSource::Outline(font), Some(engine)) => {
                let layout = engine.layout_line(text, face.size_px(), color.into())?;
                Ok(ShapedText::Outline {
                    layout,
                    font: font.raster_font().clone(),
                })
            }
            (FaceSource::Builtin(builtin), _) => Ok(ShapedText::Builtin {
                face: *builtin,
                text: text.to_string(),
                color,
            }),
            (FaceSource::Outline(_), None) => Ok(ShapedText::Builtin {
                face: BuiltinFace::new(face.size_px()),
                text: text.to_string(),
                color,
            }),
        }
    }
}

impl TextMetrics for Typesetter<'_> {
    fn advance(&mut self, role: FaceRole, text: &str) -> IntentionResult<f64> {
        Ok(self.shape(role, text, BLACK)?.advance())
    }

    fn ink_bounds(&mut self, role: FaceRole, text: &str, color: Rgb8) -> IntentionResult<Rect> {
        self.shape(role, text, color)?.ink_bounds(BACKGROUND)
    }
}

impl ShapedText {
    /// Horizontal advance, trailing whitespace included.
    pub fn advance(&self) -> f64 {
        match self {
            Self::Outline { layout, .. } => f64::from(layout.full_width()),
            Self::Builtin { face, text, .. } => face.advance(text),
        }
    }

    /// Whole-pixel box of what the run visibly paints over `background` when drawn at an
    /// integer origin, relative to that origin. Zero for runs that paint nothing.
    pub fn ink_bounds(&self, background: Rgb8) -> IntentionResult<Rect> {
        match self {
            Self::Outline { .. } => outline_ink_bounds(self, background),
            Self::Builtin { face, text, .. } => Ok(face.bounds(text)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/typeset.rs"]
mod tests;
