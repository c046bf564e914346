use crate::foundation::error::{IntentionError, IntentionResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<crate::foundation::core::Rgb8> for TextBrushRgba8 {
    fn from(c: crate::foundation::core::Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Parley contexts bound to a single registered font.
///
/// Each engine owns its own font collection so a family name resolves to exactly the face it was
/// built from, independent of anything installed on the host.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font` and pick the family to lay out with.
    ///
    /// `preferred_family` selects among the families of a collection file; otherwise the first
    /// registered family wins.
    pub fn new(
        font: parley::fontique::Blob<u8>,
        preferred_family: Option<&str>,
    ) -> IntentionResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(font, None);

        let mut names = Vec::with_capacity(families.len());
        for (id, _) in &families {
            if let Some(name) = font_ctx.collection.family_name(*id) {
                names.push(name.to_string());
            }
        }
        let family_name = preferred_family
            .and_then(|want| names.iter().find(|n| n.as_str() == want).cloned())
            .or_else(|| names.first().cloned())
            .ok_or_else(|| IntentionError::validation("no font families registered from font bytes"))?;

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family the engine lays text out with.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` as a single unbroken line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> IntentionResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(IntentionError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}
