use crate::{
    foundation::{
        core::{Point, Rect, Rgb8, Size, Vec2},
        error::{IntentionError, IntentionResult},
    },
    layout::card::TextItem,
    render::composite::over_opaque,
    text::typeset::{ShapedText, Typesetter},
};

/// Rasterize `items` onto a transparent premultiplied layer the size of `canvas`.
pub fn rasterize_text(
    typesetter: &mut Typesetter<'_>,
    canvas: Size,
    items: &[TextItem],
) -> IntentionResult<vello_cpu::Pixmap> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| IntentionError::validation("text layer width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| IntentionError::validation("text layer height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    for item in items {
        let shaped = typesetter.shape(item.role, &item.text, item.color)?;
        draw_shaped(&mut ctx, &shaped, item.origin);
    }
    Ok(finish(ctx, w, h))
}

/// Rasterize `shaped` alone and return the box of pixels that change when it is composited over
/// `background`, relative to the draw origin.
///
/// Glyph outlines can overhang the layout box on every side, so the run is drawn inside a margin
/// of one line height. The margin is a whole number of pixels, so the result matches what the
/// run paints at any integer origin on the card.
pub(crate) fn outline_ink_bounds(shaped: &ShapedText, background: Rgb8) -> IntentionResult<Rect> {
    let ShapedText::Outline { layout, .. } = shaped else {
        return Err(IntentionError::validation("ink scan expects an outline run"));
    };
    let margin = f64::from(layout.height()).ceil().max(1.0);
    let w = pixmap_extent(f64::from(layout.full_width()).ceil() + 2.0 * margin)?;
    let h = pixmap_extent(3.0 * margin)?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    draw_shaped(&mut ctx, shaped, Point::new(margin, margin));
    let pixmap = finish(ctx, w, h);

    let bg = [background.r, background.g, background.b];
    let width = u32::from(w);
    let mut extent: Option<(u32, u32, u32, u32)> = None;
    for (i, px) in pixmap.data_as_u8_slice().chunks_exact(4).enumerate() {
        if over_opaque(bg, [px[0], px[1], px[2], px[3]]) == bg {
            continue;
        }
        let (x, y) = (i as u32 % width, i as u32 / width);
        extent = Some(match extent {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    Ok(match extent {
        None => Rect::ZERO,
        Some((x0, y0, x1, y1)) => Rect::new(
            f64::from(x0) - margin,
            f64::from(y0) - margin,
            f64::from(x1 + 1) - margin,
            f64::from(y1 + 1) - margin,
        ),
    })
}

fn pixmap_extent(px: f64) -> IntentionResult<u16> {
    if px.is_finite() && (1.0..=f64::from(u16::MAX)).contains(&px) {
        Ok(px as u16)
    } else {
        Err(IntentionError::validation("text run too large to measure"))
    }
}

fn finish(mut ctx: vello_cpu::RenderContext, w: u16, h: u16) -> vello_cpu::Pixmap {
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap
}

fn draw_shaped(ctx: &mut vello_cpu::RenderContext, shaped: &ShapedText, origin: Point) {
    match shaped {
        ShapedText::Outline { layout, font } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                    let mut x = run.offset();
                    let baseline = run.baseline();
                    let glyphs = run.glyphs().map(|g| {
                        let gx = x + g.x;
                        x += g.advance;
                        vello_cpu::Glyph {
                            id: g.id,
                            x: gx,
                            y: baseline - g.y,
                        }
                    });
                    ctx.glyph_run(font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        }
        ShapedText::Builtin { face, text, color } => {
            // Snap to whole pixels so cell edges stay crisp.
            let offset = Vec2::new(origin.x.round(), origin.y.round());
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, 255,
            ));
            for rect in face.ink_rects(text) {
                ctx.fill_rect(&rect_to_cpu(rect + offset));
            }
        }
    }
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text_layer.rs"]
mod tests;
