use crate::foundation::error::{IntentionError, IntentionResult};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied pixel onto an opaque RGB pixel.
pub fn over_opaque(dst: [u8; 3], src: PremulRgba8) -> [u8; 3] {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a premultiplied RGBA8 layer onto an opaque RGB8 buffer of the same pixel count.
pub fn over_rgb_in_place(dst_rgb: &mut [u8], src_premul: &[u8]) -> IntentionResult<()> {
    if !dst_rgb.len().is_multiple_of(3)
        || !src_premul.len().is_multiple_of(4)
        || dst_rgb.len() / 3 != src_premul.len() / 4
    {
        return Err(IntentionError::validation(
            "over_rgb_in_place expects rgb8 and rgba8 buffers with equal pixel counts",
        ));
    }
    for (d, s) in dst_rgb.chunks_exact_mut(3).zip(src_premul.chunks_exact(4)) {
        let out = over_opaque([d[0], d[1], d[2]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}
