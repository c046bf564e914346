use image::{RgbImage, imageops::FilterType};

use crate::foundation::core::Size;

/// Largest size with `src`'s aspect ratio that fits inside `bounds`.
///
/// Equivalent to `ratio = min(bw / w, bh / h)` with each dimension truncated, computed in integer
/// arithmetic so the binding axis lands exactly on the box edge. The same formula applies whether
/// the source is larger or smaller than the box, so small photos are scaled up to touch it.
pub fn fitted_size(src: Size, bounds: Size) -> Size {
    if src.width == 0 || src.height == 0 {
        return Size::new(0, 0);
    }
    let (w, h) = (u64::from(src.width), u64::from(src.height));
    let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

    let (width, height) = if bw * h <= bh * w {
        (bw, h * bw / w)
    } else {
        (w * bh / h, bh)
    };
    Size::new((width as u32).max(1), (height as u32).max(1))
}

/// Resize `image` to [`fitted_size`] with a Lanczos filter.
pub fn fit_to_area(image: &RgbImage, bounds: Size) -> RgbImage {
    let target = fitted_size(Size::new(image.width(), image.height()), bounds);
    if target.width == image.width() && target.height == image.height() {
        return image.clone();
    }
    image::imageops::resize(image, target.width, target.height, FilterType::Lanczos3)
}

/// Offset that centers `inner` inside `outer` (floor division per axis).
pub fn center_offset(inner: Size, outer: Size) -> (i64, i64) {
    let dx = (i64::from(outer.width) - i64::from(inner.width)).div_euclid(2);
    let dy = (i64::from(outer.height) - i64::from(inner.height)).div_euclid(2);
    (dx, dy)
}

/// Center-crop `image` to the aspect ratio of `bounds`.
pub fn crop_to_aspect(image: &RgbImage, bounds: Size) -> RgbImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 || bounds.width == 0 || bounds.height == 0 {
        return image.clone();
    }

    // Compare w/h against bw/bh without floating point.
    let lhs = u64::from(w) * u64::from(bounds.height);
    let rhs = u64::from(h) * u64::from(bounds.width);
    let (cw, ch) = if lhs > rhs {
        // Too wide: keep full height.
        let cw = (u64::from(h) * u64::from(bounds.width) / u64::from(bounds.height)) as u32;
        (cw.max(1), h)
    } else {
        let ch = (u64::from(w) * u64::from(bounds.height) / u64::from(bounds.width)) as u32;
        (w, ch.max(1))
    };

    let (x, y) = center_offset(Size::new(cw, ch), Size::new(w, h));
    image::imageops::crop_imm(image, x as u32, y as u32, cw, ch).to_image()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
