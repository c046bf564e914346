use super::*;

const SLOT: Size = Size::new(1000, 782);

#[test]
fn landscape_photo_is_width_bound() {
    assert_eq!(fitted_size(Size::new(800, 600), SLOT), Size::new(1000, 750));
    assert_eq!(fitted_size(Size::new(4000, 1000), SLOT), Size::new(1000, 250));
}

#[test]
fn portrait_photo_is_height_bound() {
    assert_eq!(fitted_size(Size::new(600, 800), SLOT), Size::new(586, 782));
}

#[test]
fn exact_slot_is_unchanged() {
    assert_eq!(fitted_size(SLOT, SLOT), SLOT);
}

#[test]
fn fitted_size_never_exceeds_slot_and_keeps_aspect() {
    let dims = [1u32, 2, 3, 7, 17, 99, 333, 782, 1000, 1001, 1999, 4032, 6000];
    for &w in &dims {
        for &h in &dims {
            let out = fitted_size(Size::new(w, h), SLOT);
            assert!(out.fits_within(SLOT), "{w}x{h} -> {out:?}");
            assert!(out.width == SLOT.width || out.height == SLOT.height, "{w}x{h} -> {out:?}");

            // Aspect preserved within one pixel of rounding on the non-binding axis.
            let expect_h = f64::from(out.width) * f64::from(h) / f64::from(w);
            let expect_w = f64::from(out.height) * f64::from(w) / f64::from(h);
            let ok = (f64::from(out.height) - expect_h).abs() <= 1.0 + 1e-9
                || (f64::from(out.width) - expect_w).abs() <= 1.0 + 1e-9;
            assert!(ok, "{w}x{h} -> {out:?}");
        }
    }
}

#[test]
fn fit_to_area_resizes_pixels() {
    let img = RgbImage::from_pixel(200, 100, image::Rgb([10, 200, 30]));
    let out = fit_to_area(&img, SLOT);
    assert_eq!(out.dimensions(), (1000, 500));
    let px = out.get_pixel(500, 250).0;
    for (got, want) in px.iter().zip([10u8, 200, 30]) {
        assert!(got.abs_diff(want) <= 2, "{px:?}");
    }
}

#[test]
fn center_offset_uses_floor_division() {
    assert_eq!(center_offset(Size::new(1000, 750), SLOT), (0, 16));
    assert_eq!(center_offset(Size::new(587, 782), SLOT), (206, 0));
    assert_eq!(center_offset(Size::new(1000, 781), SLOT), (0, 0));
}

#[test]
fn crop_to_aspect_trims_the_long_axis() {
    let wide = RgbImage::new(2000, 782);
    let out = crop_to_aspect(&wide, SLOT);
    assert_eq!(out.dimensions(), (1000, 782));

    let tall = RgbImage::new(500, 1000);
    let out = crop_to_aspect(&tall, SLOT);
    assert_eq!(out.dimensions(), (500, 391));
}

#[test]
fn crop_keeps_the_center() {
    let mut wide = RgbImage::from_pixel(300, 100, image::Rgb([0, 0, 0]));
    wide.put_pixel(150, 50, image::Rgb([255, 0, 0]));
    let out = crop_to_aspect(&wide, Size::new(1, 1));
    assert_eq!(out.dimensions(), (100, 100));
    assert_eq!(out.get_pixel(50, 50).0, [255, 0, 0]);
}
