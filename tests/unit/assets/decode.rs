use std::io::Cursor;

use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_drops_alpha() {
    let src = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]).unwrap();
    let photo = decode_photo(&png_bytes(image::DynamicImage::ImageRgba8(src))).unwrap();

    assert_eq!(photo.image.dimensions(), (2, 1));
    assert_eq!(photo.image.get_pixel(0, 0).0, [100, 50, 200]);
    assert_eq!(photo.image.get_pixel(1, 0).0, [1, 2, 3]);
}

#[test]
fn png_without_exif_has_no_orientation() {
    let src = image::RgbImage::from_pixel(3, 3, image::Rgb([9, 9, 9]));
    let photo = decode_photo(&png_bytes(image::DynamicImage::ImageRgb8(src))).unwrap();
    assert_eq!(photo.exif_orientation, None);
    assert_eq!(photo.fit, FitMode::Fit);
}

#[test]
fn garbage_bytes_are_invalid_image() {
    let err = decode_photo(b"definitely not an image").unwrap_err();
    assert!(matches!(err, IntentionError::InvalidImage(_)), "{err}");
}

#[test]
fn exif_flag_maps_rotations() {
    use image::metadata::Orientation as O;
    assert_eq!(exif_flag(O::NoTransforms), None);
    assert_eq!(exif_flag(O::Rotate180), Some(3));
    assert_eq!(exif_flag(O::Rotate90), Some(6));
    assert_eq!(exif_flag(O::Rotate270), Some(8));
}

#[test]
fn read_photo_reports_missing_file() {
    let err = read_photo(std::path::Path::new("target/does-not-exist/photo.png")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}
