use super::*;

fn marked(width: u32, height: u32) -> RgbImage {
    // Red marker in the top-left pixel, everything else white.
    let mut img = RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));
    img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
    img
}

#[test]
fn absent_and_unknown_flags_are_identity() {
    for flag in [None, Some(1), Some(2), Some(4), Some(5), Some(7), Some(99)] {
        let out = normalize_orientation(marked(4, 2), flag);
        assert_eq!(out.dimensions(), (4, 2), "flag {flag:?}");
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0], "flag {flag:?}");
    }
}

#[test]
fn flag_3_rotates_180() {
    let out = normalize_orientation(marked(4, 2), Some(3));
    assert_eq!(out.dimensions(), (4, 2));
    assert_eq!(out.get_pixel(3, 1).0, [255, 0, 0]);
}

#[test]
fn flag_6_turns_landscape_into_portrait_clockwise() {
    let out = normalize_orientation(marked(4, 2), Some(6));
    assert_eq!(out.dimensions(), (2, 4));
    // Rotating 270 counter-clockwise carries the top-left corner to the top-right.
    assert_eq!(out.get_pixel(1, 0).0, [255, 0, 0]);
}

#[test]
fn flag_8_turns_landscape_into_portrait_counter_clockwise() {
    let out = normalize_orientation(marked(4, 2), Some(8));
    assert_eq!(out.dimensions(), (2, 4));
    assert_eq!(out.get_pixel(0, 3).0, [255, 0, 0]);
}

#[test]
fn from_exif_covers_the_rotation_domain() {
    assert_eq!(Orientation::from_exif(None), Orientation::Upright);
    assert_eq!(Orientation::from_exif(Some(3)), Orientation::Rotate180);
    assert_eq!(Orientation::from_exif(Some(6)), Orientation::Rotate270);
    assert_eq!(Orientation::from_exif(Some(8)), Orientation::Rotate90);
}
