use std::path::Path;

use super::*;
use crate::{
    foundation::core::{GRAY, TEAL},
    layout::card::TAG_TEXT,
    text::face::installed_outline_set,
};

#[test]
fn builtin_faces_shape_without_font_files() {
    let fonts = FontSet::builtin();
    let mut ts = Typesetter::new(&fonts).unwrap();

    let shaped = ts.shape(FaceRole::Title, "Ada", BLACK).unwrap();
    assert!(matches!(shaped, ShapedText::Builtin { .. }));
    // Title is 70px: 7px cells, 6 cells per character.
    assert_eq!(shaped.advance(), 3.0 * 42.0);
}

#[test]
fn metrics_match_shape() {
    let fonts = FontSet::builtin();
    let mut ts = Typesetter::new(&fonts).unwrap();

    let advance = ts.advance(FaceRole::Tag, "ok").unwrap();
    let ink = ts.ink_bounds(FaceRole::Tag, "ok", GRAY).unwrap();
    let shaped = ts.shape(FaceRole::Tag, "ok", GRAY).unwrap();
    assert_eq!(advance, shaped.advance());
    assert_eq!(ink, shaped.ink_bounds(BACKGROUND).unwrap());
    assert!(ink.x1 <= advance);
}

#[test]
fn builtin_shape_keeps_color() {
    let fonts = FontSet::builtin();
    let mut ts = Typesetter::new(&fonts).unwrap();
    match ts.shape(FaceRole::Body, "x", TEAL).unwrap() {
        ShapedText::Builtin { color, text, .. } => {
            assert_eq!(color, TEAL);
            assert_eq!(text, "x");
        }
        ShapedText::Outline { .. } => panic!("expected built-in shaping"),
    }
}

#[test]
fn outline_ink_is_whole_pixels_inside_the_run() {
    let Some(fonts) = installed_outline_set(Path::new("target/typeset-outline")) else {
        eprintln!("skipping: no installed sans-serif face");
        return;
    };
    let mut ts = Typesetter::new(&fonts).unwrap();

    let shaped = ts.shape(FaceRole::Tag, TAG_TEXT, GRAY).unwrap();
    assert!(matches!(shaped, ShapedText::Outline { .. }));
    let advance = shaped.advance();
    assert!(advance > 100.0 && advance < 600.0, "{advance}");

    let ink = shaped.ink_bounds(BACKGROUND).unwrap();
    assert!(ink.width() > 0.0 && ink.height() > 0.0, "{ink:?}");
    assert!(ink.height() < 30.0, "{ink:?}");
    for edge in [ink.x0, ink.y0, ink.x1, ink.y1] {
        assert_eq!(edge, edge.round(), "{ink:?}");
    }
    assert!(ink.x0 >= -2.0 && ink.x1 <= advance + 2.0, "{ink:?}");
}

#[test]
fn outline_whitespace_has_no_ink() {
    let Some(fonts) = installed_outline_set(Path::new("target/typeset-blank")) else {
        eprintln!("skipping: no installed sans-serif face");
        return;
    };
    let mut ts = Typesetter::new(&fonts).unwrap();
    let shaped = ts.shape(FaceRole::Body, "   ", TEAL).unwrap();
    assert!(shaped.advance() > 0.0);
    assert_eq!(shaped.ink_bounds(BACKGROUND).unwrap(), Rect::ZERO);
}

#[test]
fn renders_share_font_blobs() {
    let Some(fonts) = installed_outline_set(Path::new("target/typeset-blobs")) else {
        eprintln!("skipping: no installed sans-serif face");
        return;
    };
    let blob_id = |fonts: &FontSet| {
        let mut ts = Typesetter::new(fonts).unwrap();
        match ts.shape(FaceRole::Body, "x", BLACK).unwrap() {
            ShapedText::Outline { font, .. } => font.data.id(),
            ShapedText::Builtin { .. } => panic!("expected outline shaping"),
        }
    };
    assert_eq!(blob_id(&fonts), blob_id(&fonts));
}
