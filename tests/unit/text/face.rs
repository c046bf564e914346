use super::*;

fn missing_dir() -> PathBuf {
    PathBuf::from("target").join("no-such-fonts-dir")
}

#[test]
fn load_face_reports_missing_font() {
    let err = load_face(&missing_dir(), BOLD_FACE, 70.0).unwrap_err();
    match err {
        IntentionError::MissingFont { name, path } => {
            assert_eq!(name, BOLD_FACE);
            assert!(path.ends_with("LiberationSans-Bold.ttf"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_face_treats_corrupt_file_as_missing() {
    let dir = PathBuf::from("target").join("corrupt-fonts");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("LiberationSans-Regular.ttf"), b"not a font").unwrap();

    let err = load_face(&dir, REGULAR_FACE, 35.0).unwrap_err();
    assert!(matches!(err, IntentionError::MissingFont { .. }), "{err}");
}

#[test]
fn missing_files_fall_back_to_builtin_with_one_warning_per_face() {
    let set = FontSet::load(&ComposeSettings::hermetic(missing_dir()));
    for role in FaceRole::ALL {
        let face = set.face(role);
        assert!(face.is_builtin(), "{role:?}");
        assert_eq!(face.size_px(), role.size_px());
    }

    let names: Vec<_> = set.warnings().iter().map(|w| w.face.as_str()).collect();
    assert_eq!(names, [BOLD_FACE, REGULAR_FACE]);
    assert!(set.warnings().iter().all(|w| w.fallback == Fallback::Builtin));
}

#[test]
fn warning_message_names_face_and_remedy() {
    let w = FontWarning {
        face: BOLD_FACE.to_string(),
        path: PathBuf::from("fonts/LiberationSans-Bold.ttf"),
        fallback: Fallback::Builtin,
    };
    let msg = w.to_string();
    assert!(msg.contains("LiberationSans-Bold"));
    assert!(msg.contains("Liberation Sans"));

    let w = FontWarning {
        fallback: Fallback::System {
            family: "DejaVu Sans".to_string(),
        },
        ..w
    };
    assert!(w.to_string().contains("DejaVu Sans"));
}

#[test]
fn builtin_set_has_no_warnings() {
    let set = FontSet::builtin();
    assert!(set.warnings().is_empty());
    assert!(set.face(FaceRole::Title).is_builtin());
    assert_eq!(set.face(FaceRole::Tag).family(), None);
}

#[test]
fn weights_map_to_conventional_names() {
    assert_eq!(Weight::Bold.face_name(), "LiberationSans-Bold");
    assert_eq!(Weight::Regular.face_name(), "LiberationSans-Regular");
}

#[test]
fn load_face_reads_an_outline_font() {
    let dir = PathBuf::from("target").join("outline-fonts-face");
    let Some(set) = installed_outline_set(&dir) else {
        eprintln!("skipping: no installed sans-serif face");
        return;
    };

    let face = load_face(&dir, REGULAR_FACE, 35.0).unwrap();
    assert!(!face.is_builtin());
    assert_eq!(face.size_px(), 35.0);
    assert_eq!(face.family(), set.face(FaceRole::Body).family());

    let FaceSource::Outline(font) = face.source() else {
        panic!("expected an outline face");
    };
    assert_eq!(font.index(), 0);
    assert!(!font.bytes().is_empty());
    assert!(!font.family().is_empty());
}

#[test]
fn outline_font_rejects_garbage() {
    assert!(OutlineFont::from_bytes(b"not a font".to_vec(), 0, None).is_err());
}

#[test]
fn system_fallback_uses_installed_faces_when_present() {
    let settings = ComposeSettings {
        fonts_dir: missing_dir(),
        system_fonts: true,
    };
    let installed = system_face(&load_system_fontdb(), Weight::Regular, 35.0).is_some();
    let set = FontSet::load(&settings);

    assert_eq!(set.warnings().len(), 2);
    let body = set.warnings().iter().find(|w| w.face == REGULAR_FACE).unwrap();
    match &body.fallback {
        Fallback::System { family } => {
            assert!(installed);
            assert_eq!(set.face(FaceRole::Body).family(), Some(family.as_str()));
        }
        Fallback::Builtin => assert!(!installed),
    }
    assert_eq!(set.face(FaceRole::Body).is_builtin(), !installed);
}
