//! Font faces and the fallback policy.
//!
//! A face is requested by a conventional file name (`LiberationSans-Bold`) from the configured
//! fonts directory. When the file is absent or unusable, [`FontSet::load`] falls back to an
//! installed sans-serif face of the same weight (if allowed) and then to the built-in bitmap
//! face, recording a [`FontWarning`] either way. Rendering never fails for lack of fonts.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    config::ComposeSettings,
    foundation::error::{IntentionError, IntentionResult},
    layout::card::{FaceRole, Weight},
    text::{builtin::BuiltinFace, shape::TextLayoutEngine},
};

/// File stem of the bold face.
pub const BOLD_FACE: &str = "LiberationSans-Bold";
/// File stem of the regular face.
pub const REGULAR_FACE: &str = "LiberationSans-Regular";

/// Installed families tried, in order, when a face file is missing.
const SYSTEM_FAMILIES: [&str; 4] = ["Liberation Sans", "Arimo", "DejaVu Sans", "Arial"];

impl Weight {
    /// Conventional file stem for this weight.
    pub fn face_name(self) -> &'static str {
        match self {
            Weight::Bold => BOLD_FACE,
            Weight::Regular => REGULAR_FACE,
        }
    }
}

/// Validated outline font data.
///
/// The bytes are held once; the parley and vello_cpu blobs built over them are shared by every
/// render, so glyph caches keyed on blob identity stay warm.
#[derive(Clone)]
pub struct OutlineFont {
    bytes: Arc<Vec<u8>>,
    index: u32,
    family: String,
    layout_blob: parley::fontique::Blob<u8>,
    raster_font: vello_cpu::peniko::FontData,
}

impl OutlineFont {
    /// Check that `bytes` hold a usable font and resolve its family name.
    pub fn from_bytes(
        bytes: Vec<u8>,
        index: u32,
        preferred_family: Option<&str>,
    ) -> IntentionResult<Self> {
        let bytes = Arc::new(bytes);
        let layout_blob = parley::fontique::Blob::new(bytes.clone() as SharedBytes);
        let engine = TextLayoutEngine::new(layout_blob.clone(), preferred_family)?;
        let raster_font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::new(bytes.clone() as SharedBytes),
            index,
        );
        Ok(Self {
            family: engine.family_name().to_string(),
            bytes,
            index,
            layout_blob,
            raster_font,
        })
    }

    /// Raw font file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Face index inside a collection file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Family name text is laid out with.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub(crate) fn layout_blob(&self) -> &parley::fontique::Blob<u8> {
        &self.layout_blob
    }

    pub(crate) fn raster_font(&self) -> &vello_cpu::peniko::FontData {
        &self.raster_font
    }
}

type SharedBytes = Arc<dyn AsRef<[u8]> + Send + Sync>;

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .finish()
    }
}

/// Where a face's glyphs come from.
#[derive(Clone, Debug)]
pub enum FaceSource {
    /// A TrueType/OpenType font.
    Outline(OutlineFont),
    /// The built-in bitmap face.
    Builtin(BuiltinFace),
}

/// A font at a specific pixel size.
#[derive(Clone, Debug)]
pub struct Face {
    source: FaceSource,
    size_px: f32,
}

impl Face {
    /// Outline face drawn at `size_px`.
    pub fn outline(font: OutlineFont, size_px: f32) -> Self {
        Self {
            source: FaceSource::Outline(font),
            size_px,
        }
    }

    /// Built-in bitmap face scaled for `size_px`.
    pub fn builtin(size_px: f32) -> Self {
        Self {
            source: FaceSource::Builtin(BuiltinFace::new(size_px)),
            size_px,
        }
    }

    /// Glyph source.
    pub fn source(&self) -> &FaceSource {
        &self.source
    }

    /// Requested pixel size.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// True when the face is the built-in bitmap face.
    pub fn is_builtin(&self) -> bool {
        matches!(self.source, FaceSource::Builtin(_))
    }

    /// Family name of an outline face.
    pub fn family(&self) -> Option<&str> {
        match &self.source {
            FaceSource::Outline(font) => Some(font.family()),
            FaceSource::Builtin(_) => None,
        }
    }
}

/// Load `<dir>/<name>.ttf` at `size_px`.
///
/// Any failure to read or parse the file is reported as [`IntentionError::MissingFont`]; the
/// caller decides how to fall back.
pub fn load_face(dir: &Path, name: &str, size_px: f32) -> IntentionResult<Face> {
    let path = dir.join(format!("{name}.ttf"));
    let bytes = std::fs::read(&path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "font file unreadable");
        IntentionError::missing_font(name, &path)
    })?;
    let font = OutlineFont::from_bytes(bytes, 0, None).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "font file unusable");
        IntentionError::missing_font(name, &path)
    })?;
    Ok(Face::outline(font, size_px))
}

/// What a missing face was replaced with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// An installed face.
    System {
        /// Family of the installed face.
        family: String,
    },
    /// The built-in bitmap face.
    Builtin,
}

/// Non-fatal notice that a requested face was unavailable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontWarning {
    /// Requested face name.
    pub face: String,
    /// Path that was probed.
    pub path: PathBuf,
    /// Replacement in use.
    pub fallback: Fallback,
}

impl fmt::Display for FontWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font '{}' not found at '{}'; ", self.face, self.path.display())?;
        match &self.fallback {
            Fallback::System { family } => write!(f, "using installed font '{family}'"),
            Fallback::Builtin => write!(
                f,
                "using the built-in face, which may be hard to read; install Liberation Sans for better results"
            ),
        }
    }
}

/// The four sized faces a card needs.
#[derive(Clone, Debug)]
pub struct FontSet {
    faces: [Face; 4],
    warnings: Vec<FontWarning>,
}

impl FontSet {
    /// Resolve every role's face, falling back as configured.
    pub fn load(settings: &ComposeSettings) -> Self {
        let mut system_db: Option<usvg::fontdb::Database> = None;
        let mut warnings = Vec::<FontWarning>::new();

        let faces = FaceRole::ALL.map(|role| {
            let name = role.weight().face_name();
            let size_px = role.size_px();
            match load_face(&settings.fonts_dir, name, size_px) {
                Ok(face) => face,
                Err(err) => {
                    let path = match err {
                        IntentionError::MissingFont { path, .. } => path,
                        _ => settings.fonts_dir.join(format!("{name}.ttf")),
                    };
                    let system = if settings.system_fonts {
                        let db = system_db.get_or_insert_with(load_system_fontdb);
                        system_face(db, role.weight(), size_px)
                    } else {
                        None
                    };
                    let (face, fallback) = match system {
                        Some(face) => {
                            let family = face.family().unwrap_or_default().to_string();
                            (face, Fallback::System { family })
                        }
                        None => (Face::builtin(size_px), Fallback::Builtin),
                    };
                    if !warnings.iter().any(|w| w.face == name) {
                        let warning = FontWarning {
                            face: name.to_string(),
                            path,
                            fallback,
                        };
                        tracing::warn!("{warning}");
                        warnings.push(warning);
                    }
                    face
                }
            }
        });

        Self { faces, warnings }
    }

    /// Built-in faces only, without touching the filesystem.
    pub fn builtin() -> Self {
        Self {
            faces: FaceRole::ALL.map(|role| Face::builtin(role.size_px())),
            warnings: Vec::new(),
        }
    }

    /// Face for `role`.
    pub fn face(&self, role: FaceRole) -> &Face {
        &self.faces[role.index()]
    }

    /// Fallbacks taken while loading.
    pub fn warnings(&self) -> &[FontWarning] {
        &self.warnings
    }
}

pub(crate) fn load_system_fontdb() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "loaded system font database");
    db
}

pub(crate) fn system_face(db: &usvg::fontdb::Database, weight: Weight, size_px: f32) -> Option<Face> {
    use usvg::fontdb;

    let mut families: Vec<fontdb::Family<'_>> = SYSTEM_FAMILIES
        .into_iter()
        .map(fontdb::Family::Name)
        .collect();
    families.push(fontdb::Family::SansSerif);

    let query = fontdb::Query {
        families: &families,
        weight: match weight {
            Weight::Bold => fontdb::Weight::BOLD,
            Weight::Regular => fontdb::Weight::NORMAL,
        },
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = db.query(&query)?;
    let family = db.face(id)?.families.first().map(|(name, _)| name.clone());
    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    let font = OutlineFont::from_bytes(bytes, index, family.as_deref()).ok()?;
    Some(Face::outline(font, size_px))
}

/// Copy an installed sans-serif face into `dir` under both conventional names and load it.
/// `None` when the host has no usable single-face font file.
#[cfg(test)]
pub(crate) fn installed_outline_set(dir: &Path) -> Option<FontSet> {
    let face = system_face(&load_system_fontdb(), Weight::Regular, 20.0)?;
    let FaceSource::Outline(font) = face.source() else {
        return None;
    };
    if font.index() != 0 {
        return None;
    }
    std::fs::create_dir_all(dir).ok()?;
    for name in [BOLD_FACE, REGULAR_FACE] {
        std::fs::write(dir.join(format!("{name}.ttf")), font.bytes()).ok()?;
    }
    let set = FontSet::load(&ComposeSettings::hermetic(dir));
    set.warnings().is_empty().then_some(set)
}

#[cfg(test)]
#[path = "../../tests/unit/text/face.rs"]
mod tests;
