use std::path::PathBuf;

/// Environment variable overriding [`ComposeSettings::fonts_dir`].
pub const FONTS_DIR_ENV: &str = "INTENTIONS_FONTS_DIR";
/// Environment variable toggling [`ComposeSettings::system_fonts`] (`0`/`false` disables).
pub const SYSTEM_FONTS_ENV: &str = "INTENTIONS_SYSTEM_FONTS";

/// Knobs for font resolution.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeSettings {
    /// Directory holding `LiberationSans-Bold.ttf` and `LiberationSans-Regular.ttf`.
    pub fonts_dir: PathBuf,
    /// Try an installed sans-serif face before the built-in one when a file is missing.
    pub system_fonts: bool,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            fonts_dir: PathBuf::from("fonts"),
            system_fonts: true,
        }
    }
}

impl ComposeSettings {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let fonts_dir = std::env::var_os(FONTS_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.fonts_dir);
        let system_fonts = std::env::var(SYSTEM_FONTS_ENV)
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.system_fonts);
        Self {
            fonts_dir,
            system_fonts,
        }
    }

    /// Settings that never touch installed fonts; missing files go straight to the built-in face.
    pub fn hermetic(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
            system_fonts: false,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
