use image::RgbImage;

use crate::foundation::error::{IntentionError, IntentionResult};

/// How a photo is shaped into its 1000x782 slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Scale the whole photo into the slot, leaving background bars.
    #[default]
    Fit,
    /// Center-crop to the slot's aspect ratio first, so the photo fills the slot.
    Crop,
}

/// A decoded photo plus the metadata composition needs.
#[derive(Clone, Debug)]
pub struct Photo {
    /// Decoded pixels, not yet oriented.
    pub image: RgbImage,
    /// Raw EXIF orientation flag, if the source carried one.
    pub exif_orientation: Option<u16>,
    /// Slot shaping mode.
    pub fit: FitMode,
}

impl Photo {
    /// Wrap already-upright pixels.
    pub fn new(image: RgbImage) -> Self {
        Self {
            image,
            exif_orientation: None,
            fit: FitMode::Fit,
        }
    }

    /// Attach an EXIF orientation flag.
    pub fn with_orientation(mut self, flag: Option<u16>) -> Self {
        self.exif_orientation = flag;
        self
    }

    /// Select the slot shaping mode.
    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }
}

/// Everything one card is made of.
///
/// Built by the caller for a single render and passed by reference into the composer; nothing
/// about it is persisted.
#[derive(Clone, Debug)]
pub struct IntentionRecord {
    /// Person's name, rendered as the title.
    pub name: String,
    /// Country, rendered beside the name.
    pub country: String,
    /// "Goal" section body.
    pub goal: String,
    /// "Challenges" section body.
    pub challenges: String,
    /// "Commitment" section body.
    pub commitment: String,
    /// Upper photo.
    pub photo1: Photo,
    /// Lower photo.
    pub photo2: Photo,
}

impl IntentionRecord {
    /// Reject records with any blank text field.
    pub fn validate(&self) -> IntentionResult<()> {
        let fields = [
            ("name", &self.name),
            ("country", &self.country),
            ("goal", &self.goal),
            ("challenges", &self.challenges),
            ("commitment", &self.commitment),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(IntentionError::validation(format!(
                    "field '{label}' must be non-empty"
                )));
            }
        }
        Ok(())
    }

    /// Section headers paired with their bodies, in card order.
    pub fn sections(&self) -> [(&'static str, &str); 3] {
        [
            ("Goal", self.goal.as_str()),
            ("Challenges", self.challenges.as_str()),
            ("Commitment", self.commitment.as_str()),
        ]
    }

    /// File name offered for the rendered card.
    pub fn download_file_name(&self) -> String {
        download_file_name(&self.name)
    }
}

/// `<name with spaces removed>-Intention-01.png`.
pub fn download_file_name(name: &str) -> String {
    format!("{}-Intention-01.png", name.replace(' ', ""))
}
