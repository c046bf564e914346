//! Form input: the fields a person fills in before a card is rendered.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    assets::decode::read_photo,
    foundation::error::{IntentionError, IntentionResult},
    record::{FitMode, IntentionRecord, download_file_name},
};

/// Message returned for any incomplete submission.
pub const INCOMPLETE_FORM: &str = "please fill in all fields and upload both images";

/// An uploaded photo.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PhotoInput {
    /// Image file; relative paths resolve against the form's directory.
    pub path: PathBuf,
    /// Slot shaping mode.
    #[serde(default)]
    pub fit: FitMode,
}

impl PhotoInput {
    /// Letterboxed photo at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fit: FitMode::Fit,
        }
    }
}

/// Raw, possibly incomplete submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntentionForm {
    /// Person's name.
    pub name: String,
    /// Country shown beside the name.
    pub country: String,
    /// Goal text.
    pub goal: String,
    /// Challenges text.
    pub challenges: String,
    /// Commitment text.
    pub commitment: String,
    /// Upper photo.
    pub photo1: Option<PhotoInput>,
    /// Lower photo.
    pub photo2: Option<PhotoInput>,
}

impl IntentionForm {
    /// Parse a form from JSON.
    pub fn from_json_reader(reader: impl Read) -> IntentionResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| IntentionError::validation(format!("parse form JSON: {e}")))
    }

    /// Read and parse a JSON form file.
    pub fn read_json(path: &Path) -> IntentionResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open form '{}'", path.display()))?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }

    /// Reject the submission unless every text field is filled in and both photos are present.
    pub fn validate(&self) -> IntentionResult<()> {
        let texts = [
            &self.name,
            &self.country,
            &self.goal,
            &self.challenges,
            &self.commitment,
        ];
        let complete = texts.iter().all(|t| !t.trim().is_empty())
            && self.photo1.is_some()
            && self.photo2.is_some();
        if complete {
            Ok(())
        } else {
            Err(IntentionError::validation(INCOMPLETE_FORM))
        }
    }

    /// Validate, then read and decode both photos into a record.
    pub fn load(&self, root: &Path) -> IntentionResult<IntentionRecord> {
        self.validate()?;
        let (Some(p1), Some(p2)) = (&self.photo1, &self.photo2) else {
            return Err(IntentionError::validation(INCOMPLETE_FORM));
        };

        let load_photo = |input: &PhotoInput| -> IntentionResult<_> {
            let path = if input.path.is_absolute() {
                input.path.clone()
            } else {
                root.join(&input.path)
            };
            Ok(read_photo(&path)?.with_fit(input.fit))
        };

        Ok(IntentionRecord {
            name: self.name.clone(),
            country: self.country.clone(),
            goal: self.goal.clone(),
            challenges: self.challenges.clone(),
            commitment: self.commitment.clone(),
            photo1: load_photo(p1)?,
            photo2: load_photo(p2)?,
        })
    }

    /// `<name with spaces removed>-Intention-01.png`.
    pub fn download_file_name(&self) -> String {
        download_file_name(&self.name)
    }
}
