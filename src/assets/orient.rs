use image::RgbImage;

/// Rotation implied by an EXIF orientation flag.
///
/// Only the three pure rotations are honored; every other flag (including mirrored variants)
/// leaves the photo untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// No rotation needed (flag absent, 1, or unsupported).
    Upright,
    /// Flag 3.
    Rotate180,
    /// Flag 6: rotate 270 degrees counter-clockwise (90 clockwise).
    Rotate270,
    /// Flag 8: rotate 90 degrees counter-clockwise (270 clockwise).
    Rotate90,
}

impl Orientation {
    /// Map an optional EXIF orientation flag to the rotation that corrects it.
    pub fn from_exif(flag: Option<u16>) -> Self {
        match flag {
            Some(3) => Self::Rotate180,
            Some(6) => Self::Rotate270,
            Some(8) => Self::Rotate90,
            _ => Self::Upright,
        }
    }
}

/// Rotate `image` so it displays upright according to its EXIF orientation `flag`.
///
/// Rotation angles are counter-clockwise; `image`'s `rotateN` helpers are clockwise, hence the
/// swapped 90/270 pairs below.
pub fn normalize_orientation(image: RgbImage, flag: Option<u16>) -> RgbImage {
    match Orientation::from_exif(flag) {
        Orientation::Upright => image,
        Orientation::Rotate180 => image::imageops::rotate180(&image),
        Orientation::Rotate270 => image::imageops::rotate90(&image),
        Orientation::Rotate90 => image::imageops::rotate270(&image),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/orient.rs"]
mod tests;
