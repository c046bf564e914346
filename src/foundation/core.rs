pub use kurbo::{Point, Rect, Vec2};

/// Straight (non-premultiplied) opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b, 255]`.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Card background.
pub const BACKGROUND: Rgb8 = Rgb8::new(221, 221, 221);
/// Name and section headers.
pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
/// Country and attribution tag.
pub const GRAY: Rgb8 = Rgb8::new(128, 128, 128);
/// Free-text bodies.
pub const TEAL: Rgb8 = Rgb8::new(0, 100, 100);

/// Integer pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Pixels.
    pub width: u32,
    /// Pixels.
    pub height: u32,
}

impl Size {
    /// `width` x `height` pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are at most `other`'s.
    pub fn fits_within(self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Rect anchored at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}
