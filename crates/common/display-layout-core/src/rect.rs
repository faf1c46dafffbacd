use std::fmt;

/// Rectangle in the OS convention: `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RawRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RawRect {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Rectangle whose `right` and `bottom` are the last pixel inside it.
///
/// Monitor and work areas are stored in this form. Window rectangles are not;
/// they stay as [`RawRect`] because they are only ever compared with each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Oblong {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Oblong {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Converts an exclusive OS rectangle into the inclusive form.
    #[must_use]
    pub const fn from_raw(raw: RawRect) -> Self {
        Self::new(raw.left, raw.top, raw.right - 1, raw.bottom - 1)
    }

    /// Number of pixel columns covered.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Number of pixel rows covered.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    #[must_use]
    pub const fn contains(&self, other: &Oblong) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Multiplies every coordinate by `percent / 100`, rounding to the nearest pixel.
    #[must_use]
    pub fn scaled(&self, percent: f64) -> Self {
        let factor = percent / 100.0;
        let scale = |v: i32| (f64::from(v) * factor).round() as i32;
        Self::new(
            scale(self.left),
            scale(self.top),
            scale(self.right),
            scale(self.bottom),
        )
    }
}

impl From<RawRect> for Oblong {
    fn from(raw: RawRect) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Oblong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
