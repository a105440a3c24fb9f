// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style attributes used for font matching: weight, style and stretch.

use core::fmt;

/// Visual weight class of a font face, on a scale from 1 to 999.
///
/// Installed faces report a single design weight; matching against a
/// requested weight is fuzzy unless strict resolution is requested.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 350.
    pub const SEMI_LIGHT: Self = Self(350);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Weight value of 950.
    pub const EXTRA_BLACK: Self = Self(950);

    /// Creates a new weight value, clamped to the valid range of 1 to 999.
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(1, 999))
    }

    /// Creates a weight from a raw request value, or `None` if the value is
    /// outside the valid range.
    pub fn from_wire(value: i64) -> Option<Self> {
        u16::try_from(value)
            .ok()
            .filter(|v| (1..=999).contains(v))
            .map(Self)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Parses a weight from the keywords `normal` and `bold` or a number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "normal" => Self::NORMAL,
            "bold" => Self::BOLD,
            _ => Self::from_wire(s.parse::<i64>().ok()?)?,
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            100 => "thin",
            200 => "extra-light",
            300 => "light",
            400 => "normal",
            500 => "medium",
            600 => "semi-bold",
            700 => "bold",
            800 => "extra-bold",
            900 => "black",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(keyword)
    }
}

/// Slant of a font face: upright, oblique or italic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub enum FontStyle {
    /// An upright face. This is the default value.
    #[default]
    Normal,
    /// A face that is artificially slanted.
    Oblique,
    /// A cursive or otherwise true italic face.
    Italic,
}

impl FontStyle {
    /// Creates a style from a raw request value (0, 1 or 2), or `None` if
    /// the value does not name a style.
    pub fn from_wire(value: i64) -> Option<Self> {
        Some(match value {
            0 => Self::Normal,
            1 => Self::Oblique,
            2 => Self::Italic,
            _ => return None,
        })
    }

    /// Returns the raw request value for this style.
    pub fn to_wire(self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::Oblique => 1,
            Self::Italic => 2,
        }
    }

    /// Parses a style from the keywords `normal`, `oblique` and `italic`.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "oblique" => Self::Oblique,
            "italic" => Self::Italic,
            _ => return None,
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Oblique => "oblique",
            Self::Italic => "italic",
        })
    }
}

/// Width class of a font face, on the usual 1 to 9 scale where 5 is normal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FontStretch(u8);

impl FontStretch {
    /// Stretch class 1.
    pub const ULTRA_CONDENSED: Self = Self(1);

    /// Stretch class 2.
    pub const EXTRA_CONDENSED: Self = Self(2);

    /// Stretch class 3.
    pub const CONDENSED: Self = Self(3);

    /// Stretch class 4.
    pub const SEMI_CONDENSED: Self = Self(4);

    /// Stretch class 5. This is the default value.
    pub const NORMAL: Self = Self(5);

    /// Stretch class 6.
    pub const SEMI_EXPANDED: Self = Self(6);

    /// Stretch class 7.
    pub const EXPANDED: Self = Self(7);

    /// Stretch class 8.
    pub const EXTRA_EXPANDED: Self = Self(8);

    /// Stretch class 9.
    pub const ULTRA_EXPANDED: Self = Self(9);

    /// Creates a new stretch class, clamped to the valid range of 1 to 9.
    pub fn new(stretch: u8) -> Self {
        Self(stretch.clamp(1, 9))
    }

    /// Creates a stretch class from a raw request value, or `None` if the
    /// value is outside the valid range.
    pub fn from_wire(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=9).contains(v))
            .map(Self)
    }

    /// Returns the underlying stretch class.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for FontStretch {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.0 {
            1 => "ultra-condensed",
            2 => "extra-condensed",
            3 => "condensed",
            4 => "semi-condensed",
            5 => "normal",
            6 => "semi-expanded",
            7 => "expanded",
            8 => "extra-expanded",
            _ => "ultra-expanded",
        })
    }
}
