// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured font queries.

use super::attributes::{FontStretch, FontStyle, FontWeight};

/// The closed set of properties a font query can constrain.
///
/// Each key carries a stable wire identifier used by the flat request
/// format decoded in [`parse_query`](crate::parse_query).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FontPropertyKey {
    /// Exact, case-insensitive Postscript name of a face.
    PostscriptName,
    /// Exact, case-insensitive full name of a face.
    FullName,
    /// Exact, case-insensitive family name.
    FamilyName,
    /// Exact, case-insensitive subfamily (face) name, such as `"Bold"`.
    SubfamilyName,
    /// Requested weight; fuzzy unless strict resolution is requested.
    Weight,
    /// Requested slant; fuzzy unless strict resolution is requested.
    Style,
    /// Requested width class; fuzzy unless strict resolution is requested.
    Stretch,
}

impl FontPropertyKey {
    /// Returns the stable wire identifier of this key.
    pub const fn wire_id(self) -> u8 {
        match self {
            Self::PostscriptName => 0,
            Self::FullName => 1,
            Self::FamilyName => 2,
            Self::SubfamilyName => 3,
            Self::Weight => 4,
            Self::Style => 5,
            Self::Stretch => 6,
        }
    }

    /// Returns the key for a wire identifier, or `None` if the identifier
    /// is unassigned.
    pub const fn from_wire_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::PostscriptName,
            1 => Self::FullName,
            2 => Self::FamilyName,
            3 => Self::SubfamilyName,
            4 => Self::Weight,
            5 => Self::Style,
            6 => Self::Stretch,
            _ => return None,
        })
    }
}

/// A value attached to a [`FontPropertyKey`] in a request.
///
/// The four name keys carry strings; weight, style and stretch carry
/// integers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum QueryValue {
    /// A name value.
    Name(String),
    /// A numeric value.
    Number(i64),
}

/// A structured font query: identity names plus style attributes.
///
/// Each property appears at most once and insertion order is irrelevant.
/// Identity names are always matched exactly and case-insensitively;
/// weight, style and stretch resolve fuzzily unless strict matching is
/// requested.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FontQuery {
    postscript_name: Option<String>,
    full_name: Option<String>,
    family_name: Option<String>,
    subfamily_name: Option<String>,
    weight: Option<FontWeight>,
    style: Option<FontStyle>,
    stretch: Option<FontStretch>,
}

impl FontQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested Postscript name.
    pub fn with_postscript_name(mut self, name: impl Into<String>) -> Self {
        self.postscript_name = Some(name.into());
        self
    }

    /// Sets the requested full name.
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// Sets the requested family name.
    pub fn with_family_name(mut self, name: impl Into<String>) -> Self {
        self.family_name = Some(name.into());
        self
    }

    /// Sets the requested subfamily name.
    pub fn with_subfamily_name(mut self, name: impl Into<String>) -> Self {
        self.subfamily_name = Some(name.into());
        self
    }

    /// Sets the requested weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the requested style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the requested stretch.
    pub fn with_stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = Some(stretch);
        self
    }

    /// Returns the requested Postscript name, if any.
    pub fn postscript_name(&self) -> Option<&str> {
        self.postscript_name.as_deref()
    }

    /// Returns the requested full name, if any.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Returns the requested family name, if any.
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Returns the requested subfamily name, if any.
    pub fn subfamily_name(&self) -> Option<&str> {
        self.subfamily_name.as_deref()
    }

    /// Returns the explicitly requested weight, if any.
    pub fn weight(&self) -> Option<FontWeight> {
        self.weight
    }

    /// Returns the explicitly requested style, if any.
    pub fn style(&self) -> Option<FontStyle> {
        self.style
    }

    /// Returns the explicitly requested stretch, if any.
    pub fn stretch(&self) -> Option<FontStretch> {
        self.stretch
    }

    /// Returns the weight fuzzy resolution works against: the explicit
    /// request, or the default weight.
    pub fn effective_weight(&self) -> FontWeight {
        self.weight.unwrap_or_default()
    }

    /// Returns the style fuzzy resolution works against: the explicit
    /// request, or the default style.
    pub fn effective_style(&self) -> FontStyle {
        self.style.unwrap_or_default()
    }

    /// Returns the stretch fuzzy resolution works against: the explicit
    /// request, or the default stretch.
    pub fn effective_stretch(&self) -> FontStretch {
        self.stretch.unwrap_or_default()
    }
}
