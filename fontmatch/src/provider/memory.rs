// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory font provider over explicitly registered metadata.

use super::super::attributes::{FontStretch, FontStyle, FontWeight};
use super::super::family::Family;
use super::super::fold::NameKey;
use super::super::record::{FaceId, FaceNames, FontRecord};
use super::{FontProvider, NameFilter, ProviderCapabilities, ProviderError};
use hashbrown::HashMap;
use std::sync::Arc;

/// Metadata describing one font face to register with a
/// [`MemoryProvider`].
#[derive(Clone, Debug)]
pub struct FaceMetadata {
    family: Arc<str>,
    names: FaceNames,
    weight: FontWeight,
    style: FontStyle,
    stretch: FontStretch,
    path: Arc<str>,
}

impl FaceMetadata {
    /// Creates metadata for a face of the given family backed by the
    /// given file path.
    pub fn new(family: impl Into<Arc<str>>, path: impl Into<Arc<str>>) -> Self {
        Self {
            family: family.into(),
            names: FaceNames::new(),
            weight: FontWeight::default(),
            style: FontStyle::default(),
            stretch: FontStretch::default(),
            path: path.into(),
        }
    }

    /// Adds a localized Postscript name variant.
    pub fn postscript_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.names.push_postscript(name);
        self
    }

    /// Adds a localized full name variant.
    pub fn full_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.names.push_full(name);
        self
    }

    /// Adds a localized subfamily name variant.
    pub fn subfamily_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.names.push_subfamily(name);
        self
    }

    /// Sets the design weight of the face.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the slant of the face.
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the width class of the face.
    pub fn stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }
}

/// A [`FontProvider`] over faces registered up front.
///
/// Families form in registration order, grouped by case-insensitive
/// family name; faces keep their registration order within a family.
/// By default every capability is advertised so either corpus strategy
/// can back a match engine.
#[derive(Clone, Debug)]
pub struct MemoryProvider {
    capabilities: ProviderCapabilities,
    families: Vec<Family>,
    family_index: HashMap<Box<[u8]>, usize>,
}

impl MemoryProvider {
    /// Creates a provider advertising every capability.
    pub fn new(faces: impl IntoIterator<Item = FaceMetadata>) -> Self {
        Self::with_capabilities(faces, ProviderCapabilities::ALL)
    }

    /// Creates a provider advertising only the given capabilities.
    ///
    /// Useful to mimic platforms that offer per-font introspection but no
    /// native indexed search, or the reverse.
    pub fn with_capabilities(
        faces: impl IntoIterator<Item = FaceMetadata>,
        capabilities: ProviderCapabilities,
    ) -> Self {
        let mut grouped: Vec<(Arc<str>, Vec<FontRecord>)> = Vec::new();
        let mut group_index: HashMap<Box<[u8]>, usize> = HashMap::new();
        for face in faces {
            let record = FontRecord::new(
                FaceId::new(),
                face.family.clone(),
                face.names,
                face.weight,
                face.style,
                face.stretch,
                face.path,
            );
            let key: Box<[u8]> = NameKey::from_str(&face.family).as_bytes().into();
            match group_index.get(&key) {
                Some(&index) => grouped[index].1.push(record),
                None => {
                    group_index.insert(key, grouped.len());
                    grouped.push((face.family, vec![record]));
                }
            }
        }
        let mut families = Vec::with_capacity(grouped.len());
        let mut family_index = HashMap::with_capacity(grouped.len());
        for (name, records) in grouped {
            let key: Box<[u8]> = NameKey::from_str(&name).as_bytes().into();
            family_index.insert(key, families.len());
            families.push(Family::new(name, records));
        }
        Self {
            capabilities,
            families,
            family_index,
        }
    }

    fn records(&self) -> impl Iterator<Item = &FontRecord> {
        self.families.iter().flat_map(|family| family.fonts().iter())
    }
}

impl FontProvider for MemoryProvider {
    fn capabilities(&self) -> ProviderCapabilities {
        self.capabilities
    }

    fn families(&self) -> Result<Vec<Family>, ProviderError> {
        if !self.capabilities.enumeration {
            return Err(ProviderError::UnsupportedOperation("family enumeration"));
        }
        Ok(self.families.clone())
    }

    fn family(&self, name: &str) -> Result<Option<Family>, ProviderError> {
        let key = NameKey::from_str(name);
        Ok(self
            .family_index
            .get(key.as_bytes())
            .map(|&index| self.families[index].clone()))
    }

    fn filter(&self, filters: &[NameFilter<'_>]) -> Result<Vec<FontRecord>, ProviderError> {
        if !self.capabilities.indexed_search {
            return Err(ProviderError::UnsupportedOperation("indexed search"));
        }
        Ok(self
            .records()
            .filter(|record| {
                filters
                    .iter()
                    .all(|filter| record.has_name(filter.field, filter.value))
            })
            .cloned()
            .collect())
    }

    fn first_match(
        &self,
        family: &Family,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Result<Option<FontRecord>, ProviderError> {
        Ok(self
            .ordered_matches(family, weight, stretch, style)?
            .into_iter()
            .next())
    }

    fn ordered_matches(
        &self,
        family: &Family,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Result<Vec<FontRecord>, ProviderError> {
        let mut ranked: Vec<(AxisDistance, &FontRecord)> = family
            .fonts()
            .iter()
            .map(|record| (AxisDistance::between(record, weight, stretch, style), record))
            .collect();
        // Stable sort keeps enumeration order as the final tie-break.
        ranked.sort_by_key(|(distance, _)| *distance);
        Ok(ranked.into_iter().map(|(_, record)| record.clone()).collect())
    }
}

/// Similarity ranking key: exact beats near on each axis, and the axes
/// weigh weight > style > stretch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct AxisDistance {
    weight: u16,
    style: u8,
    stretch: u8,
}

impl AxisDistance {
    fn between(
        record: &FontRecord,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Self {
        Self {
            weight: record.weight().value().abs_diff(weight.value()),
            style: style_distance(record.style(), style),
            stretch: record.stretch().value().abs_diff(stretch.value()),
        }
    }
}

/// The two slanted forms are closer to each other than either is to an
/// upright face.
fn style_distance(a: FontStyle, b: FontStyle) -> u8 {
    use FontStyle::*;
    match (a, b) {
        _ if a == b => 0,
        (Oblique, Italic) | (Italic, Oblique) => 1,
        _ => 2,
    }
}
