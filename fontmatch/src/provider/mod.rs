// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the match pipeline and a font platform.
//!
//! A [`FontProvider`] is the abstract view of an installed-font platform:
//! it groups faces into families, hands out [`FontRecord`]s carrying
//! localized name lists, and offers two primitive operations the pipeline
//! treats as black boxes: exact multi-field name filtering and
//! nearest-style lookup within a family. Platform providers (DirectWrite,
//! CoreText, fontconfig) implement this trait outside this crate;
//! [`MemoryProvider`] is the bundled implementation over explicitly
//! registered metadata.

mod memory;

pub use memory::{FaceMetadata, MemoryProvider};

use super::attributes::{FontStretch, FontStyle, FontWeight};
use super::family::Family;
use super::record::{FontRecord, NameField};
use thiserror::Error;

/// Corpus-access operations a provider advertises at startup.
///
/// The capability probe runs once, before any corpus is built; the
/// answers are assumed stable for the process lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct ProviderCapabilities {
    /// Every family and face can be enumerated exhaustively.
    ///
    /// Required to build a pre-indexed corpus.
    pub enumeration: bool,
    /// The provider answers multi-field exact-name queries natively.
    ///
    /// Required for the natively-indexed corpus.
    pub indexed_search: bool,
}

impl ProviderCapabilities {
    /// Both corpus-access strategies are available.
    pub const ALL: Self = Self {
        enumeration: true,
        indexed_search: true,
    };

    /// Only exhaustive enumeration is available.
    pub const ENUMERATION_ONLY: Self = Self {
        enumeration: true,
        indexed_search: false,
    };
}

/// One exact-match constraint of a multi-field name filter.
#[derive(Copy, Clone, Debug)]
pub struct NameFilter<'a> {
    /// The name category to constrain.
    pub field: NameField,
    /// The required name, compared case-insensitively.
    pub value: &'a str,
}

impl<'a> NameFilter<'a> {
    /// Creates a filter constraining the given name category.
    pub fn new(field: NameField, value: &'a str) -> Self {
        Self { field, value }
    }
}

/// An unexpected failure inside the font platform.
///
/// These never abort a match: enumeration-level failures skip the
/// affected record, and lookup-level failures degrade to "no match".
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProviderError {
    /// The provider does not implement the requested operation.
    #[error("font provider does not support {0}")]
    UnsupportedOperation(&'static str),

    /// The platform failed while reading font metadata.
    #[error("font platform failure: {0}")]
    Platform(String),
}

/// Abstract access to an installed-font platform.
///
/// Every operation is synchronous and reads a fixed snapshot: providers
/// must not observe fonts installed or removed after construction.
pub trait FontProvider {
    /// Returns the corpus-access operations this provider supports.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Returns every family in enumeration order.
    fn families(&self) -> Result<Vec<Family>, ProviderError>;

    /// Looks up a family by exact, case-insensitive name.
    fn family(&self, name: &str) -> Result<Option<Family>, ProviderError>;

    /// Returns every face matching all of the given name constraints, in
    /// enumeration order.
    ///
    /// Only meaningful when [`ProviderCapabilities::indexed_search`] is
    /// advertised.
    fn filter(&self, filters: &[NameFilter<'_>]) -> Result<Vec<FontRecord>, ProviderError>;

    /// Returns the single face of `family` nearest to the requested
    /// attributes under the provider's own similarity ranking.
    ///
    /// The ranking must prefer an exact value on each axis and otherwise
    /// the nearest available one, weighing weight over style over stretch.
    fn first_match(
        &self,
        family: &Family,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Result<Option<FontRecord>, ProviderError>;

    /// Returns every face of `family` ordered by the provider's own
    /// similarity ranking for the requested attributes, best first.
    fn ordered_matches(
        &self,
        family: &Family,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Result<Vec<FontRecord>, ProviderError>;
}
