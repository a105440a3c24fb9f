// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corpus-access strategies.
//!
//! The match pipeline reads the installed-font corpus through one common
//! capability surface with two interchangeable implementations behind it:
//! a pre-indexed cache built by exhaustive enumeration
//! ([`IndexedCorpus`]), and a thin pass-through to a provider with native
//! indexed search ([`NativeCorpus`]). A given engine selects exactly one
//! of them when it is built and never switches afterwards; both must
//! resolve every query to the same outcome over the same provider data.

mod indexed;
mod native;

pub(crate) use indexed::IndexedCorpus;
pub(crate) use native::NativeCorpus;

use super::attributes::{FontStretch, FontStyle, FontWeight};
use super::error::Error;
use super::family::Family;
use super::provider::FontProvider;
use super::query::FontQuery;
use super::record::FontRecord;
use tracing::{debug, warn};

/// The two corpus-access strategies.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CorpusKind {
    /// A name cache built up front from exhaustive enumeration.
    Indexed,
    /// A pass-through to a provider with native indexed search.
    Native,
}

/// Which corpus-access strategy to build.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum CorpusRequest {
    /// Probe capabilities and pick the best supported strategy,
    /// preferring native indexed search.
    #[default]
    Automatic,
    /// Require the pre-indexed strategy; fail if enumeration is
    /// unsupported rather than falling back.
    Indexed,
    /// Require the native strategy; fail if indexed search is
    /// unsupported rather than falling back.
    Native,
}

/// A corpus built over provider `P` with one of the two strategies.
pub(crate) enum Corpus<P> {
    Indexed(IndexedCorpus<P>),
    Native(NativeCorpus<P>),
}

impl<P: FontProvider> Corpus<P> {
    /// Probes the provider and builds the requested corpus variant.
    pub(crate) fn select(provider: P, request: CorpusRequest) -> Result<Self, Error> {
        let capabilities = provider.capabilities();
        let corpus = match request {
            CorpusRequest::Automatic => {
                if capabilities.indexed_search {
                    Self::Native(NativeCorpus::new(provider))
                } else if capabilities.enumeration {
                    Self::Indexed(IndexedCorpus::new(provider)?)
                } else {
                    return Err(Error::Unsupported(
                        "provider offers neither indexed search nor enumeration",
                    ));
                }
            }
            CorpusRequest::Native => {
                if !capabilities.indexed_search {
                    return Err(Error::Unsupported(
                        "provider does not offer native indexed search",
                    ));
                }
                Self::Native(NativeCorpus::new(provider))
            }
            CorpusRequest::Indexed => {
                if !capabilities.enumeration {
                    return Err(Error::Unsupported(
                        "provider does not offer exhaustive enumeration",
                    ));
                }
                Self::Indexed(IndexedCorpus::new(provider)?)
            }
        };
        debug!(kind = ?corpus.kind(), "selected corpus strategy");
        Ok(corpus)
    }

    pub(crate) fn kind(&self) -> CorpusKind {
        match self {
            Self::Indexed(_) => CorpusKind::Indexed,
            Self::Native(_) => CorpusKind::Native,
        }
    }

    fn provider(&self) -> &P {
        match self {
            Self::Indexed(corpus) => corpus.provider(),
            Self::Native(corpus) => corpus.provider(),
        }
    }

    /// Resolves the identity filters of `query` to a candidate set.
    ///
    /// Must only be called when the query carries a Postscript or full
    /// name; an empty result means those filters matched nothing and the
    /// whole match fails. The subfamily filter, when present, is already
    /// applied to the result.
    pub(crate) fn identity_candidates(&self, query: &FontQuery) -> Vec<FontRecord> {
        match self {
            Self::Indexed(corpus) => corpus.identity_candidates(query),
            Self::Native(corpus) => corpus.identity_candidates(query),
        }
    }

    /// Looks up a family by exact, case-insensitive name.
    pub(crate) fn family(&self, name: &str) -> Option<Family> {
        match self {
            Self::Indexed(corpus) => corpus.family(name),
            Self::Native(corpus) => match corpus.provider().family(name) {
                Ok(family) => family,
                Err(error) => {
                    warn!(%error, family = name, "family lookup failed");
                    None
                }
            },
        }
    }

    /// Returns the face of `family` nearest to the requested attributes.
    ///
    /// The ranking itself belongs to the provider; both strategies
    /// forward to it so their outcomes cannot drift apart.
    pub(crate) fn first_match(
        &self,
        family: &Family,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Option<FontRecord> {
        match self.provider().first_match(family, weight, stretch, style) {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, family = family.name(), "nearest-style lookup failed");
                None
            }
        }
    }

    /// Returns the faces of `family` ordered by similarity, best first.
    pub(crate) fn ordered_matches(
        &self,
        family: &Family,
        weight: FontWeight,
        stretch: FontStretch,
        style: FontStyle,
    ) -> Vec<FontRecord> {
        match self
            .provider()
            .ordered_matches(family, weight, stretch, style)
        {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, family = family.name(), "ordered style lookup failed");
                Vec::new()
            }
        }
    }
}
