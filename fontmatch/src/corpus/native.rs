// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The natively-indexed corpus strategy.

use super::super::provider::{FontProvider, NameFilter};
use super::super::query::FontQuery;
use super::super::record::{FontRecord, NameField};
use smallvec::SmallVec;
use tracing::warn;

/// A cacheless pass-through to a provider with native indexed search.
///
/// Identity and subfamily filters collapse into a single multi-field
/// exact-match query answered by the provider; family and fuzzy-style
/// lookups forward directly.
pub(crate) struct NativeCorpus<P> {
    provider: P,
}

impl<P: FontProvider> NativeCorpus<P> {
    /// Wraps the provider. Nothing is built up front.
    pub(crate) fn new(provider: P) -> Self {
        Self { provider }
    }

    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    pub(crate) fn identity_candidates(&self, query: &FontQuery) -> Vec<FontRecord> {
        let mut filters: SmallVec<[NameFilter<'_>; 3]> = SmallVec::new();
        if let Some(name) = query.postscript_name() {
            filters.push(NameFilter::new(NameField::Postscript, name));
        }
        if let Some(name) = query.full_name() {
            filters.push(NameFilter::new(NameField::Full, name));
        }
        if let Some(name) = query.subfamily_name() {
            filters.push(NameFilter::new(NameField::Subfamily, name));
        }
        match self.provider.filter(&filters) {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, "native identity filter failed");
                Vec::new()
            }
        }
    }
}
