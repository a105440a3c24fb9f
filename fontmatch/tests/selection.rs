// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for corpus strategy selection and capability probing.

use crate::util::{sample_faces, sample_provider};
use fontmatch::{
    CorpusKind, CorpusRequest, Error, MatchEngine, MemoryProvider, ProviderCapabilities, Status,
};

fn provider_with(capabilities: ProviderCapabilities) -> MemoryProvider {
    MemoryProvider::with_capabilities(sample_faces(), capabilities)
}

#[test]
fn automatic_selection_prefers_native_search() {
    let engine = MatchEngine::new(sample_provider(), CorpusRequest::Automatic).unwrap();
    assert_eq!(engine.corpus_kind(), CorpusKind::Native);
}

#[test]
fn automatic_selection_falls_back_to_the_index() {
    let provider = provider_with(ProviderCapabilities::ENUMERATION_ONLY);
    let engine = MatchEngine::new(provider, CorpusRequest::Automatic).unwrap();
    assert_eq!(engine.corpus_kind(), CorpusKind::Indexed);
}

#[test]
fn automatic_selection_fails_without_any_capability() {
    let provider = provider_with(ProviderCapabilities::default());
    let error = MatchEngine::new(provider, CorpusRequest::Automatic).unwrap_err();
    assert!(matches!(error, Error::Unsupported(_)), "got: {error:?}");
    assert_eq!(Status::from(&error), Status::Unsupported);
}

#[test]
fn pinned_native_never_falls_back() {
    let provider = provider_with(ProviderCapabilities::ENUMERATION_ONLY);
    let error = MatchEngine::new(provider, CorpusRequest::Native).unwrap_err();
    assert!(matches!(error, Error::Unsupported(_)), "got: {error:?}");
}

#[test]
fn pinned_index_never_upgrades() {
    let engine = MatchEngine::new(sample_provider(), CorpusRequest::Indexed).unwrap();
    assert_eq!(engine.corpus_kind(), CorpusKind::Indexed);
}

#[test]
fn pinned_index_requires_enumeration() {
    let provider = provider_with(ProviderCapabilities {
        enumeration: false,
        indexed_search: true,
    });
    let error = MatchEngine::new(provider, CorpusRequest::Indexed).unwrap_err();
    assert!(matches!(error, Error::Unsupported(_)), "got: {error:?}");
}

#[test]
fn pinned_strategies_resolve_like_each_other() {
    // A pinned engine is a full engine, not a degraded one.
    let indexed = MatchEngine::new(sample_provider(), CorpusRequest::Indexed).unwrap();
    let native = MatchEngine::new(sample_provider(), CorpusRequest::Native).unwrap();
    let query = fontmatch::FontQuery::new().with_family_name("Sample");
    assert_eq!(
        indexed.matching_font(&query, false),
        native.matching_font(&query, false),
    );
}
