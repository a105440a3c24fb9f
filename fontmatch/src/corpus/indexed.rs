// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pre-indexed corpus strategy.

use super::super::error::Error;
use super::super::family::Family;
use super::super::fold::NameKey;
use super::super::provider::FontProvider;
use super::super::query::FontQuery;
use super::super::record::FontRecord;
use hashbrown::HashMap;
use tracing::{debug, warn};

/// Name caches built once by exhaustively enumerating the provider.
///
/// Used for providers that offer only per-font introspection. All three
/// indexes key on the shared case fold; the full-name index keeps every
/// distinct face sharing a name, since coexisting fonts legitimately
/// reuse identical full names.
pub(crate) struct IndexedCorpus<P> {
    provider: P,
    postscript: HashMap<Box<[u8]>, FontRecord>,
    full_names: HashMap<Box<[u8]>, Vec<FontRecord>>,
    families: HashMap<Box<[u8]>, Family>,
}

impl<P: FontProvider> IndexedCorpus<P> {
    /// Builds the caches by walking every family and face of the
    /// provider.
    ///
    /// A face the provider fails to enumerate is skipped; a provider that
    /// cannot enumerate at all fails construction.
    pub(crate) fn new(provider: P) -> Result<Self, Error> {
        let families = match provider.families() {
            Ok(families) => families,
            Err(error) => {
                warn!(%error, "font enumeration failed");
                return Err(Error::Unsupported("font enumeration failed"));
            }
        };
        let mut corpus = Self {
            provider,
            postscript: HashMap::new(),
            full_names: HashMap::new(),
            families: HashMap::new(),
        };
        let mut face_count = 0_usize;
        for family in families {
            for record in family.fonts() {
                face_count += 1;
                for name in record.postscript_names() {
                    let key: Box<[u8]> = NameKey::from_str(name).as_bytes().into();
                    // A duplicate Postscript name across faces is
                    // pathological; the first face indexed keeps the name.
                    corpus.postscript.entry(key).or_insert_with(|| record.clone());
                }
                for name in record.full_names() {
                    let key: Box<[u8]> = NameKey::from_str(name).as_bytes().into();
                    let faces = corpus.full_names.entry(key).or_default();
                    if !faces.contains(record) {
                        faces.push(record.clone());
                    }
                }
            }
            let key: Box<[u8]> = NameKey::from_str(family.name()).as_bytes().into();
            corpus.families.entry(key).or_insert(family);
        }
        debug!(
            families = corpus.families.len(),
            faces = face_count,
            postscript_names = corpus.postscript.len(),
            full_names = corpus.full_names.len(),
            "built indexed corpus"
        );
        Ok(corpus)
    }

    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    pub(crate) fn identity_candidates(&self, query: &FontQuery) -> Vec<FontRecord> {
        // The Postscript name pins at most one face.
        let postscript_hit = match query.postscript_name() {
            Some(name) => {
                let key = NameKey::from_str(name);
                match self.postscript.get(key.as_bytes()) {
                    Some(record) => Some(record),
                    None => return Vec::new(),
                }
            }
            None => None,
        };

        // The full name can legitimately pin several coexisting faces.
        let full_hits = match query.full_name() {
            Some(name) => {
                let key = NameKey::from_str(name);
                match self.full_names.get(key.as_bytes()) {
                    Some(records) => Some(records),
                    None => return Vec::new(),
                }
            }
            None => None,
        };

        let mut candidates = match (postscript_hit, full_hits) {
            (Some(record), Some(records)) => {
                // Both identity filters present: their face sets must
                // intersect.
                if !records.contains(record) {
                    return Vec::new();
                }
                vec![record.clone()]
            }
            (Some(record), None) => vec![record.clone()],
            (None, Some(records)) => records.clone(),
            (None, None) => unreachable!("caller checked for an identity filter"),
        };

        if let Some(subfamily) = query.subfamily_name() {
            candidates.retain(|record| record.has_subfamily_name(subfamily));
        }
        candidates
    }

    pub(crate) fn family(&self, name: &str) -> Option<Family> {
        let key = NameKey::from_str(name);
        self.families.get(key.as_bytes()).cloned()
    }
}
