// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The match pipeline.

use super::attributes::{FontStyle, FontWeight};
use super::corpus::{Corpus, CorpusKind, CorpusRequest};
use super::error::{Error, Status};
use super::family::Family;
use super::provider::FontProvider;
use super::query::{FontPropertyKey, FontQuery};
use super::record::FontRecord;
use super::request::{self, QueryParseError};
use core::sync::atomic::{AtomicU8, Ordering};
use tracing::trace;

// Bonus for a face matching the effective value of an axis. An axis the
// caller explicitly requested always outranks any combination of
// incidentally matched defaults, and the axes weigh weight > style >
// stretch within each tier.
const WEIGHT_EXPLICIT: u32 = 12;
const STYLE_EXPLICIT: u32 = 11;
const STRETCH_EXPLICIT: u32 = 10;
const WEIGHT_DEFAULT: u32 = 4;
const STYLE_DEFAULT: u32 = 3;
const STRETCH_DEFAULT: u32 = 2;

/// Resolves structured font queries against an installed-font corpus.
///
/// An engine is built once over a [`FontProvider`]; the corpus snapshot it
/// reads is fixed for the engine's lifetime. Matching is read-only, so a
/// shared engine may serve concurrent calls.
pub struct MatchEngine<P> {
    corpus: Corpus<P>,
    status: AtomicU8,
}

impl<P: FontProvider> MatchEngine<P> {
    /// Probes the provider, builds the requested corpus variant and
    /// returns the ready engine.
    ///
    /// Fails with [`Error::Unsupported`] when the requested strategy (or,
    /// for [`CorpusRequest::Automatic`], every strategy) is unavailable.
    /// There is no re-initialization; build a new engine to pick a
    /// different strategy.
    pub fn new(provider: P, request: CorpusRequest) -> Result<Self, Error> {
        Ok(Self {
            corpus: Corpus::select(provider, request)?,
            status: AtomicU8::new(Status::Ok as u8),
        })
    }

    /// Returns which corpus strategy backs this engine.
    pub fn corpus_kind(&self) -> CorpusKind {
        self.corpus.kind()
    }

    /// Returns the outcome class of the most recent call on this engine.
    pub fn last_status(&self) -> Status {
        Status::from_u8(self.status.load(Ordering::Relaxed))
    }

    /// Resolves `query` to the path of the single best-matching installed
    /// font.
    ///
    /// `None` is a success outcome meaning no installed font satisfies
    /// the query. With `strict` set, every explicitly supplied weight,
    /// style or stretch must match exactly instead of resolving to the
    /// nearest face.
    pub fn matching_font(&self, query: &FontQuery, strict: bool) -> Option<String> {
        let result = self.resolve(query, strict);
        self.status.store(Status::Ok as u8, Ordering::Relaxed);
        result.map(|record| record.path().to_owned())
    }

    /// Decodes a flat request and resolves it like
    /// [`matching_font`](Self::matching_font).
    ///
    /// A malformed request surfaces as an error and is recorded in the
    /// status channel; it is never folded into the "no match" outcome.
    pub fn matching_font_for_request(
        &self,
        input: &str,
        strict: bool,
    ) -> Result<Option<String>, QueryParseError> {
        match request::parse_query(input) {
            Ok(query) => Ok(self.matching_font(&query, strict)),
            Err(error) => {
                self.status
                    .store(Status::ParseError as u8, Ordering::Relaxed);
                Err(error)
            }
        }
    }

    /// Resolves a bare font name with bold/italic flags.
    ///
    /// The name is tried as a Postscript name, then a full name, then a
    /// family name; exact style passes run before progressively looser
    /// ones, ending in a fuzzy pass. The first hit wins.
    pub fn resolve_name(&self, name: &str, bold: bool, italic: bool) -> Option<String> {
        let weight = if bold {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        };
        let style = if italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        let passes = [
            (Some(weight), Some(style), true),
            (Some(weight), None, true),
            (None, Some(style), true),
            (Some(weight), Some(style), false),
        ];
        for (weight, style, strict) in passes {
            for key in [
                FontPropertyKey::PostscriptName,
                FontPropertyKey::FullName,
                FontPropertyKey::FamilyName,
            ] {
                let mut query = match key {
                    FontPropertyKey::PostscriptName => FontQuery::new().with_postscript_name(name),
                    FontPropertyKey::FullName => FontQuery::new().with_full_name(name),
                    _ => FontQuery::new().with_family_name(name),
                };
                if let Some(weight) = weight {
                    query = query.with_weight(weight);
                }
                if let Some(style) = style {
                    query = query.with_style(style);
                }
                if let Some(path) = self.matching_font(&query, strict) {
                    return Some(path);
                }
            }
        }
        None
    }

    fn resolve(&self, query: &FontQuery, strict: bool) -> Option<FontRecord> {
        // Identity filters: exact name lookups that either pin a candidate
        // set or fail the whole match.
        let identity_requested = query.postscript_name().is_some() || query.full_name().is_some();
        let candidates = if identity_requested {
            let candidates = self.corpus.identity_candidates(query);
            if candidates.is_empty() {
                trace!("identity filters matched no installed face");
                return None;
            }
            candidates
        } else {
            // Without an identity filter the subfamily constraint folds
            // into style resolution below.
            Vec::new()
        };

        let family = match query.family_name() {
            Some(name) => match self.corpus.family(name) {
                Some(family) => Some(family),
                None => {
                    trace!(family = name, "requested family is not installed");
                    return None;
                }
            },
            None => None,
        };

        match (family, candidates.is_empty()) {
            // An identity-pinned face inside a requested family: scan the
            // family for a face-identical record. The style axes are
            // ignored; the identity filter already pinned an exact face.
            (Some(family), false) => family
                .fonts()
                .iter()
                .find(|record| candidates.contains(record))
                .cloned(),
            (Some(family), true) => self.resolve_style(&family, query, strict),
            (None, false) => candidates.into_iter().next(),
            // No anchoring criterion at all.
            (None, true) => None,
        }
    }

    fn resolve_style(&self, family: &Family, query: &FontQuery, strict: bool) -> Option<FontRecord> {
        if strict {
            return self.resolve_style_strict(family, query);
        }
        let weight = query.effective_weight();
        let stretch = query.effective_stretch();
        let style = query.effective_style();
        if let Some(subfamily) = query.subfamily_name() {
            // Scan the similarity-ordered list for the first face carrying
            // the requested subfamily name.
            self.corpus
                .ordered_matches(family, weight, stretch, style)
                .into_iter()
                .find(|record| record.has_subfamily_name(subfamily))
        } else {
            self.corpus.first_match(family, weight, stretch, style)
        }
    }

    fn resolve_style_strict(&self, family: &Family, query: &FontQuery) -> Option<FontRecord> {
        let mut best: Option<(&FontRecord, u32)> = None;
        for record in family.fonts() {
            // Every explicitly supplied criterion is a hard requirement.
            if query.weight().is_some_and(|weight| record.weight() != weight) {
                continue;
            }
            if query.style().is_some_and(|style| record.style() != style) {
                continue;
            }
            if query
                .stretch()
                .is_some_and(|stretch| record.stretch() != stretch)
            {
                continue;
            }
            if query
                .subfamily_name()
                .is_some_and(|name| !record.has_subfamily_name(name))
            {
                continue;
            }
            let score = score_face(record, query);
            // Strictly-greater keeps the first face found on ties.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                trace!(path = record.path(), score, "new best strict candidate");
                best = Some((record, score));
            }
        }
        best.map(|(record, _)| record.clone())
    }
}

impl<P> core::fmt::Debug for MatchEngine<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatchEngine")
            .field(
                "corpus",
                match self.corpus {
                    Corpus::Indexed(_) => &"Indexed",
                    Corpus::Native(_) => &"Native",
                },
            )
            .field("status", &Status::from_u8(self.status.load(Ordering::Relaxed)))
            .finish()
    }
}

fn score_face(record: &FontRecord, query: &FontQuery) -> u32 {
    let mut score = 0;
    if record.weight() == query.effective_weight() {
        score += if query.weight().is_some() {
            WEIGHT_EXPLICIT
        } else {
            WEIGHT_DEFAULT
        };
    }
    if record.style() == query.effective_style() {
        score += if query.style().is_some() {
            STYLE_EXPLICIT
        } else {
            STYLE_DEFAULT
        };
    }
    if record.stretch() == query.effective_stretch() {
        score += if query.stretch().is_some() {
            STRETCH_EXPLICIT
        } else {
            STRETCH_DEFAULT
        };
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::FontStretch;
    use crate::record::{FaceId, FaceNames};

    fn face(weight: FontWeight, style: FontStyle, stretch: FontStretch) -> FontRecord {
        FontRecord::new(
            FaceId::new(),
            "Score",
            FaceNames::new(),
            weight,
            style,
            stretch,
            "/fonts/score.ttf",
        )
    }

    #[test]
    fn explicit_axis_outranks_incidental_defaults() {
        let exact = face(FontWeight::BOLD, FontStyle::Normal, FontStretch::NORMAL);
        let query = FontQuery::new().with_weight(FontWeight::BOLD);
        // Explicit weight plus incidental style and stretch defaults.
        assert_eq!(
            score_face(&exact, &query),
            WEIGHT_EXPLICIT + STYLE_DEFAULT + STRETCH_DEFAULT
        );

        // A face matching every default still scores below one explicit
        // weight hit alone.
        let defaults = face(FontWeight::NORMAL, FontStyle::Normal, FontStretch::NORMAL);
        let all_defaults = score_face(&defaults, &FontQuery::new());
        assert_eq!(all_defaults, WEIGHT_DEFAULT + STYLE_DEFAULT + STRETCH_DEFAULT);
        let explicit_tier = [WEIGHT_EXPLICIT, STYLE_EXPLICIT, STRETCH_EXPLICIT];
        for bonus in explicit_tier {
            assert!(
                bonus > all_defaults,
                "one explicit hit must outrank every incidental default"
            );
        }
    }

    #[test]
    fn mismatched_axes_earn_nothing() {
        let record = face(FontWeight::LIGHT, FontStyle::Italic, FontStretch::CONDENSED);
        assert_eq!(score_face(&record, &FontQuery::new()), 0);
    }
}
