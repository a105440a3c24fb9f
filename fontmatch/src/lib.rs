// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of structured font queries against an installed-font corpus.
//!
//! A [`FontQuery`] names a font by identity (Postscript name, full name,
//! family and subfamily names) and by style attributes (weight, style,
//! stretch). A [`MatchEngine`] resolves it to the file path of the single
//! best-matching installed face: identity names match exactly and
//! case-insensitively, style attributes resolve to the nearest installed
//! face unless strict matching is requested.
//!
//! The engine reads the corpus through one of two interchangeable
//! strategies selected when it is built: a name cache constructed by
//! exhaustively enumerating the provider, or a pass-through to a provider
//! that already answers indexed multi-field queries. Both resolve every
//! query to the same outcome; [`CorpusRequest`] pins one explicitly when
//! the choice matters.
//!
//! ```
//! use fontmatch::{
//!     CorpusRequest, FaceMetadata, FontQuery, FontWeight, MatchEngine, MemoryProvider,
//! };
//!
//! let provider = MemoryProvider::new([
//!     FaceMetadata::new("Sample", "/fonts/Sample-Regular.ttf")
//!         .postscript_name("Sample-Regular")
//!         .full_name("Sample Regular")
//!         .subfamily_name("Regular"),
//!     FaceMetadata::new("Sample", "/fonts/Sample-Bold.ttf")
//!         .postscript_name("Sample-Bold")
//!         .full_name("Sample Bold")
//!         .subfamily_name("Bold")
//!         .weight(FontWeight::BOLD),
//! ]);
//! let engine = MatchEngine::new(provider, CorpusRequest::Automatic)?;
//!
//! let query = FontQuery::new()
//!     .with_family_name("sample")
//!     .with_weight(FontWeight::BOLD);
//! assert_eq!(
//!     engine.matching_font(&query, false).as_deref(),
//!     Some("/fonts/Sample-Bold.ttf"),
//! );
//! # Ok::<(), fontmatch::Error>(())
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod attributes;
mod corpus;
mod engine;
mod error;
mod family;
mod fold;
mod provider;
mod query;
mod record;
mod request;

pub use attributes::{FontStretch, FontStyle, FontWeight};
pub use corpus::{CorpusKind, CorpusRequest};
pub use engine::MatchEngine;
pub use error::{Error, Status};
pub use family::Family;
pub use provider::{
    FaceMetadata, FontProvider, MemoryProvider, NameFilter, ProviderCapabilities, ProviderError,
};
pub use query::{FontPropertyKey, FontQuery, QueryValue};
pub use record::{FaceId, FaceNames, FontRecord, NameField};
pub use request::{parse_query, QueryParseError};
