// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared sample corpus and helpers for the integration tests.

use fontmatch::{
    CorpusRequest, FaceMetadata, FontQuery, FontStretch, FontStyle, FontWeight, MatchEngine,
    MemoryProvider,
};

pub(crate) const SAMPLE_REGULAR: &str = "/fonts/Sample-Regular.ttf";
pub(crate) const SAMPLE_BOLD: &str = "/fonts/Sample-Bold.ttf";
pub(crate) const SAMPLE_ITALIC: &str = "/fonts/Sample-Italic.ttf";
pub(crate) const SAMPLE_BOLD_ITALIC: &str = "/fonts/Sample-BoldItalic.ttf";
pub(crate) const TWIN_ONE: &str = "/fonts/Twin-One.ttf";
pub(crate) const TWIN_TWO: &str = "/fonts/Twin-Two.ttf";
pub(crate) const YAHEI_REGULAR: &str = "/fonts/YaHei-Regular.ttc";
pub(crate) const YAHEI_BOLD: &str = "/fonts/YaHei-Bold.ttc";
pub(crate) const SPREAD_CONDENSED: &str = "/fonts/Spread-Condensed.ttf";
pub(crate) const SPREAD_NORMAL: &str = "/fonts/Spread-Normal.ttf";
pub(crate) const TIE_FIRST: &str = "/fonts/Tie-First.ttf";
pub(crate) const TIE_SECOND: &str = "/fonts/Tie-Second.ttf";

/// Builds the corpus every pipeline test runs against.
///
/// - `Sample` is the four-face family from the classic regular/bold/
///   italic/bold-italic square, with a localized bold subfamily name.
/// - `Twin` holds two faces legitimately sharing one full name.
/// - `微软雅黑` exercises names outside the ASCII range.
/// - `Spread` differs only by stretch.
/// - `Tie` holds two faces with identical attributes.
pub(crate) fn sample_provider() -> MemoryProvider {
    MemoryProvider::new(sample_faces())
}

/// The raw face metadata behind [`sample_provider`], for tests that build
/// providers with restricted capabilities.
pub(crate) fn sample_faces() -> Vec<FaceMetadata> {
    Vec::from([
        FaceMetadata::new("Sample", SAMPLE_REGULAR)
            .postscript_name("Sample-Regular")
            .full_name("Sample Regular")
            .subfamily_name("Regular"),
        FaceMetadata::new("Sample", SAMPLE_BOLD)
            .postscript_name("Sample-Bold")
            .full_name("Sample Bold")
            .subfamily_name("Bold")
            .subfamily_name("粗体")
            .weight(FontWeight::BOLD),
        FaceMetadata::new("Sample", SAMPLE_ITALIC)
            .postscript_name("Sample-Italic")
            .full_name("Sample Italic")
            .subfamily_name("Italic")
            .style(FontStyle::Italic),
        FaceMetadata::new("Sample", SAMPLE_BOLD_ITALIC)
            .postscript_name("Sample-BoldItalic")
            .full_name("Sample Bold Italic")
            .subfamily_name("Bold Italic")
            .weight(FontWeight::BOLD)
            .style(FontStyle::Italic),
        FaceMetadata::new("Twin", TWIN_ONE)
            .postscript_name("Twin-One")
            .full_name("Twin")
            .subfamily_name("One"),
        FaceMetadata::new("Twin", TWIN_TWO)
            .postscript_name("Twin-Two")
            .full_name("Twin")
            .subfamily_name("Two"),
        FaceMetadata::new("微软雅黑", YAHEI_REGULAR)
            .postscript_name("YaHei-Regular")
            .full_name("Microsoft YaHei")
            .subfamily_name("Regular"),
        FaceMetadata::new("微软雅黑", YAHEI_BOLD)
            .postscript_name("YaHei-Bold")
            .full_name("Microsoft YaHei Bold")
            .subfamily_name("Bold")
            .weight(FontWeight::BOLD),
        FaceMetadata::new("Spread", SPREAD_CONDENSED)
            .postscript_name("Spread-Condensed")
            .full_name("Spread Condensed")
            .subfamily_name("Condensed")
            .stretch(FontStretch::CONDENSED),
        FaceMetadata::new("Spread", SPREAD_NORMAL)
            .postscript_name("Spread-Normal")
            .full_name("Spread Normal")
            .subfamily_name("Normal"),
        FaceMetadata::new("Tie", TIE_FIRST)
            .postscript_name("Tie-First")
            .full_name("Tie First")
            .subfamily_name("First")
            .weight(FontWeight::BOLD),
        FaceMetadata::new("Tie", TIE_SECOND)
            .postscript_name("Tie-Second")
            .full_name("Tie Second")
            .subfamily_name("Second")
            .weight(FontWeight::BOLD),
    ])
}

/// One engine per corpus strategy, over identical corpus data.
pub(crate) fn engines() -> [MatchEngine<MemoryProvider>; 2] {
    [
        MatchEngine::new(sample_provider(), CorpusRequest::Indexed).unwrap(),
        MatchEngine::new(sample_provider(), CorpusRequest::Native).unwrap(),
    ]
}

/// Asserts that both corpus strategies resolve `query` to `expected`.
#[track_caller]
pub(crate) fn check(query: &FontQuery, strict: bool, expected: Option<&str>) {
    for engine in engines() {
        assert_eq!(
            engine.matching_font(query, strict).as_deref(),
            expected,
            "corpus strategy {:?} diverged for {query:?} (strict: {strict})",
            engine.corpus_kind(),
        );
    }
}
