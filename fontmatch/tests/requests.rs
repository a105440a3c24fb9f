// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the flat request front end and the status side channel.

use crate::util::{engines, SAMPLE_BOLD, SAMPLE_BOLD_ITALIC, SAMPLE_REGULAR};
use fontmatch::{QueryParseError, Status};

#[test]
fn request_resolves_like_the_equivalent_query() {
    for engine in engines() {
        assert_eq!(
            engine
                .matching_font_for_request(r#"{"2": "Sample", "4": 700, "5": 2}"#, false)
                .unwrap()
                .as_deref(),
            Some(SAMPLE_BOLD_ITALIC),
        );
        assert_eq!(
            engine
                .matching_font_for_request(r#"{"0": "Sample-Bold"}"#, false)
                .unwrap()
                .as_deref(),
            Some(SAMPLE_BOLD),
        );
        assert_eq!(engine.last_status(), Status::Ok);
    }
}

#[test]
fn request_no_match_is_not_an_error() {
    for engine in engines() {
        let result = engine.matching_font_for_request(r#"{"2": "Missing"}"#, false);
        assert_eq!(result, Ok(None), "an unknown family is a no-match outcome");
        assert_eq!(engine.last_status(), Status::Ok);
    }
}

#[test]
fn malformed_request_surfaces_as_a_parse_error() {
    for engine in engines() {
        let result = engine.matching_font_for_request(r#"{"2": "Sample""#, false);
        assert!(
            matches!(result, Err(QueryParseError::Json(_))),
            "got: {result:?}",
        );
        assert_eq!(engine.last_status(), Status::ParseError);

        // A later well-formed call clears the parse state.
        let result = engine.matching_font_for_request(r#"{"2": "Sample"}"#, false);
        assert_eq!(result.unwrap().as_deref(), Some(SAMPLE_REGULAR));
        assert_eq!(engine.last_status(), Status::Ok);
    }
}

#[test]
fn out_of_range_attributes_are_rejected_before_matching() {
    for engine in engines() {
        let result = engine.matching_font_for_request(r#"{"2": "Sample", "4": 1001}"#, false);
        assert!(
            matches!(result, Err(QueryParseError::OutOfRange { .. })),
            "got: {result:?}",
        );
        assert_eq!(engine.last_status(), Status::ParseError);
    }
}

#[test]
fn strict_flag_passes_through_the_request_front_end() {
    for engine in engines() {
        // No face carries weight 100 exactly.
        assert_eq!(
            engine
                .matching_font_for_request(r#"{"2": "Sample", "4": 100}"#, true)
                .unwrap(),
            None,
        );
        assert_eq!(
            engine
                .matching_font_for_request(r#"{"2": "Sample", "4": 100}"#, false)
                .unwrap()
                .as_deref(),
            Some(SAMPLE_REGULAR),
        );
    }
}
