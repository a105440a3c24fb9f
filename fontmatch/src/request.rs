// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding of the flat, string-keyed request format.
//!
//! A request is a JSON object whose keys are decimal
//! [`FontPropertyKey`] wire identifiers and whose values are strings for
//! the name keys and integers for weight, style and stretch:
//!
//! ```json
//! {"0": "ArialMT", "2": "Arial", "4": 700, "5": 2}
//! ```

use super::attributes::{FontStretch, FontStyle, FontWeight};
use super::query::{FontPropertyKey, FontQuery, QueryValue};
use serde_json::Value;
use thiserror::Error;

/// A request that could not be decoded into a [`FontQuery`].
///
/// Decoding failures are surfaced to the caller; they are never folded
/// into the "no match" outcome.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryParseError {
    /// The request was not valid JSON.
    #[error("request is not valid JSON: {0}")]
    Json(String),

    /// The request was valid JSON but not an object.
    #[error("request must be a JSON object")]
    NotAnObject,

    /// A key did not name a known font property.
    #[error("unknown property key `{0}`")]
    UnknownKey(String),

    /// A property was supplied with a value of the wrong type.
    #[error("property {key:?} expects a {expected} value")]
    WrongType {
        /// The property the value was supplied for.
        key: FontPropertyKey,
        /// The type the property expects.
        expected: &'static str,
    },

    /// A numeric property was outside its valid range.
    #[error("value {value} is out of range for property {key:?}")]
    OutOfRange {
        /// The property the value was supplied for.
        key: FontPropertyKey,
        /// The rejected value.
        value: i64,
    },
}

/// Decodes a flat request into a [`FontQuery`].
///
/// Values that are neither strings nor integers (null, booleans, nested
/// structures) are ignored; nested query structures are not supported.
pub fn parse_query(input: &str) -> Result<FontQuery, QueryParseError> {
    let value: Value =
        serde_json::from_str(input).map_err(|err| QueryParseError::Json(err.to_string()))?;
    let Value::Object(map) = value else {
        return Err(QueryParseError::NotAnObject);
    };
    let mut query = FontQuery::new();
    for (raw_key, value) in &map {
        let key = raw_key
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(FontPropertyKey::from_wire_id)
            .ok_or_else(|| QueryParseError::UnknownKey(raw_key.clone()))?;
        let value = match value {
            Value::String(s) => QueryValue::Name(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(n) => QueryValue::Number(n),
                None => {
                    return Err(QueryParseError::WrongType {
                        key,
                        expected: "integer",
                    });
                }
            },
            // The original wire format tolerates other value types by
            // dropping them.
            _ => continue,
        };
        query = apply(query, key, value)?;
    }
    Ok(query)
}

fn apply(
    query: FontQuery,
    key: FontPropertyKey,
    value: QueryValue,
) -> Result<FontQuery, QueryParseError> {
    use FontPropertyKey::*;
    Ok(match (key, value) {
        (PostscriptName, QueryValue::Name(name)) => query.with_postscript_name(name),
        (FullName, QueryValue::Name(name)) => query.with_full_name(name),
        (FamilyName, QueryValue::Name(name)) => query.with_family_name(name),
        (SubfamilyName, QueryValue::Name(name)) => query.with_subfamily_name(name),
        (Weight, QueryValue::Number(value)) => query.with_weight(
            FontWeight::from_wire(value).ok_or(QueryParseError::OutOfRange { key, value })?,
        ),
        (Style, QueryValue::Number(value)) => query.with_style(
            FontStyle::from_wire(value).ok_or(QueryParseError::OutOfRange { key, value })?,
        ),
        (Stretch, QueryValue::Number(value)) => query.with_stretch(
            FontStretch::from_wire(value).ok_or(QueryParseError::OutOfRange { key, value })?,
        ),
        (PostscriptName | FullName | FamilyName | SubfamilyName, QueryValue::Number(_)) => {
            return Err(QueryParseError::WrongType {
                key,
                expected: "string",
            });
        }
        (Weight | Style | Stretch, QueryValue::Name(_)) => {
            return Err(QueryParseError::WrongType {
                key,
                expected: "integer",
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_names_and_numbers() {
        let query = parse_query(r#"{"0": "ArialMT", "2": "Arial", "4": 700, "5": 2}"#).unwrap();
        assert_eq!(query.postscript_name(), Some("ArialMT"));
        assert_eq!(query.family_name(), Some("Arial"));
        assert_eq!(query.weight(), Some(FontWeight::BOLD));
        assert_eq!(query.style(), Some(FontStyle::Italic));
        assert_eq!(query.stretch(), None);
    }

    #[test]
    fn ignores_unsupported_value_types() {
        let query = parse_query(r#"{"2": "Arial", "4": null, "5": [2]}"#).unwrap();
        assert_eq!(query.family_name(), Some("Arial"));
        assert_eq!(query.weight(), None);
        assert_eq!(query.style(), None);
    }

    #[test]
    fn rejects_malformed_requests() {
        assert!(matches!(
            parse_query("{"),
            Err(QueryParseError::Json(_))
        ));
        assert_eq!(parse_query("[1, 2]"), Err(QueryParseError::NotAnObject));
        assert_eq!(
            parse_query(r#"{"9": "Arial"}"#),
            Err(QueryParseError::UnknownKey("9".into()))
        );
        assert_eq!(
            parse_query(r#"{"weight": 700}"#),
            Err(QueryParseError::UnknownKey("weight".into()))
        );
    }

    #[test]
    fn rejects_type_and_range_errors() {
        assert_eq!(
            parse_query(r#"{"4": "bold"}"#),
            Err(QueryParseError::WrongType {
                key: FontPropertyKey::Weight,
                expected: "integer",
            })
        );
        assert_eq!(
            parse_query(r#"{"2": 42}"#),
            Err(QueryParseError::WrongType {
                key: FontPropertyKey::FamilyName,
                expected: "string",
            })
        );
        assert_eq!(
            parse_query(r#"{"4": 1000}"#),
            Err(QueryParseError::OutOfRange {
                key: FontPropertyKey::Weight,
                value: 1000,
            })
        );
        assert_eq!(
            parse_query(r#"{"5": 3}"#),
            Err(QueryParseError::OutOfRange {
                key: FontPropertyKey::Style,
                value: 3,
            })
        );
        assert_eq!(
            parse_query(r#"{"6": 0}"#),
            Err(QueryParseError::OutOfRange {
                key: FontPropertyKey::Stretch,
                value: 0,
            })
        );
    }
}
