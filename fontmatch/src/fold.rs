// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case folding shared by every name index and name comparison.

use smallvec::SmallVec;

/// Key for case-insensitive lookup of font and family names.
///
/// Index construction and lookup must fold through the same key type so the
/// two can never disagree on a name.
#[derive(Default)]
pub(crate) struct NameKey {
    data: SmallVec<[u8; 128]>,
}

impl NameKey {
    pub(crate) fn from_str(s: &str) -> Self {
        let mut res = Self::default();
        let mut buf = [0_u8; 4];
        for ch in s.chars() {
            for ch in ch.to_lowercase() {
                res.data
                    .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
        res
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Compares two names under the shared fold without building keys.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    let mut a = a.chars().flat_map(char::to_lowercase);
    let mut b = b.chars().flat_map(char::to_lowercase);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_case() {
        assert!(names_match("Arial Bold", "ARIAL bold"));
        assert!(!names_match("Arial Bold", "Arial"));
        assert_eq!(
            NameKey::from_str("Noto Sans").as_bytes(),
            NameKey::from_str("NOTO SANS").as_bytes()
        );
    }

    #[test]
    fn folds_non_ascii_case() {
        assert!(names_match("Ünica", "üNICA"));
        // Multi-char lowercase expansions fold the same way on both sides.
        assert!(names_match("İstanbul Display", "İstanbul display"));
        // Names in scripts without case are compared verbatim.
        assert!(names_match("微软雅黑", "微软雅黑"));
        assert!(!names_match("微软雅黑", "微软"));
    }
}
