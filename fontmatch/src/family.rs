// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for font families.

use super::record::FontRecord;
use std::sync::Arc;

/// Named set of font faces that are instances of a core design.
///
/// The face list preserves the provider's enumeration order, which is the
/// order every family scan and tie-break in the match pipeline observes.
#[derive(Clone, Debug)]
pub struct Family(Arc<FamilyInner>);

#[derive(Debug)]
struct FamilyInner {
    name: Arc<str>,
    fonts: Vec<FontRecord>,
}

impl Family {
    /// Creates a new family with the given name and faces.
    pub fn new(name: impl Into<Arc<str>>, fonts: impl IntoIterator<Item = FontRecord>) -> Self {
        Self(Arc::new(FamilyInner {
            name: name.into(),
            fonts: fonts.into_iter().collect(),
        }))
    }

    /// Returns the name of the family.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the faces of the family in enumeration order.
    pub fn fonts(&self) -> &[FontRecord] {
        &self.0.fonts
    }
}
