// Copyright 2025 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for installed font faces.

use super::attributes::{FontStretch, FontStyle, FontWeight};
use super::fold::names_match;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicU64, Ordering};
use smallvec::SmallVec;
use std::sync::Arc;

/// Unique identifier for an installed font face.
///
/// Two [`FontRecord`] handles denote the same underlying face exactly when
/// their identifiers are equal, no matter which lookup path produced them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct FaceId(u64);

impl FaceId {
    /// Creates a new unique identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying integer value.
    pub fn to_u64(self) -> u64 {
        self.0
    }
}

/// Localized identity names carried by a font face.
///
/// Each category may hold several localized variants of the same name, for
/// example `"Bold"`, `"粗体"` and `"Negreta"` for one subfamily.
#[derive(Clone, Default, Debug)]
pub struct FaceNames {
    postscript: SmallVec<[Arc<str>; 1]>,
    full: SmallVec<[Arc<str>; 1]>,
    subfamily: SmallVec<[Arc<str>; 1]>,
}

impl FaceNames {
    /// Creates an empty name set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a localized Postscript name variant.
    pub fn push_postscript(&mut self, name: impl Into<Arc<str>>) {
        self.postscript.push(name.into());
    }

    /// Adds a localized full name variant.
    pub fn push_full(&mut self, name: impl Into<Arc<str>>) {
        self.full.push(name.into());
    }

    /// Adds a localized subfamily name variant.
    pub fn push_subfamily(&mut self, name: impl Into<Arc<str>>) {
        self.subfamily.push(name.into());
    }
}

/// Handle for a single installed font face.
///
/// Records are cheaply cloneable. Equality and hashing use the face
/// identity key, so records obtained through different lookup paths
/// compare equal when they denote the same face.
#[derive(Clone)]
pub struct FontRecord(Arc<RecordInner>);

struct RecordInner {
    id: FaceId,
    family_name: Arc<str>,
    names: FaceNames,
    weight: FontWeight,
    style: FontStyle,
    stretch: FontStretch,
    path: Arc<str>,
}

impl FontRecord {
    /// Creates a new record for an installed face.
    pub fn new(
        id: FaceId,
        family_name: impl Into<Arc<str>>,
        names: FaceNames,
        weight: FontWeight,
        style: FontStyle,
        stretch: FontStretch,
        path: impl Into<Arc<str>>,
    ) -> Self {
        Self(Arc::new(RecordInner {
            id,
            family_name: family_name.into(),
            names,
            weight,
            style,
            stretch,
            path: path.into(),
        }))
    }

    /// Returns the face identity key.
    pub fn id(&self) -> FaceId {
        self.0.id
    }

    /// Returns the name of the family this face belongs to.
    pub fn family_name(&self) -> &str {
        &self.0.family_name
    }

    /// Returns the localized Postscript names of this face.
    pub fn postscript_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.0.names.postscript.iter().map(|name| name.as_ref())
    }

    /// Returns the localized full names of this face.
    pub fn full_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.0.names.full.iter().map(|name| name.as_ref())
    }

    /// Returns the localized subfamily names of this face.
    pub fn subfamily_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.0.names.subfamily.iter().map(|name| name.as_ref())
    }

    /// Returns true if any localized variant of the given name category
    /// matches `name` case-insensitively.
    pub fn has_name(&self, field: NameField, name: &str) -> bool {
        let names = match field {
            NameField::Postscript => &self.0.names.postscript,
            NameField::Full => &self.0.names.full,
            NameField::Subfamily => &self.0.names.subfamily,
            NameField::Family => {
                return names_match(&self.0.family_name, name);
            }
        };
        names.iter().any(|candidate| names_match(candidate, name))
    }

    /// Returns true if the face's subfamily name list contains `name`,
    /// compared case-insensitively.
    pub fn has_subfamily_name(&self, name: &str) -> bool {
        self.has_name(NameField::Subfamily, name)
    }

    /// Returns the design weight of the face.
    pub fn weight(&self) -> FontWeight {
        self.0.weight
    }

    /// Returns the slant of the face.
    pub fn style(&self) -> FontStyle {
        self.0.style
    }

    /// Returns the width class of the face.
    pub fn stretch(&self) -> FontStretch {
        self.0.stretch
    }

    /// Returns the path of the file backing this face.
    pub fn path(&self) -> &str {
        &self.0.path
    }
}

impl PartialEq for FontRecord {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for FontRecord {}

impl Hash for FontRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for FontRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRecord")
            .field("id", &self.0.id)
            .field("family_name", &self.0.family_name)
            .field("weight", &self.0.weight)
            .field("style", &self.0.style)
            .field("stretch", &self.0.stretch)
            .field("path", &self.0.path)
            .finish()
    }
}

/// Name categories an exact-match filter can constrain.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NameField {
    /// The Postscript name of a face.
    Postscript,
    /// The full name of a face.
    Full,
    /// The family name of a face.
    Family,
    /// The subfamily (face) name of a face, such as `"Bold"`.
    Subfamily,
}
