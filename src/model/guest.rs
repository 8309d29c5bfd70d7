// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::GuestId;

/// Known guest attribute keys plus an open overflow map.
///
/// `side`, `wants_by_name`, and `must_not_by_name` are the keys the planner
/// understands today; anything else an importer attaches survives untouched in
/// `extra` so round-trips through external tools do not lose data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestAttributes {
    side: Option<String>,
    wants_by_name: Vec<String>,
    must_not_by_name: Vec<String>,
    extra: BTreeMap<String, serde_json::Value>,
}

impl GuestAttributes {
    pub fn new(
        side: Option<String>,
        wants_by_name: Vec<String>,
        must_not_by_name: Vec<String>,
        extra: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            side,
            wants_by_name,
            must_not_by_name,
            extra,
        }
    }

    pub fn side(&self) -> Option<&str> {
        self.side.as_deref()
    }

    pub fn wants_by_name(&self) -> &[String] {
        &self.wants_by_name
    }

    pub fn must_not_by_name(&self) -> &[String] {
        &self.must_not_by_name
    }

    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }
}

/// A planning participant. Everything except `id` and `name` is optional and
/// resolved to presentation fallbacks when missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    id: GuestId,
    name: String,
    gender: Option<String>,
    marital_status: Option<String>,
    tags: Vec<String>,
    attributes: GuestAttributes,
}

impl Guest {
    pub fn new(id: GuestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gender: None,
            marital_status: None,
            tags: Vec::new(),
            attributes: GuestAttributes::default(),
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_marital_status(mut self, marital_status: impl Into<String>) -> Self {
        self.marital_status = Some(marital_status.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_attributes(mut self, attributes: GuestAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn id(&self) -> &GuestId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn marital_status(&self) -> Option<&str> {
        self.marital_status.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn attributes(&self) -> &GuestAttributes {
        &self.attributes
    }
}

/// Guest lookup keyed by id, with deterministic iteration order.
///
/// A seat may reference an id with no entry here; callers resolve that to the
/// defined "unknown guest" presentation, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestDirectory {
    guests: BTreeMap<GuestId, Guest>,
}

impl GuestDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a guest keyed by its own id, replacing any previous entry.
    pub fn insert(&mut self, guest: Guest) -> Option<Guest> {
        self.guests.insert(guest.id().clone(), guest)
    }

    pub fn get(&self, id: &GuestId) -> Option<&Guest> {
        self.guests.get(id)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GuestId, &Guest)> {
        self.guests.iter()
    }
}

impl FromIterator<Guest> for GuestDirectory {
    fn from_iter<I: IntoIterator<Item = Guest>>(iter: I) -> Self {
        let mut directory = Self::new();
        for guest in iter {
            directory.insert(guest);
        }
        directory
    }
}
