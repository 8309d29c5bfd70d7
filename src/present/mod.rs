// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-seat presentation derived from an optional guest record.
//!
//! Every function here is total: a missing guest resolves to the defined
//! fallbacks ("Guest" seat label, "Unknown" display name, "Unknown guest"
//! tooltip), never an error.

use crate::model::Guest;

/// Fill classification for a seat marker, keyed off the guest's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatFill {
    Male,
    Female,
    Neutral,
}

/// Everything the renderer needs to draw one seat's guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPresentation {
    label: String,
    display_name: String,
    fill: SeatFill,
    badges: Vec<String>,
    tooltip: String,
}

impl SeatPresentation {
    /// Short label drawn next to the seat marker (a first name, usually).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Full name used in the tooltip, or "Unknown" for a missing guest.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn fill(&self) -> SeatFill {
        self.fill
    }

    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

pub fn resolve_seat(guest: Option<&Guest>) -> SeatPresentation {
    SeatPresentation {
        label: seat_label(guest),
        display_name: display_name(guest),
        fill: seat_fill(guest),
        badges: badges(guest),
        tooltip: seat_tooltip(guest),
    }
}

pub fn display_name(guest: Option<&Guest>) -> String {
    match guest {
        Some(guest) => guest.name().to_owned(),
        None => "Unknown".to_owned(),
    }
}

/// First whitespace-delimited token of the guest's name, or "Guest" when the
/// name yields no token or the record is missing.
pub fn seat_label(guest: Option<&Guest>) -> String {
    guest
        .and_then(|guest| guest.name().split_whitespace().next())
        .map_or_else(|| "Guest".to_owned(), str::to_owned)
}

/// Marital-status badge (if any) followed by the guest's tags, verbatim and in
/// order. A tag equal to the marital badge is not deduplicated.
pub fn badges(guest: Option<&Guest>) -> Vec<String> {
    let Some(guest) = guest else {
        return Vec::new();
    };

    let mut badges = Vec::new();

    let status = guest
        .marital_status()
        .map(str::to_lowercase)
        .unwrap_or_default();
    if status.contains("single") {
        badges.push("Single".to_owned());
    } else if ["married", "engaged", "partner"]
        .iter()
        .any(|token| status.contains(token))
    {
        badges.push("Couple".to_owned());
    }

    badges.extend(guest.tags().iter().cloned());
    badges
}

/// Classifies on the first character of the lower-cased gender; anything that
/// is not an `m`/`f` prefix (including absent) is neutral.
pub fn seat_fill(guest: Option<&Guest>) -> SeatFill {
    let gender = guest
        .and_then(Guest::gender)
        .map(str::to_lowercase)
        .unwrap_or_default();
    if gender.starts_with('m') {
        SeatFill::Male
    } else if gender.starts_with('f') {
        SeatFill::Female
    } else {
        SeatFill::Neutral
    }
}

/// Newline-joined hover text: name, then gender, status, and badge lines, each
/// only when non-empty. A missing guest is exactly "Unknown guest".
pub fn seat_tooltip(guest: Option<&Guest>) -> String {
    let Some(guest) = guest else {
        return "Unknown guest".to_owned();
    };

    let mut lines = vec![guest.name().to_owned()];

    if let Some(gender) = guest.gender().filter(|value| !value.is_empty()) {
        lines.push(format!("Gender: {gender}"));
    }
    if let Some(status) = guest.marital_status().filter(|value| !value.is_empty()) {
        lines.push(format!("Status: {status}"));
    }

    let badges = badges(Some(guest));
    if !badges.is_empty() {
        lines.push(format!("Tags: {}", badges.join(" • ")));
    }

    lines.join("\n")
}
