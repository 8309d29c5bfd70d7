// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing-surface-agnostic scene description.
//!
//! The renderer emits plain coordinates, colors, and text; any 2-D surface
//! (terminal canvas, SVG, raster) can consume a [`TableScene`] without this
//! crate knowing about it. Hover hit-testing works off [`SeatHitTarget`]s,
//! which are listed separately from the drawable primitives.

pub mod table;

use serde::Serialize;

use crate::layout::{Point, TableOutline, SEAT_RADIUS};
use crate::model::TableId;
use crate::present::SeatFill;

pub use table::{render_plan, render_table};

/// An sRGB color constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const TABLE_FILL: Rgb = Rgb::new(0x11, 0x18, 0x27);
pub const TABLE_STROKE: Rgb = Rgb::new(0xe5, 0xe7, 0xeb);
pub const SEAT_FILL_MALE: Rgb = Rgb::new(0x0e, 0xa5, 0xe9);
pub const SEAT_FILL_FEMALE: Rgb = Rgb::new(0xec, 0x48, 0x99);
pub const SEAT_FILL_NEUTRAL: Rgb = Rgb::new(0x6b, 0x72, 0x80);
pub const SEAT_STROKE: Rgb = Rgb::new(0xf9, 0xfa, 0xfb);
pub const TEXT_MAIN: Rgb = Rgb::new(0xf9, 0xfa, 0xfb);
pub const TEXT_SECONDARY: Rgb = Rgb::new(0xd1, 0xd5, 0xdb);

pub fn fill_color(fill: SeatFill) -> Rgb {
    match fill {
        SeatFill::Male => SEAT_FILL_MALE,
        SeatFill::Female => SEAT_FILL_FEMALE,
        SeatFill::Neutral => SEAT_FILL_NEUTRAL,
    }
}

/// One drawable element, in table-local coordinates.
///
/// Text anchors are horizontal centers; the surface centers each label on its
/// anchor point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScenePrimitive {
    #[serde(rename_all = "camelCase")]
    Outline {
        outline: TableOutline,
        fill: Rgb,
        stroke: Rgb,
    },
    #[serde(rename_all = "camelCase")]
    SeatMarker {
        center: Point,
        radius: f64,
        fill: Rgb,
        stroke: Rgb,
    },
    Label {
        anchor: Point,
        text: String,
        color: Rgb,
    },
}

/// Hover target for one seat. Targets are hit-tested in seat order; tooltip
/// overlays are never hit targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatHitTarget {
    seat_index: u32,
    center: Point,
    radius: f64,
    tooltip: String,
}

impl SeatHitTarget {
    pub(crate) fn new(seat_index: u32, center: Point, tooltip: String) -> Self {
        Self {
            seat_index,
            center,
            radius: SEAT_RADIUS,
            tooltip,
        }
    }

    pub fn seat_index(&self) -> u32 {
        self.seat_index
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Panel chrome for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCaption {
    title: String,
    subtitle: String,
}

impl TableCaption {
    pub(crate) fn new(title: String, subtitle: String) -> Self {
        Self { title, subtitle }
    }

    /// "Table {id}".
    pub fn title(&self) -> &str {
        &self.title
    }

    /// "{Round|Trestle} · {n} seats".
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

/// Complete visual description of one rendered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableScene {
    table_id: TableId,
    caption: TableCaption,
    primitives: Vec<ScenePrimitive>,
    hit_targets: Vec<SeatHitTarget>,
}

impl TableScene {
    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub fn caption(&self) -> &TableCaption {
        &self.caption
    }

    pub fn primitives(&self) -> &[ScenePrimitive] {
        &self.primitives
    }

    pub fn hit_targets(&self) -> &[SeatHitTarget] {
        &self.hit_targets
    }
}
