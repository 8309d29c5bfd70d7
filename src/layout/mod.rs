// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seat placement geometry for the two table footprints.
//!
//! Layout is a pure function of `(shape, seat order)`: identical inputs yield
//! byte-identical coordinates, which visual regression tests rely on. All
//! coordinates live in a per-table local space of `TABLE_SIZE × TABLE_SIZE`
//! with y growing downward, matching the drawing surface contract.

mod round;
mod trestle;

use serde::Serialize;

use crate::model::{GuestId, SeatAssignment, TableShape};

/// Side length of the square local space each table is laid out in.
pub const TABLE_SIZE: f64 = 260.0;
/// Radius of a seat marker.
pub const SEAT_RADIUS: f64 = 14.0;
/// Radius of the round table outline.
pub const TABLE_RADIUS: f64 = 70.0;
/// Radial distance from the round outline to a seat center.
pub const ROUND_SEAT_OFFSET: f64 = 45.0;

pub const TRESTLE_WIDTH: f64 = 180.0;
pub const TRESTLE_HEIGHT: f64 = 50.0;
pub const TRESTLE_CORNER_RADIUS: f64 = 10.0;
/// Vertical distance from a trestle edge to its seat row.
pub const TRESTLE_ROW_OFFSET: f64 = 24.0;
/// Horizontal inset before the first seat of a trestle row.
pub const TRESTLE_ROW_PADDING: f64 = 16.0;

/// Name labels sit this far above the seat marker edge.
pub const LABEL_CLEARANCE_ABOVE: f64 = 8.0;
/// Top seats of a round table put the label this far below the marker edge
/// instead, clear of the centered capacity label.
pub const LABEL_CLEARANCE_BELOW: f64 = 14.0;
/// Labels never render above this y, so they stay inside the drawing surface.
pub const LABEL_TOP_FLOOR: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Table outline in local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TableOutline {
    Circle {
        center: Point,
        radius: f64,
    },
    #[serde(rename_all = "camelCase")]
    RoundedRect {
        origin: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
}

/// One placed seat: marker center plus the anchor its name label hangs from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatPlacement {
    position: usize,
    seat_index: u32,
    guest_id: GuestId,
    center: Point,
    label_anchor: Point,
}

impl SeatPlacement {
    pub(crate) fn new(
        position: usize,
        seat: &SeatAssignment,
        center: Point,
        label_anchor: Point,
    ) -> Self {
        Self {
            position,
            seat_index: seat.seat_index(),
            guest_id: seat.guest_id().clone(),
            center,
            label_anchor,
        }
    }

    /// Array position within the table's seat list. This, not `seat_index`,
    /// drove the placement.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn seat_index(&self) -> u32 {
        self.seat_index
    }

    pub fn guest_id(&self) -> &GuestId {
        &self.guest_id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn label_anchor(&self) -> Point {
        self.label_anchor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    outline: TableOutline,
    capacity_anchor: Point,
    seats: Vec<SeatPlacement>,
}

impl TableLayout {
    pub fn outline(&self) -> TableOutline {
        self.outline
    }

    /// Anchor of the centered "{n} seats" capacity label.
    pub fn capacity_anchor(&self) -> Point {
        self.capacity_anchor
    }

    pub fn seats(&self) -> &[SeatPlacement] {
        &self.seats
    }
}

/// Places every seat of a table in local space.
///
/// Total over its domain: zero seats produce just the outline and capacity
/// anchor, never an error.
pub fn layout_table(shape: TableShape, seats: &[SeatAssignment]) -> TableLayout {
    match shape {
        TableShape::Round => round::layout_round(seats),
        TableShape::Trestle => trestle::layout_trestle(seats),
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::model::{GuestId, SeatAssignment};

    pub(crate) fn seat_run(count: usize) -> Vec<SeatAssignment> {
        (0..count)
            .map(|idx| {
                let guest_id = GuestId::new(format!("g{idx}")).expect("guest id");
                SeatAssignment::new(idx as u32, guest_id)
            })
            .collect()
    }

    pub(crate) fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::seat_run;
    use super::{layout_table, TableOutline, TABLE_RADIUS, TABLE_SIZE};
    use crate::model::TableShape;

    #[test]
    fn zero_seats_produce_outline_and_capacity_anchor_only() {
        for shape in [TableShape::Round, TableShape::Trestle] {
            let layout = layout_table(shape, &[]);
            assert!(layout.seats().is_empty());

            let center = layout.capacity_anchor();
            assert_eq!(center.x, TABLE_SIZE / 2.0);
            assert_eq!(center.y, TABLE_SIZE / 2.0);
        }
    }

    #[test]
    fn outline_matches_shape() {
        let round = layout_table(TableShape::Round, &seat_run(4));
        assert!(matches!(
            round.outline(),
            TableOutline::Circle { radius, .. } if radius == TABLE_RADIUS
        ));

        let trestle = layout_table(TableShape::Trestle, &seat_run(4));
        assert!(matches!(trestle.outline(), TableOutline::RoundedRect { .. }));
    }

    #[test]
    fn layout_is_deterministic_for_identical_inputs() {
        let seats = seat_run(7);
        for shape in [TableShape::Round, TableShape::Trestle] {
            let first = layout_table(shape, &seats);
            let second = layout_table(shape, &seats);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn placement_follows_array_order_not_seat_index() {
        use crate::model::{GuestId, SeatAssignment};

        // Sparse, out-of-order seat indices: geometry must ignore them.
        let scrambled = vec![
            SeatAssignment::new(7, GuestId::new("g0").expect("id")),
            SeatAssignment::new(3, GuestId::new("g1").expect("id")),
            SeatAssignment::new(11, GuestId::new("g2").expect("id")),
        ];
        let ordered = seat_run(3);

        let scrambled_layout = layout_table(TableShape::Round, &scrambled);
        let ordered_layout = layout_table(TableShape::Round, &ordered);

        for (a, b) in scrambled_layout.seats().iter().zip(ordered_layout.seats()) {
            assert_eq!(a.center(), b.center());
            assert_eq!(a.label_anchor(), b.label_anchor());
        }
        assert_eq!(scrambled_layout.seats()[0].seat_index(), 7);
    }
}
