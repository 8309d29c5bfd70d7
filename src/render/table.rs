// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{layout_table, SEAT_RADIUS};
use crate::model::{GuestDirectory, SeatingPlan, TableSeating, TableShape, TableShapes};
use crate::present::resolve_seat;

use super::{
    fill_color, ScenePrimitive, SeatHitTarget, TableCaption, TableScene, SEAT_STROKE, TABLE_FILL,
    TABLE_STROKE, TEXT_MAIN, TEXT_SECONDARY,
};

/// Renders one table: geometry plus per-seat presentation, fanned out per
/// seat.
///
/// Draw order matches the reference surface: outline, capacity label, then
/// for each seat its name label followed by the marker.
pub fn render_table(
    table: &TableSeating,
    shape: TableShape,
    directory: &GuestDirectory,
) -> TableScene {
    let layout = layout_table(shape, table.seats());
    let seat_count = table.seats().len();

    let mut primitives = Vec::with_capacity(2 + seat_count * 2);
    primitives.push(ScenePrimitive::Outline {
        outline: layout.outline(),
        fill: TABLE_FILL,
        stroke: TABLE_STROKE,
    });
    primitives.push(ScenePrimitive::Label {
        anchor: layout.capacity_anchor(),
        text: format!("{seat_count} seats"),
        color: TEXT_SECONDARY,
    });

    let mut hit_targets = Vec::with_capacity(seat_count);
    for placement in layout.seats() {
        let guest = directory.get(placement.guest_id());
        let presentation = resolve_seat(guest);

        primitives.push(ScenePrimitive::Label {
            anchor: placement.label_anchor(),
            text: presentation.label().to_owned(),
            color: TEXT_MAIN,
        });
        primitives.push(ScenePrimitive::SeatMarker {
            center: placement.center(),
            radius: SEAT_RADIUS,
            fill: fill_color(presentation.fill()),
            stroke: SEAT_STROKE,
        });

        hit_targets.push(SeatHitTarget::new(
            placement.seat_index(),
            placement.center(),
            presentation.tooltip().to_owned(),
        ));
    }

    TableScene {
        table_id: table.table_id().clone(),
        caption: TableCaption::new(
            format!("Table {}", table.table_id()),
            format!("{shape} · {seat_count} seats"),
        ),
        primitives,
        hit_targets,
    }
}

/// Renders every table of a plan, in plan order.
pub fn render_plan(
    plan: &SeatingPlan,
    directory: &GuestDirectory,
    shapes: &TableShapes,
) -> Vec<TableScene> {
    plan.tables()
        .iter()
        .map(|table| render_table(table, shapes.shape_of(table.table_id()), directory))
        .collect()
}
