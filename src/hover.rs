// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-table transient hover state.
//!
//! Hover is modeled as an explicit mapping from table identity to an optional
//! hovered seat, mutated only through enter/leave events. Each table's entry
//! is independent; events against one table never touch another's state.
//! Hit-testing considers seat targets only — a visible tooltip overlay is not
//! a hit target and cannot steal hover from nearby seats.

use std::collections::BTreeMap;

use crate::layout::Point;
use crate::model::TableId;
use crate::render::{SeatHitTarget, TableScene};

/// Vertical rise of the tooltip overlay above the hovered seat center.
pub const TOOLTIP_RISE: f64 = 20.0;

/// The hovered seat of one table: its geometric center and resolved tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    x: f64,
    y: f64,
    tooltip: String,
}

impl HoverInfo {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Overlay anchor: horizontally centered on the seat, offset upward.
    pub fn overlay_anchor(&self) -> Point {
        Point::new(self.x, self.y - TOOLTIP_RISE)
    }
}

/// Hover state for every rendered table. Absence of an entry means "none".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverModel {
    by_table: BTreeMap<TableId, HoverInfo>,
}

impl HoverModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a seat: records that seat's center and tooltip for the
    /// owning table, replacing any previous hover there.
    pub fn pointer_enter(&mut self, table_id: &TableId, target: &SeatHitTarget) {
        self.by_table.insert(
            table_id.clone(),
            HoverInfo {
                x: target.center().x,
                y: target.center().y,
                tooltip: target.tooltip().to_owned(),
            },
        );
    }

    /// Pointer left the table's seats: clears that table's hover to "none".
    pub fn pointer_leave(&mut self, table_id: &TableId) {
        self.by_table.remove(table_id);
    }

    pub fn hover(&self, table_id: &TableId) -> Option<&HoverInfo> {
        self.by_table.get(table_id)
    }

    /// Drops all hover state. Called when the plan is replaced wholesale.
    pub fn clear(&mut self) {
        self.by_table.clear();
    }
}

/// Resolves a pointer position in table-local space to the seat under it, if
/// any. Targets are tested in seat order; the first containing seat wins.
pub fn hit_test(scene: &TableScene, x: f64, y: f64) -> Option<&SeatHitTarget> {
    scene
        .hit_targets()
        .iter()
        .find(|target| target.contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::{hit_test, HoverModel, TOOLTIP_RISE};
    use crate::model::fixtures::{demo_directory, demo_plan, demo_shapes};
    use crate::model::TableId;
    use crate::render::render_plan;

    fn tid(value: &str) -> TableId {
        TableId::new(value).expect("table id")
    }

    #[test]
    fn enter_then_leave_returns_to_none() {
        let scenes = render_plan(&demo_plan(), &demo_directory(), &demo_shapes());
        let target = &scenes[0].hit_targets()[0];

        let mut hover = HoverModel::new();
        assert!(hover.hover(&tid("t1")).is_none());

        hover.pointer_enter(&tid("t1"), target);
        let info = hover.hover(&tid("t1")).expect("hover info");
        assert_eq!(info.x(), target.center().x);
        assert_eq!(info.y(), target.center().y);
        assert_eq!(info.tooltip(), target.tooltip());

        hover.pointer_leave(&tid("t1"));
        assert!(hover.hover(&tid("t1")).is_none());
    }

    #[test]
    fn tables_do_not_share_hover_state() {
        let scenes = render_plan(&demo_plan(), &demo_directory(), &demo_shapes());
        let target = &scenes[0].hit_targets()[0];

        let mut hover = HoverModel::new();
        hover.pointer_enter(&tid("t1"), target);

        assert!(hover.hover(&tid("t2")).is_none());
        hover.pointer_leave(&tid("t2"));
        assert!(hover.hover(&tid("t1")).is_some());
    }

    #[test]
    fn clear_empties_every_table() {
        let scenes = render_plan(&demo_plan(), &demo_directory(), &demo_shapes());
        let target = &scenes[0].hit_targets()[0];

        let mut hover = HoverModel::new();
        hover.pointer_enter(&tid("t1"), target);
        hover.pointer_enter(&tid("t2"), target);

        hover.clear();
        assert!(hover.hover(&tid("t1")).is_none());
        assert!(hover.hover(&tid("t2")).is_none());
    }

    #[test]
    fn re_entering_replaces_the_previous_seat() {
        let scenes = render_plan(&demo_plan(), &demo_directory(), &demo_shapes());
        let first = &scenes[0].hit_targets()[0];
        let second = &scenes[0].hit_targets()[1];

        let mut hover = HoverModel::new();
        hover.pointer_enter(&tid("t1"), first);
        hover.pointer_enter(&tid("t1"), second);

        let info = hover.hover(&tid("t1")).expect("hover info");
        assert_eq!(info.tooltip(), second.tooltip());
    }

    #[test]
    fn hit_test_resolves_seat_centers_and_misses_elsewhere() {
        let scenes = render_plan(&demo_plan(), &demo_directory(), &demo_shapes());
        let scene = &scenes[0];
        let target = &scene.hit_targets()[2];

        let hit = hit_test(scene, target.center().x, target.center().y).expect("hit");
        assert_eq!(hit.seat_index(), target.seat_index());

        // The table center holds no seat.
        assert!(hit_test(scene, 130.0, 130.0).is_none());
    }

    #[test]
    fn overlay_anchor_rises_above_the_seat() {
        let scenes = render_plan(&demo_plan(), &demo_directory(), &demo_shapes());
        let target = &scenes[0].hit_targets()[0];

        let mut hover = HoverModel::new();
        hover.pointer_enter(&tid("t1"), target);

        let info = hover.hover(&tid("t1")).expect("hover info");
        let anchor = info.overlay_anchor();
        assert_eq!(anchor.x, info.x());
        assert_eq!(anchor.y, info.y() - TOOLTIP_RISE);
    }
}
