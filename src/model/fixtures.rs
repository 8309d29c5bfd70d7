// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in sample event used by `--demo` and tests.

use std::collections::BTreeMap;

use super::guest::{Guest, GuestAttributes, GuestDirectory};
use super::ids::{GuestId, TableId};
use super::plan::{SeatAssignment, SeatingMetrics, SeatingPlan, TableSeating};
use super::table::{TableShape, TableShapes};

fn gid(value: &str) -> GuestId {
    GuestId::new(value).expect("guest id")
}

fn tid(value: &str) -> TableId {
    TableId::new(value).expect("table id")
}

fn side(value: &str) -> GuestAttributes {
    GuestAttributes::new(Some(value.to_owned()), Vec::new(), Vec::new(), BTreeMap::new())
}

pub fn demo_directory() -> GuestDirectory {
    GuestDirectory::from_iter([
        Guest::new(gid("g1"), "Nick Ellison")
            .with_gender("Male")
            .with_marital_status("Married to Charlotte Ellison")
            .with_tags(vec!["VIP".to_owned()])
            .with_attributes(side("groom")),
        Guest::new(gid("g2"), "Charlotte Ellison")
            .with_gender("Female")
            .with_marital_status("Married to Nick Ellison")
            .with_attributes(side("bride")),
        Guest::new(gid("g3"), "Tim")
            .with_gender("Male")
            .with_marital_status("Single"),
        Guest::new(gid("g4"), "Daisy")
            .with_gender("Female")
            .with_marital_status("Single"),
    ])
}

/// A solved plan for the sample event: one round table seating all four guests.
pub fn demo_plan() -> SeatingPlan {
    let seats = vec![
        SeatAssignment::new(0, gid("g1")),
        SeatAssignment::new(1, gid("g2")),
        SeatAssignment::new(2, gid("g3")),
        SeatAssignment::new(3, gid("g4")),
    ];
    let metrics = SeatingMetrics {
        must_not_violations: 0,
        wants_satisfied: 2,
        adjacent_singles: 1,
        same_gender_adjacencies: 0,
        alternating_tables: 0,
        split_couples: 0,
    };
    SeatingPlan::new(vec![TableSeating::new(tid("t1"), seats)], metrics, 1)
}

pub fn demo_shapes() -> TableShapes {
    TableShapes::from_iter([(tid("t1"), TableShape::Round)])
}
