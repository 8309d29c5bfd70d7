// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use crate::model::SeatAssignment;

use super::{
    Point, SeatPlacement, TableLayout, TableOutline, LABEL_CLEARANCE_ABOVE, LABEL_CLEARANCE_BELOW,
    LABEL_TOP_FLOOR, ROUND_SEAT_OFFSET, SEAT_RADIUS, TABLE_RADIUS, TABLE_SIZE,
};

/// Round layout: seat `i` of `n` sits at angle `2π·i/n − π/2` (seat 0 at the
/// top, clockwise), at `TABLE_RADIUS + ROUND_SEAT_OFFSET` from the center.
///
/// A seat within π/8 of the top puts its name label *below* the marker so it
/// cannot collide with the centered capacity label; every other label sits
/// above the marker, floored at `LABEL_TOP_FLOOR`.
pub(super) fn layout_round(seats: &[SeatAssignment]) -> TableLayout {
    let center = Point::new(TABLE_SIZE / 2.0, TABLE_SIZE / 2.0);
    let outline = TableOutline::Circle {
        center,
        radius: TABLE_RADIUS,
    };

    let count = seats.len();
    let mut placements = Vec::with_capacity(count);
    for (position, seat) in seats.iter().enumerate() {
        let angle = (2.0 * PI * position as f64) / count as f64 - FRAC_PI_2;
        let radius = TABLE_RADIUS + ROUND_SEAT_OFFSET;
        let seat_center = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );

        let is_top_seat = (angle + FRAC_PI_2).abs() < FRAC_PI_8;
        let label_y = if is_top_seat {
            seat_center.y + SEAT_RADIUS + LABEL_CLEARANCE_BELOW
        } else {
            (seat_center.y - SEAT_RADIUS - LABEL_CLEARANCE_ABOVE).max(LABEL_TOP_FLOOR)
        };

        placements.push(SeatPlacement::new(
            position,
            seat,
            seat_center,
            Point::new(seat_center.x, label_y),
        ));
    }

    TableLayout {
        outline,
        capacity_anchor: center,
        seats: placements,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use rstest::rstest;

    use super::layout_round;
    use crate::layout::test_utils::{assert_close, seat_run};
    use crate::layout::{
        LABEL_CLEARANCE_ABOVE, LABEL_CLEARANCE_BELOW, LABEL_TOP_FLOOR, ROUND_SEAT_OFFSET,
        SEAT_RADIUS, TABLE_RADIUS, TABLE_SIZE,
    };

    const CENTER: f64 = TABLE_SIZE / 2.0;
    const SEAT_ORBIT: f64 = TABLE_RADIUS + ROUND_SEAT_OFFSET;

    fn seat_angle(center_x: f64, center_y: f64) -> f64 {
        (center_y - CENTER).atan2(center_x - CENTER)
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(8)]
    #[case(13)]
    fn seats_are_evenly_spaced_with_seat_zero_at_the_top(#[case] count: usize) {
        let layout = layout_round(&seat_run(count));
        assert_eq!(layout.seats().len(), count);

        for placement in layout.seats() {
            let center = placement.center();
            let expected =
                (2.0 * PI * placement.position() as f64) / count as f64 - FRAC_PI_2;

            assert_close(center.x, CENTER + SEAT_ORBIT * expected.cos());
            assert_close(center.y, CENTER + SEAT_ORBIT * expected.sin());

            // Angular distance from the canonical angle is zero modulo 2π.
            let actual = seat_angle(center.x, center.y);
            let wrapped = (actual - expected).rem_euclid(2.0 * PI);
            assert!(wrapped < 1e-9 || (2.0 * PI - wrapped) < 1e-9);
        }

        // Seat 0 sits straight up from the table center.
        let top = layout.seats()[0].center();
        assert_close(top.x, CENTER);
        assert_close(top.y, CENTER - SEAT_ORBIT);
    }

    #[test]
    fn top_seat_label_drops_below_the_marker() {
        let layout = layout_round(&seat_run(4));
        let top = &layout.seats()[0];

        let drop = top.label_anchor().y - top.center().y;
        assert_close(drop, SEAT_RADIUS + LABEL_CLEARANCE_BELOW);
        assert_close(top.label_anchor().x, top.center().x);
    }

    #[test]
    fn non_top_labels_sit_above_the_marker_with_a_floor() {
        let layout = layout_round(&seat_run(8));

        for placement in layout.seats().iter().skip(1) {
            let expected = (placement.center().y - SEAT_RADIUS - LABEL_CLEARANCE_ABOVE)
                .max(LABEL_TOP_FLOOR);
            assert_close(placement.label_anchor().y, expected);
            assert!(placement.label_anchor().y >= LABEL_TOP_FLOOR);
        }
    }

    #[test]
    fn single_seat_table_places_its_seat_at_the_top() {
        let layout = layout_round(&seat_run(1));
        assert_eq!(layout.seats().len(), 1);

        let only = layout.seats()[0].center();
        assert_close(only.x, CENTER);
        assert_close(only.y, CENTER - SEAT_ORBIT);
    }
}
