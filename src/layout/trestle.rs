// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::SeatAssignment;

use super::{
    Point, SeatPlacement, TableLayout, TableOutline, LABEL_CLEARANCE_ABOVE, LABEL_TOP_FLOOR,
    SEAT_RADIUS, TABLE_SIZE, TRESTLE_CORNER_RADIUS, TRESTLE_HEIGHT, TRESTLE_ROW_OFFSET,
    TRESTLE_ROW_PADDING, TRESTLE_WIDTH,
};

/// Trestle layout: seats split into a top row of `ceil(n/2)` and a bottom row
/// of the remainder, each row offset a fixed distance from the rectangle edge.
///
/// Within a row, seats spread evenly across `width − 2·padding`; a row of one
/// seat is horizontally centered. Labels always sit above the marker (the rows
/// are already clear of the rectangle, so there is no top-seat exception).
pub(super) fn layout_trestle(seats: &[SeatAssignment]) -> TableLayout {
    let center = Point::new(TABLE_SIZE / 2.0, TABLE_SIZE / 2.0);
    let origin = Point::new(
        center.x - TRESTLE_WIDTH / 2.0,
        center.y - TRESTLE_HEIGHT / 2.0,
    );
    let outline = TableOutline::RoundedRect {
        origin,
        width: TRESTLE_WIDTH,
        height: TRESTLE_HEIGHT,
        corner_radius: TRESTLE_CORNER_RADIUS,
    };

    let top_edge = origin.y;
    let bottom_edge = origin.y + TRESTLE_HEIGHT;

    let count = seats.len();
    let top_count = (count + 1) / 2;

    let mut placements = Vec::with_capacity(count);
    for (position, seat) in seats.iter().enumerate() {
        let in_top_row = position < top_count;
        let (index_in_row, row_count, row_y) = if in_top_row {
            (position, top_count, top_edge - TRESTLE_ROW_OFFSET)
        } else {
            (
                position - top_count,
                count - top_count,
                bottom_edge + TRESTLE_ROW_OFFSET,
            )
        };

        let seat_x = if row_count > 1 {
            let usable = TRESTLE_WIDTH - 2.0 * TRESTLE_ROW_PADDING;
            let step = usable / (row_count - 1) as f64;
            origin.x + TRESTLE_ROW_PADDING + step * index_in_row as f64
        } else {
            center.x
        };

        let seat_center = Point::new(seat_x, row_y);
        let label_y = (seat_center.y - SEAT_RADIUS - LABEL_CLEARANCE_ABOVE).max(LABEL_TOP_FLOOR);

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
    use rstest::rstest;

    use super::layout_trestle;
    use crate::layout::test_utils::{assert_close, seat_run};
    use crate::layout::{
        LABEL_CLEARANCE_ABOVE, SEAT_RADIUS, TABLE_SIZE, TRESTLE_HEIGHT, TRESTLE_ROW_OFFSET,
        TRESTLE_ROW_PADDING, TRESTLE_WIDTH,
    };

    const CENTER: f64 = TABLE_SIZE / 2.0;
    const TOP_ROW_Y: f64 = CENTER - TRESTLE_HEIGHT / 2.0 - TRESTLE_ROW_OFFSET;
    const BOTTOM_ROW_Y: f64 = CENTER + TRESTLE_HEIGHT / 2.0 + TRESTLE_ROW_OFFSET;

    #[rstest]
    #[case(1, 1, 0)]
    #[case(2, 1, 1)]
    #[case(5, 3, 2)]
    #[case(6, 3, 3)]
    #[case(9, 5, 4)]
    fn rows_split_ceil_floor(
        #[case] count: usize,
        #[case] expected_top: usize,
        #[case] expected_bottom: usize,
    ) {
        let layout = layout_trestle(&seat_run(count));

        let top = layout
            .seats()
            .iter()
            .filter(|seat| seat.center().y == TOP_ROW_Y)
            .count();
        let bottom = layout
            .seats()
            .iter()
            .filter(|seat| seat.center().y == BOTTOM_ROW_Y)
            .count();

        assert_eq!(top, expected_top);
        assert_eq!(bottom, expected_bottom);
        assert_eq!(top + bottom, count);
    }

    #[test]
    fn rows_spread_evenly_across_the_padded_width() {
        let layout = layout_trestle(&seat_run(6));
        let left = CENTER - TRESTLE_WIDTH / 2.0 + TRESTLE_ROW_PADDING;
        let step = (TRESTLE_WIDTH - 2.0 * TRESTLE_ROW_PADDING) / 2.0;

        // Top row holds positions 0..3, bottom row 3..6; both rows of three.
        for row in [&layout.seats()[0..3], &layout.seats()[3..6]] {
            for (index_in_row, placement) in row.iter().enumerate() {
                assert_close(placement.center().x, left + step * index_in_row as f64);
            }
        }
    }

    #[test]
    fn single_seat_rows_are_horizontally_centered() {
        // n=1: lone top-row seat, empty bottom row.
        let single = layout_trestle(&seat_run(1));
        assert_close(single.seats()[0].center().x, CENTER);
        assert_close(single.seats()[0].center().y, TOP_ROW_Y);

        // n=3: top row of two, bottom row of one.
        let three = layout_trestle(&seat_run(3));
        let bottom = &three.seats()[2];
        assert_close(bottom.center().x, CENTER);
        assert_close(bottom.center().y, BOTTOM_ROW_Y);
    }

    #[test]
    fn labels_sit_above_markers_in_both_rows() {
        let layout = layout_trestle(&seat_run(4));

        for placement in layout.seats() {
            let expected = placement.center().y - SEAT_RADIUS - LABEL_CLEARANCE_ABOVE;
            assert_close(placement.label_anchor().y, expected);
            assert_close(placement.label_anchor().x, placement.center().x);
        }
    }
}
