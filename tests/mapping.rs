#![allow(missing_docs)]
//! Host-level tests for coordinate mapping and the sink pixel.

use pattern_panel::config::{HEIGHT, PIXEL_COUNT, PanelGrid, VISIBLE_PIXEL_COUNT, WIDTH};
use pattern_panel::mapping::{PixelGrid, Wiring};

#[test]
fn in_bounds_is_row_major() {
    assert_eq!(PanelGrid::index(0, 0), 0);
    assert_eq!(PanelGrid::index(1, 0), 1);
    assert_eq!(PanelGrid::index(0, 1), WIDTH);
    assert_eq!(PanelGrid::index(WIDTH - 1, HEIGHT - 1), VISIBLE_PIXEL_COUNT - 1);
}

#[test]
fn out_of_bounds_maps_to_sink() {
    assert_eq!(PanelGrid::index(WIDTH, 0), PanelGrid::SINK);
    assert_eq!(PanelGrid::index(0, HEIGHT), PanelGrid::SINK);
    assert_eq!(PanelGrid::index(usize::MAX, usize::MAX), PanelGrid::SINK);
    assert_eq!(PanelGrid::SINK, VISIBLE_PIXEL_COUNT);
    assert_eq!(PanelGrid::LEN, PIXEL_COUNT);
}

#[test]
fn index_is_total_over_a_wide_coordinate_range() {
    // Every coordinate in a range far beyond the panel gets some valid slot.
    for y in 0..256 {
        for x in 0..256 {
            let index = PanelGrid::index(x, y);
            assert!(index < PanelGrid::LEN);
        }
    }
}

#[test]
fn visible_mapping_is_injective() {
    let mut seen = [false; VISIBLE_PIXEL_COUNT];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let index = PanelGrid::index(x, y);
            assert!(index < VISIBLE_PIXEL_COUNT);
            assert!(!seen[index], "({x},{y}) collides");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn row_major_strip_order_is_identity() {
    const ORDER: [u16; 6] = PixelGrid::<3, 2>::strip_order(Wiring::RowMajor);
    assert_eq!(ORDER, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn serpentine_row_major_reverses_odd_rows() {
    const ORDER: [u16; 6] = PixelGrid::<3, 2>::strip_order(Wiring::SerpentineRowMajor);
    // Row 0 left-to-right, row 1 right-to-left.
    assert_eq!(ORDER, [0, 1, 2, 5, 4, 3]);
}

#[test]
fn serpentine_column_major_reverses_odd_columns() {
    const ORDER: [u16; 6] = PixelGrid::<3, 2>::strip_order(Wiring::SerpentineColumnMajor);
    // Column 0 top-to-bottom, column 1 bottom-to-top, column 2 top-to-bottom.
    assert_eq!(ORDER, [0, 3, 4, 1, 2, 5]);
}

#[test]
#[should_panic(expected = "N must equal W*H")]
fn strip_order_rejects_a_mismatched_length() {
    let _ = PixelGrid::<3, 2>::strip_order::<5>(Wiring::RowMajor);
}

#[test]
fn strip_order_is_a_permutation_of_the_panel() {
    const ORDER: [u16; VISIBLE_PIXEL_COUNT] = PanelGrid::strip_order(Wiring::SerpentineColumnMajor);
    let mut seen = [false; VISIBLE_PIXEL_COUNT];
    for &logical in &ORDER {
        let logical = logical as usize;
        assert!(logical < VISIBLE_PIXEL_COUNT);
        assert!(!seen[logical]);
        seen[logical] = true;
    }
}
