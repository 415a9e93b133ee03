//! Label point regression test
//!
//! Run with:
//! ```
//! cargo test -p pbn-region --test label_reg
//! ```

use pbn_region::{find_label_points, is_boundary};
use pbn_test::{RegParams, checkerboard_map, uniform_map, vertical_split_map};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // -----------------------------------------------------------
    // One anchor per number, each interior to its own region
    // -----------------------------------------------------------
    let numbers = vertical_split_map(10, 6, 1, 2);
    let points = find_label_points(&numbers);
    rp.compare_values(2.0, points.len() as f64, 0.0);

    for p in &points {
        assert_eq!(numbers.value(p.x, p.y), Some(p.number));
        assert!(
            !is_boundary(&numbers, p.x, p.y),
            "anchor ({}, {}) sits on a boundary",
            p.x,
            p.y
        );
    }
    // Sorted by number
    rp.compare_values(1.0, points[0].number as f64, 0.0);
    rp.compare_values(2.0, points[1].number as f64, 0.0);

    // -----------------------------------------------------------
    // A single uniform region anchors at its centroid pixel
    // -----------------------------------------------------------
    let numbers = uniform_map(7, 7, 5);
    let points = find_label_points(&numbers);
    rp.compare_values(1.0, points.len() as f64, 0.0);
    rp.compare_values(3.0, points[0].x as f64, 0.0);
    rp.compare_values(3.0, points[0].y as f64, 0.0);

    // -----------------------------------------------------------
    // All-boundary regions emit nothing
    // -----------------------------------------------------------
    let numbers = checkerboard_map(6, 6, 1, 2);
    let points = find_label_points(&numbers);
    rp.compare_values(0.0, points.len() as f64, 0.0);

    assert!(rp.cleanup(), "label regression test failed");
}
