//! Geometry formulas for hole sizing, hole placement and holder size.
//!
//! Every function here is pure. Evaluation order inside each formula is
//! fixed so results are reproducible bit for bit.

use super::types::HoleCoords;

/// Corner-to-corner diameter of a regular hexagon with the given side length.
pub fn hex_long_diameter(side: f64) -> f64 {
    2.0 / 3.0_f64.sqrt() * side
}

/// Diameter of the hole drilled for a wrench of the given long diameter.
///
/// The hole clears the wrench by the larger of an additive margin
/// (`enlarge_min`) and a multiplicative one (`enlarge_factor`): small wrenches
/// get the additive floor, large ones the proportional margin.
pub fn hole_diameter(hex_long_diameter: f64, enlarge_factor: f64, enlarge_min: f64) -> f64 {
    (hex_long_diameter + enlarge_min).max(hex_long_diameter * enlarge_factor)
}

/// Places hole centers in a single row.
///
/// `widths` are the spacing widths of the wrenches, in placement order. The
/// first hole's center sits on `lengthwise_border`; each following hole
/// starts `inner_spacing` after the right edge of the previous one. Every
/// center gets the same `y_center`.
pub fn hole_centers(
    widths: &[f64],
    inner_spacing: f64,
    lengthwise_border: f64,
    y_center: f64,
) -> Vec<HoleCoords> {
    let Some(first) = widths.first() else {
        return Vec::new();
    };
    let start = lengthwise_border - first / 2.0;

    widths
        .iter()
        .scan(start, |previous_edge, width| {
            let half_width = width / 2.0;
            let x = *previous_edge + half_width;
            *previous_edge = x + half_width + inner_spacing;
            Some(HoleCoords { x, y: y_center })
        })
        .collect()
}

/// Full holder length: the last hole's center, half its diameter, then the border.
pub fn holder_length(last_hole_x_center: f64, hole_diameter: f64, lengthwise_border: f64) -> f64 {
    last_hole_x_center + hole_diameter / 2.0 + lengthwise_border
}

/// Full holder width: a border on each side, room for the tallest wrench head
/// above the hole row, and the widest hole.
pub fn holder_width(max_short_length: f64, max_hole_diameter: f64, widthwise_border: f64) -> f64 {
    widthwise_border + max_short_length + max_hole_diameter + widthwise_border
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn long_diameter_of_unit_side() {
        assert!((hex_long_diameter(1.0) - 1.154_700_538_379_251_5).abs() < EPS);
    }

    #[test]
    fn long_diameter_scales_linearly() {
        for side in [0.5, 1.0, 2.0, 2.5, 8.0, 10.0, 42.0] {
            assert_eq!(hex_long_diameter(side), 2.0 / 3.0_f64.sqrt() * side);
        }
    }

    #[test]
    fn hole_diameter_uses_additive_floor_for_small_wrenches() {
        // 2.309 * 1.2 = 2.771 < 2.309 + 1
        let long = hex_long_diameter(2.0);
        assert_eq!(hole_diameter(long, 1.2, 1.0), long + 1.0);
    }

    #[test]
    fn hole_diameter_uses_factor_for_large_wrenches() {
        let long = hex_long_diameter(10.0);
        assert_eq!(hole_diameter(long, 1.2, 1.0), long * 1.2);
    }

    #[test]
    fn hole_diameter_never_smaller_than_wrench() {
        for long in [0.1, 1.0, 2.3, 5.77, 11.5, 100.0] {
            for factor in [1.0, 1.05, 1.2, 2.0] {
                for min in [0.0, 0.5, 1.0, 3.0] {
                    assert!(hole_diameter(long, factor, min) >= long);
                }
            }
        }
    }

    #[test]
    fn hole_diameter_monotone_in_factor_and_min() {
        let long = 4.618_802_153_517_007;
        let factors = [1.0, 1.1, 1.2, 1.5, 2.0];
        let mins = [0.0, 0.25, 1.0, 2.0, 4.0];
        for min in mins {
            for pair in factors.windows(2) {
                assert!(hole_diameter(long, pair[0], min) <= hole_diameter(long, pair[1], min));
            }
        }
        for factor in factors {
            for pair in mins.windows(2) {
                assert!(hole_diameter(long, factor, pair[0]) <= hole_diameter(long, factor, pair[1]));
            }
        }
    }

    #[test]
    fn hole_centers_empty_widths() {
        assert!(hole_centers(&[], 2.5, 5.0, 41.0).is_empty());
    }

    #[test]
    fn first_hole_center_on_border() {
        let centers = hole_centers(&[24.0, 31.0], 2.5, 5.0, 41.0);
        assert_eq!(centers[0].x, 5.0);
        assert_eq!(centers[1].x, 5.0 + 12.0 + 2.5 + 15.5);

        let wide_first = hole_centers(&[31.0, 24.0], 2.5, 5.0, 41.0);
        assert_eq!(wide_first[0].x, 5.0);
    }

    #[test]
    fn adjacent_holes_separated_by_inner_spacing() {
        let widths = [24.0, 24.0, 31.0, 6.5, 13.25];
        let spacing = 2.5;
        let centers = hole_centers(&widths, spacing, 5.0, 41.0);
        assert_eq!(centers.len(), widths.len());
        for i in 0..widths.len() - 1 {
            let gap = centers[i + 1].x - centers[i].x;
            assert_eq!(gap, widths[i] / 2.0 + spacing + widths[i + 1] / 2.0);
        }
    }

    #[test]
    fn adjacent_spacing_holds_for_irrational_widths() {
        let widths = [3.309_401_076_758_503_4, 24.0, 13.856_406_460_551_02, 7.1];
        let centers = hole_centers(&widths, 2.5, 5.0, 0.0);
        for i in 0..widths.len() - 1 {
            let gap = centers[i + 1].x - centers[i].x;
            let expected = widths[i] / 2.0 + 2.5 + widths[i + 1] / 2.0;
            assert!((gap - expected).abs() < EPS);
        }
    }

    #[test]
    fn all_centers_share_y() {
        let centers = hole_centers(&[24.0, 24.0, 31.0], 2.5, 5.0, 51.0);
        assert!(centers.iter().all(|c| c.y == 51.0));
    }

    #[test]
    fn holder_length_adds_half_diameter_and_border() {
        assert_eq!(holder_length(194.0, 12.0, 5.0), 205.0);
    }

    #[test]
    fn holder_width_adds_both_borders() {
        assert_eq!(holder_width(36.0, 3.5, 5.0), 49.5);
    }
}
