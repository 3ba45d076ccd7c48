//! Layout pipeline: wrench set + holder parameters → placed holes + holder size.
//!
//! The pipeline runs in two phases. Phase one sizes each hole independently.
//! Phase two walks the wrenches in input order and places the hole centers,
//! since each position depends on the ones before it. Hole and wrench lists
//! stay index-aligned throughout.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::LayoutError;

use super::formulas;
use super::types::{
    HoleGeometry, HolderDimensions, HolderLayout, HolderParameters, PlacedHole, WrenchSpec,
};

impl HolderLayout {
    /// Computes the full holder layout for `wrenches` under `parameters`.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::EmptyWrenchSet`] if `wrenches` is empty.
    /// - [`LayoutError::InvalidDimension`] if a wrench has a size, head width
    ///   or head short length that is not strictly positive.
    /// - [`LayoutError::InvalidParameter`] if a holder parameter is out of range.
    pub fn compute(
        wrenches: &[WrenchSpec],
        parameters: &HolderParameters,
    ) -> Result<Self, LayoutError> {
        validate_parameters(parameters)?;
        validate_wrenches(wrenches)?;

        let geometries = hole_geometries(wrenches, parameters);
        debug!(holes = geometries.len(), "sized holes");

        let holes = place_holes(wrenches, &geometries, parameters)?;
        let dimensions = holder_dimensions(wrenches, &holes, parameters)?;
        info!(
            length = dimensions.length,
            width = dimensions.width,
            height = dimensions.height,
            "computed holder layout for {} wrenches",
            holes.len()
        );

        Ok(Self { holes, dimensions })
    }
}

/// Phase one: sizes the hole for each wrench. Coordinates come later.
pub fn hole_geometries(wrenches: &[WrenchSpec], parameters: &HolderParameters) -> Vec<HoleGeometry> {
    wrenches
        .iter()
        .map(|wrench| {
            let hex_long_diameter = formulas::hex_long_diameter(wrench.size_f());
            HoleGeometry {
                hex_size: wrench.size(),
                hex_long_diameter,
                hole_diameter: formulas::hole_diameter(
                    hex_long_diameter,
                    parameters.hole_enlarge_factor,
                    parameters.hole_enlarge_min,
                ),
            }
        })
        .collect()
}

/// Width each wrench occupies along the holder: the hole or the head,
/// whichever is wider. `geometries` must be index-aligned with `wrenches`.
pub(crate) fn hex_wrench_widths(wrenches: &[WrenchSpec], geometries: &[HoleGeometry]) -> Vec<f64> {
    debug_assert_eq!(wrenches.len(), geometries.len(), "wrench and hole lists out of step");
    wrenches
        .iter()
        .zip(geometries)
        .map(|(wrench, geometry)| geometry.hole_diameter.max(wrench.head_width()))
        .collect()
}

/// Phase two: places every hole center and attaches it to its geometry.
///
/// The row sits one border plus the tallest head's short length below the
/// mounting edge, so no head crosses it.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyWrenchSet`] if there are no wrenches.
pub(crate) fn place_holes(
    wrenches: &[WrenchSpec],
    geometries: &[HoleGeometry],
    parameters: &HolderParameters,
) -> Result<Vec<PlacedHole>, LayoutError> {
    let widths = hex_wrench_widths(wrenches, geometries);
    let max_short_length = max_of(wrenches.iter().map(WrenchSpec::head_short_length))
        .ok_or(LayoutError::EmptyWrenchSet)?;
    let y_center = parameters.widthwise_border + max_short_length;

    let centers = formulas::hole_centers(
        &widths,
        parameters.lengthwise_inner_spacing,
        parameters.lengthwise_border,
        y_center,
    );

    Ok(geometries
        .iter()
        .zip(centers)
        .map(|(geometry, center)| {
            debug!(size = %geometry.hex_size, x = center.x, y = center.y, "placed hole");
            geometry.place(center)
        })
        .collect())
}

/// Overall holder size from the placed holes.
///
/// The trailing clearance after the last hole uses that hole's raw long
/// diameter, not its enlarged hole diameter.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyWrenchSet`] if there are no holes.
pub fn holder_dimensions(
    wrenches: &[WrenchSpec],
    holes: &[PlacedHole],
    parameters: &HolderParameters,
) -> Result<HolderDimensions, LayoutError> {
    let last = holes.last().ok_or(LayoutError::EmptyWrenchSet)?;
    let max_short_length = max_of(wrenches.iter().map(WrenchSpec::head_short_length))
        .ok_or(LayoutError::EmptyWrenchSet)?;
    let max_hole_diameter =
        max_of(holes.iter().map(|hole| hole.hole_diameter)).ok_or(LayoutError::EmptyWrenchSet)?;

    Ok(HolderDimensions {
        length: formulas::holder_length(
            last.hole_coords.x,
            last.hex_long_diameter,
            parameters.lengthwise_border,
        ),
        width: formulas::holder_width(
            max_short_length,
            max_hole_diameter,
            parameters.widthwise_border,
        ),
        height: parameters.height,
    })
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(f64::max)
}

fn validate_wrenches(wrenches: &[WrenchSpec]) -> Result<(), LayoutError> {
    if wrenches.is_empty() {
        return Err(LayoutError::EmptyWrenchSet);
    }

    for (index, wrench) in wrenches.iter().enumerate() {
        if wrench.size() <= Decimal::ZERO {
            return Err(LayoutError::InvalidDimension {
                index,
                field: "size",
                value: wrench.size().to_string(),
            });
        }
        check_positive(index, "head_width", wrench.head_width())?;
        check_positive(index, "head_short_length", wrench.head_short_length())?;
    }

    Ok(())
}

fn check_positive(index: usize, field: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension {
            index,
            field,
            value: value.to_string(),
        })
    }
}

fn validate_parameters(parameters: &HolderParameters) -> Result<(), LayoutError> {
    let non_negative = [
        ("lengthwise_border", parameters.lengthwise_border),
        ("lengthwise_inner_spacing", parameters.lengthwise_inner_spacing),
        ("widthwise_border", parameters.widthwise_border),
        ("height", parameters.height),
        ("hole_enlarge_min", parameters.hole_enlarge_min),
    ];
    for (field, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(LayoutError::InvalidParameter { field, value });
        }
    }

    let factor = parameters.hole_enlarge_factor;
    if !factor.is_finite() || factor < 1.0 {
        return Err(LayoutError::InvalidParameter {
            field: "hole_enlarge_factor",
            value: factor,
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::float_cmp,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::unwrap_used
)]
mod tests {
    use super::*;
    use crate::presets::{default_parameters, default_wrench_set};

    const EPS: f64 = 1e-9;

    fn single_wrench() -> Vec<WrenchSpec> {
        vec![WrenchSpec::new(Decimal::from(2), 24.0, 36.0)]
    }

    #[test]
    fn single_wrench_scenario() {
        let layout = HolderLayout::compute(&single_wrench(), &default_parameters()).unwrap();
        let hole = &layout.holes[0];

        assert!((hole.hex_long_diameter - 2.309_401_076_758_503).abs() < EPS);
        assert!((hole.hole_diameter - 3.309_401_076_758_503).abs() < EPS);
        assert_eq!(hole.hole_coords.x, 5.0);
        assert_eq!(hole.hole_coords.y, 41.0);
        assert!((layout.dimensions.length - 11.154_700_538_379_252).abs() < EPS);
        assert!((layout.dimensions.width - 49.309_401_076_758_505).abs() < EPS);
        assert_eq!(layout.dimensions.height, 38.0);
    }

    #[test]
    fn phase_one_is_index_aligned() {
        let wrenches = default_wrench_set();
        let geometries = hole_geometries(&wrenches, &default_parameters());
        assert_eq!(geometries.len(), wrenches.len());
        for (wrench, geometry) in wrenches.iter().zip(&geometries) {
            assert_eq!(geometry.hex_size, wrench.size());
            assert_eq!(
                geometry.hex_long_diameter,
                formulas::hex_long_diameter(wrench.size_f())
            );
        }
    }

    #[test]
    fn widths_take_the_wider_of_hole_and_head() {
        let wrenches = vec![
            WrenchSpec::new(Decimal::from(2), 24.0, 36.0),
            WrenchSpec::new(Decimal::from(30), 24.0, 36.0),
        ];
        let geometries = hole_geometries(&wrenches, &default_parameters());
        let widths = hex_wrench_widths(&wrenches, &geometries);
        assert_eq!(widths[0], 24.0);
        assert_eq!(widths[1], geometries[1].hole_diameter);
        assert!(widths[1] > 24.0);
    }

    #[test]
    fn default_set_hole_positions() {
        let layout = HolderLayout::compute(&default_wrench_set(), &default_parameters()).unwrap();
        let xs: Vec<f64> = layout.holes.iter().map(|h| h.hole_coords.x).collect();
        assert_eq!(xs, vec![5.0, 31.5, 58.0, 84.5, 111.0, 137.5, 164.0, 194.0]);
        assert!(layout.holes.iter().all(|h| h.hole_coords.y == 51.0));
    }

    #[test]
    fn default_set_dimensions() {
        let layout = HolderLayout::compute(&default_wrench_set(), &default_parameters()).unwrap();
        assert!((layout.dimensions.length - 204.773_502_691_896_25).abs() < EPS);
        assert!((layout.dimensions.width - 69.856_406_460_551_01).abs() < EPS);
        assert_eq!(layout.dimensions.height, 38.0);
    }

    #[test]
    fn default_set_is_reproducible() {
        let first = HolderLayout::compute(&default_wrench_set(), &default_parameters()).unwrap();
        let second = HolderLayout::compute(&default_wrench_set(), &default_parameters()).unwrap();
        assert_eq!(
            first.dimensions.length.to_bits(),
            second.dimensions.length.to_bits()
        );
        assert_eq!(
            first.dimensions.width.to_bits(),
            second.dimensions.width.to_bits()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn width_uses_max_short_length_and_max_hole() {
        let parameters = default_parameters();
        let wrenches = default_wrench_set();
        let layout = HolderLayout::compute(&wrenches, &parameters).unwrap();
        let max_hole = layout
            .holes
            .iter()
            .map(|h| h.hole_diameter)
            .fold(f64::NEG_INFINITY, f64::max);
        let expected = 2.0 * parameters.widthwise_border + 46.0 + max_hole;
        assert!((layout.dimensions.width - expected).abs() < EPS);
    }

    #[test]
    fn length_uses_raw_long_diameter_of_last_hole() {
        let parameters = default_parameters();
        let layout = HolderLayout::compute(&default_wrench_set(), &parameters).unwrap();
        let last = layout.holes.last().unwrap();
        assert_eq!(
            layout.dimensions.length,
            last.hole_coords.x + last.hex_long_diameter / 2.0 + parameters.lengthwise_border
        );
    }

    #[test]
    fn empty_set_is_rejected() {
        let result = HolderLayout::compute(&[], &default_parameters());
        assert_eq!(result, Err(LayoutError::EmptyWrenchSet));
    }

    #[test]
    fn place_holes_without_wrenches_is_rejected() {
        let result = place_holes(&[], &[], &default_parameters());
        assert_eq!(result, Err(LayoutError::EmptyWrenchSet));
    }

    #[test]
    fn place_holes_row_follows_tallest_head() {
        let wrenches = vec![
            WrenchSpec::new(Decimal::from(3), 24.0, 30.0),
            WrenchSpec::new(Decimal::from(4), 24.0, 44.0),
        ];
        let parameters = default_parameters();
        let geometries = hole_geometries(&wrenches, &parameters);
        let holes = place_holes(&wrenches, &geometries, &parameters).unwrap();
        assert_eq!(holes.len(), 2);
        assert!(holes.iter().all(|h| h.hole_coords.y == 49.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "wrench and hole lists out of step")]
    fn widths_require_aligned_lists() {
        let wrenches = default_wrench_set();
        let geometries = hole_geometries(&wrenches[..3], &default_parameters());
        let _ = hex_wrench_widths(&wrenches, &geometries);
    }

    #[test]
    fn holder_dimensions_without_holes_is_rejected() {
        let result = holder_dimensions(&[], &[], &default_parameters());
        assert_eq!(result, Err(LayoutError::EmptyWrenchSet));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let wrenches = vec![
            WrenchSpec::new(Decimal::from(2), 24.0, 36.0),
            WrenchSpec::new(Decimal::ZERO, 24.0, 36.0),
        ];
        let result = HolderLayout::compute(&wrenches, &default_parameters());
        assert_eq!(
            result,
            Err(LayoutError::InvalidDimension {
                index: 1,
                field: "size",
                value: "0".to_string(),
            })
        );
    }

    #[test]
    fn non_positive_head_dimensions_are_rejected() {
        let narrow = vec![WrenchSpec::new(Decimal::from(2), -1.0, 36.0)];
        let Err(LayoutError::InvalidDimension { field, .. }) =
            HolderLayout::compute(&narrow, &default_parameters())
        else {
            panic!("expected invalid head width");
        };
        assert_eq!(field, "head_width");

        let short = vec![WrenchSpec::new(Decimal::from(2), 24.0, f64::NAN)];
        let Err(LayoutError::InvalidDimension { field, .. }) =
            HolderLayout::compute(&short, &default_parameters())
        else {
            panic!("expected invalid head short length");
        };
        assert_eq!(field, "head_short_length");
    }

    #[test]
    fn bad_parameters_are_rejected() {
        let mut parameters = default_parameters();
        parameters.hole_enlarge_factor = 0.9;
        assert_eq!(
            HolderLayout::compute(&single_wrench(), &parameters),
            Err(LayoutError::InvalidParameter {
                field: "hole_enlarge_factor",
                value: 0.9,
            })
        );

        let mut parameters = default_parameters();
        parameters.widthwise_border = -5.0;
        assert_eq!(
            HolderLayout::compute(&single_wrench(), &parameters),
            Err(LayoutError::InvalidParameter {
                field: "widthwise_border",
                value: -5.0,
            })
        );
    }

    #[test]
    fn zero_borders_are_allowed() {
        let parameters = HolderParameters {
            lengthwise_border: 0.0,
            lengthwise_inner_spacing: 0.0,
            widthwise_border: 0.0,
            height: 0.0,
            hole_enlarge_factor: 1.0,
            hole_enlarge_min: 0.0,
        };
        let layout = HolderLayout::compute(&single_wrench(), &parameters).unwrap();
        assert_eq!(layout.holes[0].hole_coords.x, 0.0);
        assert_eq!(layout.holes[0].hole_coords.y, 36.0);
    }
}
