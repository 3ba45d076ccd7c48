//! Wrench, holder and hole data types.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A hex wrench described by the dimensions that matter for seating it in a
/// holder, plus a few measures derived from its nominal size.
///
/// All sizes are in millimetres. The derived measures are computed once in
/// [`WrenchSpec::new`] and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WrenchSpec {
    size: Decimal,
    head_width: f64,
    head_short_length: f64,
    size_f: f64,
    circumference: f64,
    square: f64,
    area: f64,
}

impl WrenchSpec {
    /// Creates a wrench from its measured dimensions.
    ///
    /// - `size` is the nominal hex size (side length).
    /// - `head_width` is the widest width of the head, used to space holes.
    /// - `head_short_length` is the short length of the head, used to keep
    ///   holes away from the mounting side of the holder.
    ///
    /// No validation happens here; the layout pipeline rejects bad values.
    pub fn new(size: Decimal, head_width: f64, head_short_length: f64) -> Self {
        let size_f = decimal_to_f64(size);
        Self {
            size,
            head_width,
            head_short_length,
            size_f,
            circumference: 6.0 * size_f,
            square: std::f64::consts::SQRT_2 * size_f,
            area: 3.0 / 2.0 * 3.0_f64.sqrt() * size_f * size_f,
        }
    }

    /// Nominal size as an exact decimal.
    pub const fn size(&self) -> Decimal {
        self.size
    }

    /// Widest width of the wrench head.
    pub const fn head_width(&self) -> f64 {
        self.head_width
    }

    /// Shortest length from the head to the handle bend.
    pub const fn head_short_length(&self) -> f64 {
        self.head_short_length
    }

    /// Nominal size as a float, for the geometry formulas.
    pub const fn size_f(&self) -> f64 {
        self.size_f
    }

    /// Perimeter of the hex profile.
    pub const fn circumference(&self) -> f64 {
        self.circumference
    }

    /// `sqrt(2) * size`.
    pub const fn square(&self) -> f64 {
        self.square
    }

    /// Cross-section area of the hex profile.
    pub const fn area(&self) -> f64 {
        self.area
    }
}

/// Converts a decimal to the nearest `f64`.
///
/// Goes through the decimal's textual form so the result is correctly
/// rounded, which `Decimal::to_f64` does not guarantee for fractional values.
fn decimal_to_f64(value: Decimal) -> f64 {
    value
        .to_string()
        .parse()
        .unwrap_or_else(|_| value.to_f64().unwrap_or(f64::NAN))
}

/// Design parameters of the holder block.
///
/// ```text
/// ----> length ---->
/// +--------------------------------+ |
/// |           H o l e s            | | width
/// |  x    x    x    x    x    x    | V
/// +--------------------------------+
/// ```
///
/// Height is the thickness of the block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HolderParameters {
    /// Space between the first/last hole and the lengthwise edges.
    pub lengthwise_border: f64,
    /// Gap left between neighbouring wrenches.
    pub lengthwise_inner_spacing: f64,
    /// Space between the holes/heads and the widthwise edges.
    pub widthwise_border: f64,
    /// Thickness of the block.
    pub height: f64,
    /// Multiplicative hole enlargement.
    pub hole_enlarge_factor: f64,
    /// Additive hole enlargement floor.
    pub hole_enlarge_min: f64,
}

impl Default for HolderParameters {
    fn default() -> Self {
        crate::presets::default_parameters()
    }
}

/// Hole center on the holder face.
///
/// `x` runs along the length axis from the left border, `y` runs along the
/// width axis from the top border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleCoords {
    /// Position along the length axis.
    pub x: f64,
    /// Position along the width axis.
    pub y: f64,
}

/// Hole dimensions for one wrench, before placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoleGeometry {
    /// Size of the wrench seated in this hole.
    pub hex_size: Decimal,
    /// Corner-to-corner diameter of the wrench profile.
    pub hex_long_diameter: f64,
    /// Drilled hole diameter.
    pub hole_diameter: f64,
}

impl HoleGeometry {
    /// Attaches a center, producing the final hole.
    pub const fn place(self, hole_coords: HoleCoords) -> PlacedHole {
        PlacedHole {
            hex_size: self.hex_size,
            hex_long_diameter: self.hex_long_diameter,
            hole_diameter: self.hole_diameter,
            hole_coords,
        }
    }
}

/// A hole with its dimensions and its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedHole {
    /// Size of the wrench seated in this hole.
    pub hex_size: Decimal,
    /// Corner-to-corner diameter of the wrench profile.
    pub hex_long_diameter: f64,
    /// Drilled hole diameter.
    pub hole_diameter: f64,
    /// Hole center.
    pub hole_coords: HoleCoords,
}

impl PlacedHole {
    /// The dimensions of this hole without its center.
    pub const fn geometry(&self) -> HoleGeometry {
        HoleGeometry {
            hex_size: self.hex_size,
            hex_long_diameter: self.hex_long_diameter,
            hole_diameter: self.hole_diameter,
        }
    }
}

/// Overall size of the holder block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HolderDimensions {
    /// Extent along the length axis.
    pub length: f64,
    /// Extent along the width axis.
    pub width: f64,
    /// Thickness of the block.
    pub height: f64,
}

/// Output of the layout pipeline: every hole, in input order, and the
/// holder's overall dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolderLayout {
    /// Placed holes, index-aligned with the input wrenches.
    pub holes: Vec<PlacedHole>,
    /// Overall holder size.
    pub dimensions: HolderDimensions,
}
