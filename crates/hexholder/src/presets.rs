//! Default wrench set and holder parameters used by the CLI.

use rust_decimal::Decimal;

use crate::holder::{HolderParameters, WrenchSpec};

/// The eight-wrench metric set (2 mm to 10 mm) with measured head sizes.
pub fn default_wrench_set() -> Vec<WrenchSpec> {
    vec![
        WrenchSpec::new(Decimal::from(2), 24.0, 36.0),
        WrenchSpec::new(Decimal::new(25, 1), 24.0, 36.0),
        WrenchSpec::new(Decimal::from(3), 24.0, 36.0),
        WrenchSpec::new(Decimal::from(4), 24.0, 36.0),
        WrenchSpec::new(Decimal::from(5), 24.0, 36.0),
        WrenchSpec::new(Decimal::from(6), 24.0, 36.0),
        WrenchSpec::new(Decimal::from(8), 24.0, 36.0),
        WrenchSpec::new(Decimal::from(10), 31.0, 46.0),
    ]
}

/// Holder parameters for a 38 mm block with 5 mm borders.
pub const fn default_parameters() -> HolderParameters {
    HolderParameters {
        lengthwise_border: 5.0,
        lengthwise_inner_spacing: 2.5,
        widthwise_border: 5.0,
        height: 38.0,
        hole_enlarge_factor: 1.20,
        hole_enlarge_min: 1.0,
    }
}
