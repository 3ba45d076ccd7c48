//! Serializable layout request, as received from JavaScript callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::presets;

use super::types::{HolderLayout, HolderParameters, WrenchSpec};

/// Measured dimensions of one wrench. Derived measures are not part of the
/// request; they are recomputed by [`WrenchSpec::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrenchInput {
    /// Nominal hex size in millimetres.
    pub size: Decimal,
    /// Widest width of the head.
    pub head_width: f64,
    /// Shortest length from the head to the handle bend.
    pub head_short_length: f64,
}

impl From<WrenchInput> for WrenchSpec {
    fn from(input: WrenchInput) -> Self {
        Self::new(input.size, input.head_width, input.head_short_length)
    }
}

impl From<&WrenchSpec> for WrenchInput {
    fn from(wrench: &WrenchSpec) -> Self {
        Self {
            size: wrench.size(),
            head_width: wrench.head_width(),
            head_short_length: wrench.head_short_length(),
        }
    }
}

/// A wrench set plus holder parameters. Missing parameters fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Wrenches in placement order.
    pub wrenches: Vec<WrenchInput>,
    /// Holder design parameters.
    #[serde(default)]
    pub parameters: HolderParameters,
}

impl LayoutRequest {
    /// The default eight-wrench set with the default parameters.
    pub fn preset() -> Self {
        Self {
            wrenches: presets::default_wrench_set()
                .iter()
                .map(WrenchInput::from)
                .collect(),
            parameters: presets::default_parameters(),
        }
    }

    /// Builds the wrench specs for this request.
    pub fn wrench_specs(&self) -> Vec<WrenchSpec> {
        self.wrenches.iter().copied().map(WrenchSpec::from).collect()
    }

    /// Runs the layout pipeline for this request.
    ///
    /// # Errors
    ///
    /// See [`HolderLayout::compute`].
    pub fn compute(&self) -> Result<HolderLayout, LayoutError> {
        HolderLayout::compute(&self.wrench_specs(), &self.parameters)
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn preset_round_trips_through_specs() {
        let request = LayoutRequest::preset();
        assert_eq!(request.wrench_specs(), presets::default_wrench_set());
    }

    #[test]
    fn parameters_default_when_missing() {
        let json = r#"{"wrenches":[{"size":"2.5","head_width":24.0,"head_short_length":36.0}]}"#;
        let request: LayoutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.parameters, presets::default_parameters());
        assert_eq!(request.wrenches[0].size, Decimal::new(25, 1));
    }

    #[test]
    fn numeric_sizes_are_accepted() {
        let json = r#"{"wrenches":[{"size":3,"head_width":24.0,"head_short_length":36.0}]}"#;
        let request: LayoutRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.wrenches[0].size, Decimal::from(3));
    }

    #[test]
    fn compute_matches_direct_pipeline() {
        let request = LayoutRequest::preset();
        let direct = HolderLayout::compute(
            &presets::default_wrench_set(),
            &presets::default_parameters(),
        );
        assert_eq!(request.compute(), direct);
    }
}
