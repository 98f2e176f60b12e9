// Grouping unit records by physical dimension

pub mod dimension;

pub use dimension::{Dimension, DIMENSION_DIVISOR};

use crate::diagnostics::{Diagnostics, Warning};
use crate::extract::UnitDefinition;
use serde::Serialize;
use std::collections::BTreeMap;

/// Units bucketed by dimension. Within a bucket, units keep the order they
/// were first seen in the input; iteration always follows `Dimension::ALL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DimensionGroups {
    groups: BTreeMap<Dimension, Vec<UnitDefinition>>,
}

impl DimensionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dimension: Dimension, unit: UnitDefinition) {
        self.groups.entry(dimension).or_default().push(unit);
    }

    /// Units of one dimension (empty when none were found)
    pub fn units(&self, dimension: Dimension) -> &[UnitDefinition] {
        self.groups
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty groups in processing order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[UnitDefinition])> {
        Dimension::ALL
            .into_iter()
            .filter_map(move |d| self.groups.get(&d).map(|units| (d, units.as_slice())))
    }

    pub fn count(&self, dimension: Dimension) -> usize {
        self.units(dimension).len()
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Assign each record to its dimension. Records with an unknown dimension
/// code are dropped from every later stage and reported as a warning.
pub fn classify(units: Vec<UnitDefinition>, diagnostics: &mut Diagnostics) -> DimensionGroups {
    let mut groups = DimensionGroups::new();

    for unit in units {
        match Dimension::from_discriminant(unit.discriminant) {
            Some(dimension) => groups.push(dimension, unit),
            None => diagnostics.warn(Warning::UnrecognizedDimension {
                code: Dimension::code_of(unit.discriminant),
                discriminant: unit.discriminant,
                constant_name: unit.constant_name,
            }),
        }
    }

    groups
}
