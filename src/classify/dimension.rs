use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminants carry their dimension code in the digits above this divisor
pub const DIMENSION_DIVISOR: u32 = 10_000;

/// Physical dimensions that get a wrapper module.
/// Declaration order is the processing order for literal suffix priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Time,
    Angle,
    Mass,
    Power,
}

struct DimensionEntry {
    dimension: Dimension,
    code: u32,
    name: &'static str,
    file_name: &'static str,
}

// Adding a dimension means adding a row here (and a variant above)
static DIMENSION_TABLE: [DimensionEntry; 5] = [
    DimensionEntry {
        dimension: Dimension::Length,
        code: 1,
        name: "Length",
        file_name: "length.hpp",
    },
    DimensionEntry {
        dimension: Dimension::Time,
        code: 2,
        name: "Time",
        file_name: "time.hpp",
    },
    DimensionEntry {
        dimension: Dimension::Angle,
        code: 3,
        name: "Angle",
        file_name: "angular.hpp",
    },
    DimensionEntry {
        dimension: Dimension::Mass,
        code: 4,
        name: "Mass",
        file_name: "mass.hpp",
    },
    DimensionEntry {
        dimension: Dimension::Power,
        code: 5,
        name: "Power",
        file_name: "power.hpp",
    },
];

impl Dimension {
    /// Every dimension, in processing order
    pub const ALL: [Dimension; 5] = [
        Dimension::Length,
        Dimension::Time,
        Dimension::Angle,
        Dimension::Mass,
        Dimension::Power,
    ];

    fn entry(self) -> &'static DimensionEntry {
        &DIMENSION_TABLE[self as usize]
    }

    pub fn from_code(code: u32) -> Option<Dimension> {
        DIMENSION_TABLE
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.dimension)
    }

    pub fn code_of(discriminant: u32) -> u32 {
        discriminant / DIMENSION_DIVISOR
    }

    pub fn from_discriminant(discriminant: u32) -> Option<Dimension> {
        Self::from_code(Self::code_of(discriminant))
    }

    pub fn code(self) -> u32 {
        self.entry().code
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Output file name of the wrapper module, relative to the `units/` directory
    pub fn file_name(self) -> &'static str {
        self.entry().file_name
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
