use crate::classify::Dimension;
use serde::Serialize;
use std::fmt;

/// A recoverable anomaly found while generating. None of these stop the run;
/// they only change which declarations end up in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Discriminant whose leading digit(s) map to no known dimension
    UnrecognizedDimension {
        constant_name: String,
        discriminant: u32,
        code: u32,
    },
    /// Two units sanitize to the same literal suffix; the first one keeps it
    SuffixCollision {
        suffix: String,
        skipped: String,
        owner: String,
    },
    /// A known dimension without any unit, so no wrapper file is produced
    EmptyDimension { dimension: Dimension },
    /// A unit table row that could not be read
    MalformedRow { line: usize, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnrecognizedDimension {
                constant_name,
                discriminant,
                code,
            } => write!(
                f,
                "dropping UNIT_ID_{}: unknown dimension code {} for discriminant {}",
                constant_name, code, discriminant
            ),
            Warning::SuffixCollision {
                suffix,
                skipped,
                owner,
            } => write!(
                f,
                "skipping literal _{} for {} (conflicts with {})",
                suffix, skipped, owner
            ),
            Warning::EmptyDimension { dimension } => {
                write!(f, "no units found for dimension {}", dimension)
            }
            Warning::MalformedRow { line, reason } => {
                write!(f, "skipping malformed row at line {}: {}", line, reason)
            }
        }
    }
}

/// Warnings collected across all pipeline stages, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        self.warnings.extend(warnings);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn collisions(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::SuffixCollision { .. }))
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  {}", warning)?;
            }
        }

        Ok(())
    }
}
