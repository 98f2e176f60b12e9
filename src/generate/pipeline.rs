use crate::classify::{classify, Dimension, DimensionGroups};
use crate::diagnostics::{Diagnostics, Warning};
use crate::emit::{emit_literals, emit_wrapper, RenderOptions, SuffixRegistry};
use crate::extract::{extract_units, InputFormat};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Directory (relative to the output root) holding the per-dimension modules
pub const UNITS_DIR: &str = "units";
pub const LITERALS_FILE: &str = "literals.hpp";

/// One rendered file, addressed relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything a run produces, before anything touches the disk
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub groups: DimensionGroups,
    pub files: Vec<GeneratedFile>,
    pub registry: SuffixRegistry,
    pub diagnostics: Diagnostics,
    pub summary: Summary,
}

impl Generation {
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == PathBuf::from(path))
    }
}

/// Per-dimension unit counts, in processing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub counts: Vec<(Dimension, usize)>,
    pub literals: usize,
}

impl Summary {
    fn from_groups(groups: &DimensionGroups, literals: usize) -> Self {
        Self {
            counts: Dimension::ALL.iter().map(|&d| (d, groups.count(d))).collect(),
            literals,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total units generated: {}", self.total())?;
        for (dimension, count) in &self.counts {
            writeln!(f, "  {}: {} units", dimension, count)?;
        }
        write!(f, "Literal suffixes: {}", self.literals)
    }
}

/// Run the whole pipeline on in-memory input.
///
/// Extract, classify, render one wrapper per dimension that has units, then
/// render the literals module. No I/O happens here, so equal input and
/// options always give equal output.
pub fn generate(content: &str, format: InputFormat, options: &RenderOptions) -> Generation {
    let mut diagnostics = Diagnostics::new();

    let units = extract_units(content, format, &mut diagnostics);
    let groups = classify(units, &mut diagnostics);

    let mut files = Vec::new();
    for dimension in Dimension::ALL {
        let units = groups.units(dimension);
        if units.is_empty() {
            diagnostics.warn(Warning::EmptyDimension { dimension });
            continue;
        }
        files.push(GeneratedFile {
            path: PathBuf::from(UNITS_DIR).join(dimension.file_name()),
            contents: emit_wrapper(dimension, units, options),
        });
    }

    let literals = emit_literals(&groups, SuffixRegistry::new(), options);
    diagnostics.extend(literals.warnings);
    files.push(GeneratedFile {
        path: PathBuf::from(LITERALS_FILE),
        contents: literals.contents,
    });

    let summary = Summary::from_groups(&groups, literals.registry.len());

    Generation {
        groups,
        files,
        registry: literals.registry,
        diagnostics,
        summary,
    }
}
