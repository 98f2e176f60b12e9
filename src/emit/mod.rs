// Rendering wrapper and literal modules as text

pub mod literals;
pub mod wrapper;

#[cfg(test)]
mod tests;

pub use literals::{emit_literals, LiteralOutput, SuffixRegistry};
pub use wrapper::emit_wrapper;

use std::fmt::{self, Write};

/// Knobs that shape the generated text. Two runs with equal options and
/// equal input produce byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Namespace wrapping every declaration
    pub namespace: String,
    /// Include path of the core header, relative to a wrapper module
    pub core_include: String,
    /// Lines written verbatim at the top of every file
    pub license_header: Vec<String>,
    /// Add a `symbol()` accessor to each `UnitTraits` specialization
    pub emit_symbols: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: "qtty".to_string(),
            core_include: "../ffi_core.hpp".to_string(),
            license_header: Vec::new(),
            emit_symbols: true,
        }
    }
}

pub(crate) fn write_preamble(out: &mut String, options: &RenderOptions) -> fmt::Result {
    if !options.license_header.is_empty() {
        for line in &options.license_header {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "#pragma once")?;
    writeln!(out)
}
