use crate::classify::{Dimension, DimensionGroups};
use crate::diagnostics::Warning;
use crate::emit::{write_preamble, RenderOptions};
use crate::naming::{sanitize_symbol_to_suffix, to_display_identifier};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

const BANNER_RULE: &str = "// ====================";

/// Literal suffixes claimed so far, mapped to the unit that owns each one.
/// A claimed suffix is never handed to another unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuffixRegistry {
    owners: BTreeMap<String, String>,
}

impl SuffixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `suffix` for `owner`. On conflict the registry is left untouched
    /// and the current owner is returned.
    pub fn claim(&mut self, suffix: &str, owner: &str) -> Result<(), String> {
        if let Some(existing) = self.owners.get(suffix) {
            return Err(existing.clone());
        }
        self.owners.insert(suffix.to_string(), owner.to_string());
        Ok(())
    }

    pub fn owner(&self, suffix: &str) -> Option<&str> {
        self.owners.get(suffix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.owners.iter().map(|(s, o)| (s.as_str(), o.as_str()))
    }
}

/// Result of rendering the literals module
#[derive(Debug, Clone)]
pub struct LiteralOutput {
    pub contents: String,
    /// Registry after every unit has been considered
    pub registry: SuffixRegistry,
    /// One `SuffixCollision` per unit that lost its suffix
    pub warnings: Vec<Warning>,
}

struct Literal {
    name: String,
    suffix: String,
}

/// Render every literal operator pair, one banner section per dimension.
///
/// Units are visited in `Dimension::ALL` order and then input order; that
/// visiting order decides who keeps a contested suffix. Units whose symbol
/// has no usable suffix are skipped without a warning.
pub fn emit_literals(
    groups: &DimensionGroups,
    mut registry: SuffixRegistry,
    options: &RenderOptions,
) -> LiteralOutput {
    let mut warnings = Vec::new();
    let mut sections: Vec<(Dimension, Vec<Literal>)> = Vec::new();

    for (dimension, units) in groups.iter() {
        let mut literals = Vec::new();

        for unit in units {
            let Some(suffix) = sanitize_symbol_to_suffix(&unit.symbol) else {
                tracing::debug!(
                    "no literal suffix for UNIT_ID_{} (symbol '{}')",
                    unit.constant_name,
                    unit.symbol
                );
                continue;
            };
            let name = to_display_identifier(&unit.constant_name);

            if let Err(owner) = registry.claim(&suffix, &name) {
                warnings.push(Warning::SuffixCollision {
                    suffix,
                    skipped: name,
                    owner,
                });
                continue;
            }

            literals.push(Literal { name, suffix });
        }

        if !literals.is_empty() {
            sections.push((dimension, literals));
        }
    }

    let mut contents = String::new();
    write_literals(&mut contents, groups, &sections, options)
        .expect("formatting into a String cannot fail");

    LiteralOutput {
        contents,
        registry,
        warnings,
    }
}

fn write_literals(
    out: &mut String,
    groups: &DimensionGroups,
    sections: &[(Dimension, Vec<Literal>)],
    options: &RenderOptions,
) -> fmt::Result {
    write_preamble(out, options)?;
    for (dimension, _) in groups.iter() {
        writeln!(out, "#include \"units/{}\"", dimension.file_name())?;
    }
    writeln!(out)?;
    writeln!(out, "namespace {} {{", options.namespace)?;
    writeln!(out)?;
    writeln!(out, "// Inline namespace for user-defined literals")?;
    writeln!(out, "inline namespace literals {{")?;

    for (dimension, literals) in sections {
        writeln!(out)?;
        writeln!(out, "{}", BANNER_RULE)?;
        writeln!(out, "// {} literals", dimension)?;
        writeln!(out, "{}", BANNER_RULE)?;

        for literal in literals {
            writeln!(out)?;
            for parameter in ["long double", "unsigned long long"] {
                writeln!(
                    out,
                    "constexpr {name} operator\"\"_{suffix}({parameter} value) {{",
                    name = literal.name,
                    suffix = literal.suffix,
                )?;
                writeln!(out, "    return {}(static_cast<double>(value));", literal.name)?;
                writeln!(out, "}}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "}} // namespace literals")?;
    writeln!(out)?;
    writeln!(out, "}} // namespace {}", options.namespace)
}
