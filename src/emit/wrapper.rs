use crate::classify::Dimension;
use crate::emit::{write_preamble, RenderOptions};
use crate::extract::UnitDefinition;
use crate::naming::{escape_string_literal, to_display_identifier};
use std::fmt::{self, Write};

/// Render the wrapper module for one dimension.
///
/// Three blocks, in this order: all tag structs, all `UnitTraits`
/// specializations, all `Quantity` aliases. Each block lists the units in
/// input order.
pub fn emit_wrapper(dimension: Dimension, units: &[UnitDefinition], options: &RenderOptions) -> String {
    let mut out = String::new();
    write_wrapper(&mut out, units, options).expect("formatting into a String cannot fail");
    tracing::debug!("rendered {} wrapper with {} units", dimension, units.len());
    out
}

fn write_wrapper(out: &mut String, units: &[UnitDefinition], options: &RenderOptions) -> fmt::Result {
    let names: Vec<String> = units
        .iter()
        .map(|u| to_display_identifier(&u.constant_name))
        .collect();

    write_preamble(out, options)?;
    writeln!(out, "#include \"{}\"", options.core_include)?;
    writeln!(out)?;
    writeln!(out, "namespace {} {{", options.namespace)?;
    writeln!(out)?;

    for name in &names {
        writeln!(out, "struct {}Tag {{}};", name)?;
    }
    writeln!(out)?;

    for (unit, name) in units.iter().zip(&names) {
        writeln!(out, "template<> struct UnitTraits<{}Tag> {{", name)?;
        writeln!(
            out,
            "    static constexpr UnitId unit_id() {{ return UNIT_ID_{}; }}",
            unit.constant_name
        )?;
        if options.emit_symbols {
            writeln!(
                out,
                "    static constexpr std::string_view symbol() {{ return \"{}\"; }}",
                escape_string_literal(&unit.symbol)
            )?;
        }
        writeln!(out, "}};")?;
    }
    writeln!(out)?;

    for name in &names {
        writeln!(out, "using {name} = Quantity<{name}Tag>;")?;
    }
    writeln!(out)?;

    writeln!(out, "}} // namespace {}", options.namespace)
}
