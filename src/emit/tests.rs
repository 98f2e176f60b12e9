#[cfg(test)]
mod tests {
    use super::super::literals::{emit_literals, SuffixRegistry};
    use super::super::wrapper::emit_wrapper;
    use super::super::RenderOptions;
    use crate::classify::{Dimension, DimensionGroups};
    use crate::diagnostics::Warning;
    use crate::extract::UnitDefinition;
    use std::collections::HashSet;

    fn unit(constant_name: &str, symbol: &str, discriminant: u32) -> UnitDefinition {
        UnitDefinition {
            constant_name: constant_name.to_string(),
            display_name: constant_name.to_string(),
            symbol: symbol.to_string(),
            discriminant,
        }
    }

    fn groups_of(units: Vec<UnitDefinition>) -> DimensionGroups {
        let mut groups = DimensionGroups::new();
        for u in units {
            let dimension = Dimension::from_discriminant(u.discriminant).unwrap();
            groups.push(dimension, u);
        }
        groups
    }

    #[test]
    fn test_wrapper_for_single_unit() {
        let units = vec![unit("KILOMETER", "km", 10001)];
        let text = emit_wrapper(Dimension::Length, &units, &RenderOptions::default());

        let expected = "\
#pragma once

#include \"../ffi_core.hpp\"

namespace qtty {

struct KilometerTag {};

template<> struct UnitTraits<KilometerTag> {
    static constexpr UnitId unit_id() { return UNIT_ID_KILOMETER; }
    static constexpr std::string_view symbol() { return \"km\"; }
};

using Kilometer = Quantity<KilometerTag>;

} // namespace qtty
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_wrapper_blocks_are_grouped_not_interleaved() {
        let units = vec![
            unit("METER", "m", 10011),
            unit("NAUTICAL_MILE", "nmi", 10030),
        ];
        let text = emit_wrapper(Dimension::Length, &units, &RenderOptions::default());

        let tag_meter = text.find("struct MeterTag {};").unwrap();
        let tag_mile = text.find("struct NauticalMileTag {};").unwrap();
        let trait_meter = text.find("UnitTraits<MeterTag>").unwrap();
        let trait_mile = text.find("UnitTraits<NauticalMileTag>").unwrap();
        let alias_meter = text.find("using Meter = Quantity<MeterTag>;").unwrap();
        let alias_mile = text
            .find("using NauticalMile = Quantity<NauticalMileTag>;")
            .unwrap();

        assert!(tag_meter < tag_mile);
        assert!(tag_mile < trait_meter);
        assert!(trait_meter < trait_mile);
        assert!(trait_mile < alias_meter);
        assert!(alias_meter < alias_mile);
        assert!(text.contains("return UNIT_ID_NAUTICAL_MILE;"));
        assert_eq!(text.matches("struct NauticalMileTag").count(), 1);
    }

    #[test]
    fn test_wrapper_options() {
        let options = RenderOptions {
            namespace: "units".to_string(),
            core_include: "core.hpp".to_string(),
            license_header: vec![
                "// SPDX-License-Identifier: MIT".to_string(),
                "// Generated file, do not edit".to_string(),
            ],
            emit_symbols: false,
        };
        let text = emit_wrapper(Dimension::Angle, &[unit("DEGREE", "°", 30004)], &options);

        assert!(text.starts_with(
            "// SPDX-License-Identifier: MIT\n// Generated file, do not edit\n\n#pragma once\n"
        ));
        assert!(text.contains("#include \"core.hpp\"\n"));
        assert!(text.contains("namespace units {\n"));
        assert!(text.ends_with("} // namespace units\n"));
        assert!(!text.contains("symbol()"));
    }

    #[test]
    fn test_wrapper_escapes_symbol() {
        let text = emit_wrapper(
            Dimension::Angle,
            &[unit("ARCSECOND", "\"", 30002)],
            &RenderOptions::default(),
        );
        assert!(text.contains("{ return \"\\\"\"; }"));
    }

    #[test]
    fn test_literals_for_single_unit() {
        let groups = groups_of(vec![unit("KILOMETER", "km", 10001)]);
        let output = emit_literals(&groups, SuffixRegistry::new(), &RenderOptions::default());

        let expected = "\
#pragma once

#include \"units/length.hpp\"

namespace qtty {

// Inline namespace for user-defined literals
inline namespace literals {

// ====================
// Length literals
// ====================

constexpr Kilometer operator\"\"_km(long double value) {
    return Kilometer(static_cast<double>(value));
}
constexpr Kilometer operator\"\"_km(unsigned long long value) {
    return Kilometer(static_cast<double>(value));
}

} // namespace literals

} // namespace qtty
";
        assert_eq!(output.contents, expected);
        assert!(output.warnings.is_empty());
        assert_eq!(output.registry.owner("km"), Some("Kilometer"));
    }

    #[test]
    fn test_collision_keeps_earlier_dimension() {
        // Time is listed first in the input but Length is processed first
        let groups = groups_of(vec![
            unit("MINUTE_OF_ARC", "m", 20050),
            unit("METER", "m", 10011),
        ]);
        let output = emit_literals(&groups, SuffixRegistry::new(), &RenderOptions::default());

        assert!(output.contents.contains("constexpr Meter operator\"\"_m(long double value)"));
        assert!(!output.contents.contains("MinuteOfArc"));
        assert!(!output.contents.contains("// Time literals"));
        assert_eq!(
            output.warnings,
            vec![Warning::SuffixCollision {
                suffix: "m".to_string(),
                skipped: "MinuteOfArc".to_string(),
                owner: "Meter".to_string(),
            }]
        );
        assert_eq!(output.registry.owner("m"), Some("Meter"));
    }

    #[test]
    fn test_collision_within_dimension_keeps_first() {
        let groups = groups_of(vec![
            unit("MICROMETER", "µm", 10005),
            unit("MICRON", "um", 10006),
        ]);
        let output = emit_literals(&groups, SuffixRegistry::new(), &RenderOptions::default());

        assert!(output.contents.contains("constexpr Micrometer operator\"\"_um("));
        assert!(!output.contents.contains("Micron"));
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn test_suffixes_are_unique() {
        let groups = groups_of(vec![
            unit("METER", "m", 10011),
            unit("KILOMETER", "km", 10014),
            unit("MINUTE", "min", 20010),
            unit("MILLI", "m", 20011),
            unit("DEGREE", "°", 30004),
            unit("DEG", "deg", 30005),
            unit("GRAM", "g", 40001),
            unit("WATT", "W", 50001),
        ]);
        let output = emit_literals(&groups, SuffixRegistry::new(), &RenderOptions::default());

        let mut seen = HashSet::new();
        for line in output.contents.lines() {
            if let Some(rest) = line.split("operator\"\"_").nth(1) {
                if line.contains("long double") {
                    let suffix = rest.split('(').next().unwrap();
                    assert!(seen.insert(suffix.to_string()), "duplicate suffix {}", suffix);
                }
            }
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(output.registry.len(), 6);
        assert_eq!(output.warnings.len(), 2);
        assert_eq!(output.contents.matches("operator\"\"_").count(), 12);
    }

    #[test]
    fn test_dimension_without_literals_has_no_banner() {
        let groups = groups_of(vec![
            unit("METER", "m", 10011),
            unit("LAMBDA_BAR", "λ", 20001),
            unit("GRAM", "g", 40001),
        ]);
        let output = emit_literals(&groups, SuffixRegistry::new(), &RenderOptions::default());

        assert!(output.contents.contains("// Length literals"));
        assert!(!output.contents.contains("// Time literals"));
        assert!(output.contents.contains("// Mass literals"));
        assert!(output.contents.contains("#include \"units/time.hpp\""));
        assert!(!output.contents.contains("#include \"units/angular.hpp\""));
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_registry_is_threaded_through() {
        let mut registry = SuffixRegistry::new();
        registry.claim("s", "Reserved").unwrap();

        let groups = groups_of(vec![unit("SECOND", "s", 20008)]);
        let output = emit_literals(&groups, registry, &RenderOptions::default());

        assert!(!output.contents.contains("Second"));
        assert_eq!(output.registry.owner("s"), Some("Reserved"));
        assert_eq!(output.registry.iter().count(), 1);
        assert_eq!(
            output.warnings[0].to_string(),
            "skipping literal _s for Second (conflicts with Reserved)"
        );
    }

    #[test]
    fn test_empty_groups_render_empty_namespace() {
        let output = emit_literals(
            &DimensionGroups::new(),
            SuffixRegistry::new(),
            &RenderOptions::default(),
        );
        assert!(output.contents.contains("inline namespace literals {\n\n} // namespace literals"));
        assert!(output.registry.is_empty());
    }
}
