use crate::extract::models::UnitDefinition;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A unit entry in the FFI header:
    /// `/* Kilometer (km) */ UNIT_ID_KILOMETER = 10001`
    /// The comment must be followed by the declaration with only whitespace between.
    static ref UNIT_ENTRY: Regex = Regex::new(
        r"/\*\s*(\w+)\s*\(([^)]+)\)\s*\*/\s*UNIT_ID_(\w+)\s*=\s*(\d+)"
    ).unwrap();
}

/// Scan header text for unit entries, in textual order.
/// Anything that does not fit the comment + declaration pattern is ignored.
pub fn extract_from_header(content: &str) -> Vec<UnitDefinition> {
    let mut units = Vec::new();

    for caps in UNIT_ENTRY.captures_iter(content) {
        let constant_name = &caps[3];
        let discriminant = match caps[4].parse::<u32>() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(
                    "skipping UNIT_ID_{}: discriminant {} out of range ({})",
                    constant_name,
                    &caps[4],
                    e
                );
                continue;
            }
        };

        units.push(UnitDefinition {
            constant_name: constant_name.to_string(),
            display_name: caps[1].to_string(),
            symbol: caps[2].to_string(),
            discriminant,
        });
    }

    units
}
