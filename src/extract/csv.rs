use crate::diagnostics::{Diagnostics, Warning};
use crate::extract::models::UnitDefinition;
use crate::naming::pascal_to_upper_snake;

const FIELD_COUNT: usize = 5;

/// Read the unit table:
///
/// ```text
/// discriminant,dimension,name,symbol,ratio
/// 10011,Length,Meter,m,1.0
/// ```
///
/// Blank lines and `#` comments are skipped. The `dimension` and `ratio`
/// columns are not interpreted; the dimension is derived from the
/// discriminant exactly as for header input.
pub fn extract_from_csv(content: &str, diagnostics: &mut Diagnostics) -> Vec<UnitDefinition> {
    let mut units = Vec::new();
    let mut seen_row = false;

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // The ratio column is last so any stray commas stay inside it
        let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').map(str::trim).collect();

        let is_first_row = !seen_row;
        seen_row = true;
        if is_first_row && fields[0].eq_ignore_ascii_case("discriminant") {
            continue;
        }

        if fields.len() != FIELD_COUNT {
            diagnostics.warn(Warning::MalformedRow {
                line: index + 1,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
            continue;
        }

        let discriminant = match fields[0].parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                diagnostics.warn(Warning::MalformedRow {
                    line: index + 1,
                    reason: format!("invalid discriminant '{}'", fields[0]),
                });
                continue;
            }
        };

        let name = fields[2];
        units.push(UnitDefinition {
            constant_name: pascal_to_upper_snake(name),
            display_name: name.to_string(),
            symbol: fields[3].to_string(),
            discriminant,
        });
    }

    units
}
