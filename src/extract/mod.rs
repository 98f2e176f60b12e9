// Turning raw input text into unit records

pub mod csv;
pub mod header;
pub mod models;

pub use csv::extract_from_csv;
pub use header::extract_from_header;
pub use models::{InputFormat, UnitDefinition};

use crate::diagnostics::Diagnostics;

/// Extract unit records from `content` according to `format`.
/// Records come back in the order they appear in the text.
pub fn extract_units(
    content: &str,
    format: InputFormat,
    diagnostics: &mut Diagnostics,
) -> Vec<UnitDefinition> {
    let units = match format {
        InputFormat::Header => extract_from_header(content),
        InputFormat::Csv => extract_from_csv(content, diagnostics),
    };
    tracing::debug!("extracted {} unit records ({:?} input)", units.len(), format);
    units
}
