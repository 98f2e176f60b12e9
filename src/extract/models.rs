use serde::{Deserialize, Serialize};

/// One unit record as it appears in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Constant suffix after `UNIT_ID_`, e.g. `NAUTICAL_MILE`
    pub constant_name: String,
    /// Name from the comment (header) or the `name` column (CSV)
    pub display_name: String,
    /// Raw symbol, e.g. `km`, `µm`, `°`
    pub symbol: String,
    /// Numeric unit id; the dimension lives in the leading digit(s)
    pub discriminant: u32,
}

/// Which flavour of input text is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// C header with `/* Name (sym) */ UNIT_ID_NAME = N` entries
    #[default]
    Header,
    /// Unit table with `discriminant,dimension,name,symbol,ratio` rows
    Csv,
}
