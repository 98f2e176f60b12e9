// Identifier and literal-suffix conversions

/// Replacements applied, in order, before stripping characters that cannot
/// appear in a literal suffix.
const SYMBOL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("/", "_per_"),
    ("°", "deg"),
    ("′", "arcmin"),
    ("″", "arcsec"),
    ("µ", "u"), // U+00B5 micro sign
    ("μ", "u"), // U+03BC greek mu
    ("☉", "sol"),
    ("⊕", "earth"),
    ("☾", "moon"),
    ("♃", "jupiter"),
    (" ", "_"),
];

/// `NAUTICAL_MILE` -> `NauticalMile`
///
/// Empty segments (from leading, trailing or doubled underscores) are dropped.
pub fn to_display_identifier(constant_name: &str) -> String {
    constant_name
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Turn a unit symbol into the token that follows `_` in a literal suffix.
///
/// Returns `None` when nothing usable is left, in which case the unit gets
/// no literal operator.
pub fn sanitize_symbol_to_suffix(symbol: &str) -> Option<String> {
    let replaced = SYMBOL_SUBSTITUTIONS
        .iter()
        .fold(symbol.to_string(), |acc, &(from, to)| acc.replace(from, to));

    let suffix: String = replaced
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if suffix.is_empty() {
        None
    } else {
        Some(suffix)
    }
}

/// `PlanckLength` -> `PLANCK_LENGTH`
///
/// A separator goes before an uppercase letter when the previous character is
/// lowercase, or when it ends an uppercase run that is followed by lowercase
/// (`HTTPSClient` -> `HTTPS_CLIENT`).
pub fn pascal_to_upper_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = prev.is_lowercase()
                || (prev.is_uppercase() && next.is_some_and(char::is_lowercase));
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}

/// Escape `s` for use inside a double-quoted string literal.
/// UTF-8 passes through unchanged.
pub fn escape_string_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
