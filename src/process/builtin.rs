//! Process tables shipped with the tool, used when no lookup file is given.

/// Process temperature per dish in degrees Celsius.
pub const TEMPERATURE_DEG_C: &[(&str, f64)] = &[
    ("roast", 200.0),
    ("boiled", 100.0),
    ("creole", 151.0),
    ("sautée", 160.0),
    ("fried", 180.0),
    ("baked", 175.0),
    ("steamed", 100.0),
    ("grilled", 230.0),
];

/// Process duration per dish in minutes.
pub const DURATION_MINS: &[(&str, f64)] = &[
    ("roast", 75.0),
    ("boiled", 108.0),
    ("creole", 100.0),
    ("sautée", 99.0),
    ("fried", 12.0),
    ("baked", 45.0),
    ("steamed", 20.0),
    ("grilled", 15.0),
];

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
