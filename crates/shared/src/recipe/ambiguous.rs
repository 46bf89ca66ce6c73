/// Qualitative amounts that have no measurable quantity.
const AMBIGUOUS_QUANTITIES: &[&str] = &[
    "a pinch",
    "pinch",
    "a dash",
    "dash",
    "to taste",
    "taste",
    "a handful",
    "handful",
    "some",
    "a sprinkle",
    "sprinkle",
    "as needed",
];

/// Check if a quantity string is qualitative rather than numeric
///
/// Returns true for quantities like "a pinch", "to taste" or "handful",
/// false for "2", "0.5" or "1/2".
pub fn is_ambiguous_quantity(quantity: &str) -> bool {
    let normalized = quantity.trim().to_lowercase();

    if AMBIGUOUS_QUANTITIES
        .iter()
        .any(|keyword| normalized.starts_with(keyword) || normalized.ends_with(keyword))
    {
        return true;
    }

    !normalized
        .chars()
        .any(|c| c.is_ascii_digit() || c == '/' || c == '.')
}
