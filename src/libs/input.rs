//! Pure validation helpers for console input.

/// Resolves a 1-based menu choice against the displayed candidates.
///
/// Returns the selected element iff `input` parses as an integer `i` with
/// `1 <= i <= candidates.len()`. Non-numeric input and out-of-range numbers
/// both yield `None`; callers cannot tell the two apart. Either way the
/// input is "not a menu choice".
pub fn valid_choice<'a, T>(candidates: &'a [T], input: &str) -> Option<&'a T> {
    let choice: usize = input.parse().ok()?;
    if (1..=candidates.len()).contains(&choice) {
        Some(&candidates[choice - 1])
    } else {
        None
    }
}

/// Accepts any name containing at least one non-whitespace character.
///
/// The name is returned verbatim, without trimming.
pub fn valid_name(input: &str) -> Option<&str> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input)
    }
}
